use thiserror::Error;

/// Errors surfaced by a state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was created without an initial state and nothing has set one yet.
    #[error("store `{store}` is not initialized")]
    Uninitialized { store: &'static str },
}

/// Errors that can occur while loading a toolbar configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced by the edit history
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("block index {index} is out of range (document has {len} blocks)")]
    InvalidIndex { index: usize, len: usize },
}

pub type CommandResult = Result<(), CommandError>;
