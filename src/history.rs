use crate::command::Command;
use crate::document::Document;
use crate::error::{CommandError, CommandResult};

/// Whether undo and redo currently have anything to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryAvailability {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// The undo/redo surface the toolbar drives. How edits are recorded and
/// reverted is up to the implementor.
pub trait EditHistory {
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    fn undo(&mut self) -> CommandResult;
    fn redo(&mut self) -> CommandResult;

    fn availability(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

/// Manages the history of executed commands for undo/redo functionality
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and add it to the history if successful
    pub fn execute(&mut self, mut command: Command, document: &mut Document) -> CommandResult {
        command.execute(document)?;
        log::debug!("executed {}", command.name());
        self.undo_stack.push(command);
        self.redo_stack.clear();
        Ok(())
    }

    pub fn undo(&mut self, document: &mut Document) -> CommandResult {
        let command = self.undo_stack.pop().ok_or(CommandError::NothingToUndo)?;
        if let Err(err) = command.undo(document) {
            self.undo_stack.push(command);
            return Err(err);
        }
        log::debug!("undid {}", command.name());
        self.redo_stack.push(command);
        Ok(())
    }

    pub fn redo(&mut self, document: &mut Document) -> CommandResult {
        let mut command = self.redo_stack.pop().ok_or(CommandError::NothingToRedo)?;
        if let Err(err) = command.execute(document) {
            self.redo_stack.push(command);
            return Err(err);
        }
        log::debug!("redid {}", command.name());
        self.undo_stack.push(command);
        Ok(())
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }
}

/// A document together with its command history.
#[derive(Debug, Default)]
pub struct EditSession {
    document: Document,
    history: CommandHistory,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            history: CommandHistory::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        self.history.execute(command, &mut self.document)
    }
}

impl EditHistory for EditSession {
    fn can_undo(&self) -> bool {
        !self.history.undo_stack.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.history.redo_stack.is_empty()
    }

    fn undo(&mut self) -> CommandResult {
        self.history.undo(&mut self.document)
    }

    fn redo(&mut self) -> CommandResult {
        self.history.redo(&mut self.document)
    }
}
