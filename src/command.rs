use crate::document::{Block, Document};
use crate::error::{CommandError, CommandResult};

/// Undoable edits to a [`Document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertBlock {
        index: usize,
        block: Block,
    },
    RemoveBlock {
        index: usize,
        /// Filled in when the command runs so it can be undone.
        removed: Option<Block>,
    },
}

impl Command {
    pub fn execute(&mut self, document: &mut Document) -> CommandResult {
        let len = document.len();
        match self {
            Command::InsertBlock { index, block } => {
                if !document.insert_block(*index, block.clone()) {
                    return Err(CommandError::InvalidIndex { index: *index, len });
                }
            }
            Command::RemoveBlock { index, removed } => {
                let block = document
                    .remove_block(*index)
                    .ok_or(CommandError::InvalidIndex { index: *index, len })?;
                *removed = Some(block);
            }
        }
        Ok(())
    }

    pub fn undo(&self, document: &mut Document) -> CommandResult {
        let len = document.len();
        match self {
            Command::InsertBlock { index, .. } => {
                document
                    .remove_block(*index)
                    .ok_or(CommandError::InvalidIndex { index: *index, len })?;
            }
            Command::RemoveBlock { index, removed } => {
                // A remove that never ran has nothing to restore.
                if let Some(block) = removed {
                    if !document.insert_block(*index, block.clone()) {
                        return Err(CommandError::InvalidIndex { index: *index, len });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertBlock { .. } => "Insert Block",
            Command::RemoveBlock { .. } => "Remove Block",
        }
    }
}
