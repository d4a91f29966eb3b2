use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::console::Console;
use crate::folder::{FolderError, FolderId, FolderTree};
use crate::history::History;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Undo requested on a command that cannot be reversed.
    #[error("unsupported operation: {0} cannot be undone")]
    Unsupported(&'static str),
    #[error(transparent)]
    Folder(#[from] FolderError),
    #[error("failed to read operator input: {0}")]
    Input(#[from] io::Error),
}

/// An executed, reversible folder operation.
///
/// Each variant records just enough state to reverse itself: an add keeps
/// the id of the folder it created, a rename keeps the name it replaced.
/// Undo-all is the exception; it reverses the others and cannot itself be
/// reversed.
///
/// Execution happens through the `execute_*` helpers, which prompt the
/// operator where a name is needed, apply the mutation, and push the
/// recorded command onto the history. Reversal consumes the command, so a
/// command cannot be undone twice.
#[derive(Debug)]
pub enum Command {
    AddChild { parent: FolderId, child: FolderId },
    Rename { target: FolderId, prev_name: String },
    UndoAll,
}

impl Command {
    /// Prompt for a name, create a folder with it under `parent`, and
    /// record the executed command on `history`. Returns the new id.
    ///
    /// An input failure propagates before the tree is touched; nothing is
    /// recorded.
    pub fn execute_add_child<R: BufRead, W: Write>(
        tree: &mut FolderTree,
        console: &mut Console<R, W>,
        history: &mut History,
        parent: FolderId,
    ) -> Result<FolderId, CommandError> {
        tree.name(parent)?;
        let name = console.prompt("Name for the new folder")?;
        let child = tree.create(&name);
        tree.attach(parent, child)?;
        history.push(Command::AddChild { parent, child });
        Ok(child)
    }

    /// Record `target`'s current name, prompt for a new one, apply it, and
    /// record the executed command on `history`. Returns the new name.
    pub fn execute_rename<R: BufRead, W: Write>(
        tree: &mut FolderTree,
        console: &mut Console<R, W>,
        history: &mut History,
        target: FolderId,
    ) -> Result<String, CommandError> {
        let prev_name = tree.name(target)?.to_string();
        let new_name = console.prompt("New folder name")?;
        tree.rename(target, &new_name)?;
        history.push(Command::Rename { target, prev_name });
        Ok(new_name)
    }

    /// Pop and reverse every command on `history`, most recent first.
    /// Returns the number reversed; an empty history is a no-op.
    ///
    /// Never recorded on the history itself: there is no way to undo an
    /// undo-all.
    pub fn execute_undo_all(
        tree: &mut FolderTree,
        history: &mut History,
    ) -> Result<usize, CommandError> {
        let mut undone = 0;
        while let Some(cmd) = history.pop() {
            cmd.undo(tree)?;
            undone += 1;
        }
        Ok(undone)
    }

    /// Reverse this command's effect on the tree, consuming it.
    ///
    /// An add detaches and destroys the folder it created; a rename
    /// restores the recorded name. Undo-all always fails with
    /// [`CommandError::Unsupported`].
    pub fn undo(self, tree: &mut FolderTree) -> Result<(), CommandError> {
        match self {
            Command::AddChild { parent, child } => {
                tree.detach(parent, child)?;
                tree.remove(child)?;
                Ok(())
            }
            Command::Rename { target, prev_name } => {
                tree.rename(target, &prev_name)?;
                Ok(())
            }
            Command::UndoAll => Err(CommandError::Unsupported("undo-all")),
        }
    }

    /// Short label for status lines and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            Command::AddChild { .. } => "add folder",
            Command::Rename { .. } => "rename folder",
            Command::UndoAll => "undo all",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
