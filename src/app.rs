use std::io::{BufRead, Write};
use std::sync::OnceLock;

use anyhow::Result;

use crate::command::Command;
use crate::config::Config;
use crate::console::Console;
use crate::folder::{FolderId, FolderTree};
use crate::history::History;

/// Write a debug line to the file at $FOLDO_LOG (if set).
/// Usage: `debug_log!("undo: {}", desc);`
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if let Some(path) = debug_log_path() {
            if let Ok(mut f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
            {
                use std::io::Write;
                let _ = writeln!(f, "{}", format_args!($($arg)*));
            }
        }
    };
}

fn debug_log_path() -> Option<&'static str> {
    static PATH: OnceLock<Option<String>> = OnceLock::new();
    PATH.get_or_init(|| std::env::var("FOLDO_LOG").ok())
        .as_deref()
}

/// The driver: owns the folder tree, the undo history, and the operator
/// console, and sequences the demo script over them.
pub struct App<R, W> {
    pub tree: FolderTree,
    pub history: History,
    pub console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: &Config, input: R, output: W) -> Self {
        Self {
            tree: FolderTree::new(&config.root),
            history: History::new(),
            console: Console::new(input, output, &config.prompt),
        }
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Prompt for a name and add a folder with it under `parent`.
    pub fn add_child(&mut self, parent: FolderId) -> Result<FolderId> {
        let child = Command::execute_add_child(
            &mut self.tree,
            &mut self.console,
            &mut self.history,
            parent,
        )?;
        let name = self.tree.name(child)?.to_string();
        debug_log!("add: {} (history depth {})", name, self.history.len());
        self.console.status(&format!("Added folder {}", name))?;
        Ok(child)
    }

    /// Prompt for a new name for `target` and apply it.
    pub fn rename(&mut self, target: FolderId) -> Result<()> {
        let new_name = Command::execute_rename(
            &mut self.tree,
            &mut self.console,
            &mut self.history,
            target,
        )?;
        debug_log!("rename: -> {}", new_name);
        self.console.status(&format!("Renamed to {}", new_name))?;
        Ok(())
    }

    /// Reverse the most recent command, if any.
    pub fn undo(&mut self) -> Result<()> {
        if let Some(cmd) = self.history.pop() {
            let desc = cmd.describe();
            cmd.undo(&mut self.tree)?;
            debug_log!("undo: {}", desc);
            self.console.status(&format!("Undone: {}", desc))?;
        } else {
            self.console.status("Nothing to undo")?;
        }
        Ok(())
    }

    /// Reverse every recorded command, most recent first.
    pub fn undo_all(&mut self) -> Result<usize> {
        let undone = Command::execute_undo_all(&mut self.tree, &mut self.history)?;
        debug_log!("{}: {} command(s)", Command::UndoAll.describe(), undone);
        self.console
            .status(&format!("Undone {} command(s)", undone))?;
        Ok(undone)
    }

    /// Print `id`'s child names, space-separated, on one line.
    pub fn list_children(&mut self, id: FolderId) -> Result<()> {
        let names = self.tree.child_names(id)?;
        self.console.status(&names.join(" "))?;
        Ok(())
    }

    // ── Demo script ─────────────────────────────────────────────────

    /// The fixed demonstration sequence: rename the root and take it
    /// back, then add two folders, undoing the second, listing the
    /// children after each step, and finish with an undo-all sweep.
    pub fn run_demo(&mut self) -> Result<()> {
        let root = self.tree.root();
        let name = self.tree.name(root)?.to_string();
        debug_log!("demo: root {}", name);
        self.console.status(&format!("Root folder: {}", name))?;

        self.rename(root)?;
        self.undo()?;

        self.add_child(root)?;
        self.list_children(root)?;
        self.add_child(root)?;
        self.list_children(root)?;

        self.undo()?;
        self.list_children(root)?;

        self.undo_all()?;
        self.list_children(root)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
