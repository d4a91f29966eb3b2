use crate::command::Command;

/// Undo history for folder commands.
/// Last-in-first-out: the most recently executed command is reversed first.
pub struct History {
    entries: Vec<Command>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: Command) {
        self.entries.push(cmd);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.entries.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::FolderTree;

    #[test]
    fn pop_is_last_in_first_out() {
        let tree = FolderTree::new("tmp");
        let root = tree.root();
        let mut history = History::new();
        history.push(Command::Rename {
            target: root,
            prev_name: "first".into(),
        });
        history.push(Command::Rename {
            target: root,
            prev_name: "second".into(),
        });
        assert_eq!(history.len(), 2);

        match history.pop() {
            Some(Command::Rename { prev_name, .. }) => assert_eq!(prev_name, "second"),
            other => panic!("unexpected entry: {:?}", other),
        }
        match history.pop() {
            Some(Command::Rename { prev_name, .. }) => assert_eq!(prev_name, "first"),
            other => panic!("unexpected entry: {:?}", other),
        }
        assert!(history.pop().is_none());
        assert!(history.is_empty());
    }
}
