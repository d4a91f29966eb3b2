use thiserror::Error;

/// Handle to a node in a [`FolderTree`].
///
/// Ids are never reused: removing a folder tombstones its arena slot, and
/// any later use of the id fails with [`FolderError::NotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FolderId(usize);

#[derive(Debug, Error, PartialEq)]
pub enum FolderError {
    #[error("no such folder: {0:?}")]
    NotFound(FolderId),
    #[error("folder {child:?} is already a child of {parent:?}")]
    AlreadyAttached { parent: FolderId, child: FolderId },
    #[error("folder {child:?} is not a child of {parent:?}")]
    NotAChild { parent: FolderId, child: FolderId },
    #[error("folder {0:?} still has children")]
    HasChildren(FolderId),
    #[error("the root folder cannot be removed")]
    IsRoot,
}

/// A named node. Children are ordered and exclusively owned by their
/// parent; a node appears in at most one children list.
#[derive(Debug)]
pub struct Folder {
    name: String,
    children: Vec<FolderId>,
}

impl Folder {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[FolderId] {
        &self.children
    }
}

/// Arena-backed folder tree with a fixed root.
///
/// Nodes are addressed by [`FolderId`]. A node is created detached via
/// [`create`](FolderTree::create), joined to the tree via
/// [`attach`](FolderTree::attach), and leaves the tree again only through
/// [`detach`](FolderTree::detach) followed by [`remove`](FolderTree::remove).
pub struct FolderTree {
    nodes: Vec<Option<Folder>>,
    root: FolderId,
}

impl FolderTree {
    pub fn new(root_name: &str) -> Self {
        let root = Folder {
            name: root_name.to_string(),
            children: Vec::new(),
        };
        Self {
            nodes: vec![Some(root)],
            root: FolderId(0),
        }
    }

    pub fn root(&self) -> FolderId {
        self.root
    }

    /// Allocate a detached folder. It joins the tree via [`attach`](Self::attach).
    pub fn create(&mut self, name: &str) -> FolderId {
        let id = FolderId(self.nodes.len());
        self.nodes.push(Some(Folder {
            name: name.to_string(),
            children: Vec::new(),
        }));
        id
    }

    fn node(&self, id: FolderId) -> Result<&Folder, FolderError> {
        self.nodes
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .ok_or(FolderError::NotFound(id))
    }

    fn node_mut(&mut self, id: FolderId) -> Result<&mut Folder, FolderError> {
        self.nodes
            .get_mut(id.0)
            .and_then(|slot| slot.as_mut())
            .ok_or(FolderError::NotFound(id))
    }

    pub fn name(&self, id: FolderId) -> Result<&str, FolderError> {
        Ok(self.node(id)?.name())
    }

    /// Replace the folder's name unconditionally, returning the old one.
    pub fn rename(&mut self, id: FolderId, new_name: &str) -> Result<String, FolderError> {
        let node = self.node_mut(id)?;
        Ok(std::mem::replace(&mut node.name, new_name.to_string()))
    }

    /// Append `child` to `parent`'s children.
    ///
    /// A children list never holds the same id twice; attaching an id
    /// already present fails with `AlreadyAttached`.
    pub fn attach(&mut self, parent: FolderId, child: FolderId) -> Result<(), FolderError> {
        self.node(child)?;
        let node = self.node_mut(parent)?;
        if node.children.contains(&child) {
            return Err(FolderError::AlreadyAttached { parent, child });
        }
        node.children.push(child);
        Ok(())
    }

    /// Remove the first occurrence of `child` from `parent`'s children.
    ///
    /// Fails with `NotAChild` if `child` is not in the list.
    pub fn detach(&mut self, parent: FolderId, child: FolderId) -> Result<(), FolderError> {
        let node = self.node_mut(parent)?;
        match node.children.iter().position(|&c| c == child) {
            Some(idx) => {
                node.children.remove(idx);
                Ok(())
            }
            None => Err(FolderError::NotAChild { parent, child }),
        }
    }

    /// Destroy a detached, childless folder, returning the node.
    ///
    /// The arena slot is tombstoned; the id is dead afterwards.
    pub fn remove(&mut self, id: FolderId) -> Result<Folder, FolderError> {
        if id == self.root {
            return Err(FolderError::IsRoot);
        }
        if !self.node(id)?.children.is_empty() {
            return Err(FolderError::HasChildren(id));
        }
        let slot = self.nodes.get_mut(id.0).ok_or(FolderError::NotFound(id))?;
        slot.take().ok_or(FolderError::NotFound(id))
    }

    /// Read-only view of `id`'s children, in insertion order.
    pub fn children(&self, id: FolderId) -> Result<&[FolderId], FolderError> {
        Ok(self.node(id)?.children())
    }

    /// Child names in insertion order, for display.
    pub fn child_names(&self, id: FolderId) -> Result<Vec<&str>, FolderError> {
        self.node(id)?
            .children
            .iter()
            .map(|&c| self.name(c))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_named_empty_root() {
        let tree = FolderTree::new("tmp");
        let root = tree.root();
        assert_eq!(tree.name(root).unwrap(), "tmp");
        assert!(tree.children(root).unwrap().is_empty());
    }

    #[test]
    fn attach_preserves_insertion_order() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        let b = tree.create("videos");
        tree.attach(root, a).unwrap();
        tree.attach(root, b).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a, b]);
        assert_eq!(tree.child_names(root).unwrap(), vec!["pics", "videos"]);
    }

    #[test]
    fn attach_rejects_duplicate_child() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        tree.attach(root, a).unwrap();
        assert_eq!(
            tree.attach(root, a),
            Err(FolderError::AlreadyAttached {
                parent: root,
                child: a
            })
        );
        assert_eq!(tree.children(root).unwrap().len(), 1);
    }

    #[test]
    fn rename_returns_old_name() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let old = tree.rename(root, "docs").unwrap();
        assert_eq!(old, "tmp");
        assert_eq!(tree.name(root).unwrap(), "docs");
    }

    #[test]
    fn detach_removes_only_named_child() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        let b = tree.create("videos");
        tree.attach(root, a).unwrap();
        tree.attach(root, b).unwrap();
        tree.detach(root, a).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[b]);
    }

    #[test]
    fn detach_absent_child_fails_fast() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        assert_eq!(
            tree.detach(root, a),
            Err(FolderError::NotAChild {
                parent: root,
                child: a
            })
        );
    }

    #[test]
    fn remove_tombstones_id() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        tree.attach(root, a).unwrap();
        tree.detach(root, a).unwrap();
        let node = tree.remove(a).unwrap();
        assert_eq!(node.name(), "pics");
        assert_eq!(tree.name(a), Err(FolderError::NotFound(a)));
        // The id is dead for every operation, not just lookup.
        assert_eq!(tree.rename(a, "x"), Err(FolderError::NotFound(a)));
        assert_eq!(tree.attach(root, a), Err(FolderError::NotFound(a)));
    }

    #[test]
    fn remove_root_is_an_error() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        assert_eq!(tree.remove(root).unwrap_err(), FolderError::IsRoot);
    }

    #[test]
    fn remove_with_children_is_an_error() {
        let mut tree = FolderTree::new("tmp");
        let root = tree.root();
        let a = tree.create("pics");
        let inner = tree.create("cats");
        tree.attach(root, a).unwrap();
        tree.attach(a, inner).unwrap();
        tree.detach(root, a).unwrap();
        assert_eq!(tree.remove(a).unwrap_err(), FolderError::HasChildren(a));
    }
}
