//! Core tree traits for navigating materialized trees

use crate::node::{Node, NodeId, NodeKind};

/// A rooted tree of directories and files, addressed by node IDs
///
/// Implementations provide the basic arena lookups; derived methods build
/// the higher-level navigation on top of them. Paths are the slash-joined
/// relative paths stored on the nodes themselves, with `""` naming the root.
///
/// # Example
///
/// ```ignore
/// fn print_tree<T: Tree>(tree: &T) {
///     for id in tree.walk(TraversalOrder::PreOrder) {
///         let node = tree.get(id).unwrap();
///         let depth = tree.depth(id);
///         println!("{:indent$}{}", "", node.name, indent = depth * 2);
///     }
/// }
/// ```
pub trait Tree {
    /// Get the root node ID (always exists)
    ///
    /// The root is guaranteed to exist and typically has ID 0.
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is invalid.
    fn get(&self, id: NodeId) -> Option<&Node>;

    /// Get the parent of a node
    ///
    /// Returns `None` for the root node.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Iterate over children of a node, in first-insertion order
    ///
    /// Returns an empty iterator for file nodes or invalid IDs.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Count total nodes in the tree
    fn node_count(&self) -> usize;

    /// Check if a node is a file
    ///
    /// Returns false for invalid IDs.
    fn is_file(&self, id: NodeId) -> bool {
        self.get(id)
            .map(|n| n.kind == NodeKind::File)
            .unwrap_or(false)
    }

    /// Check if a node is a directory
    ///
    /// Returns false for invalid IDs.
    fn is_directory(&self, id: NodeId) -> bool {
        self.get(id)
            .map(|n| n.kind == NodeKind::Directory)
            .unwrap_or(false)
    }

    /// Get the name of a node
    ///
    /// Returns `None` if the ID is invalid.
    fn name(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Get the relative path of a node (`""` for the root)
    ///
    /// Returns `None` if the ID is invalid.
    fn path(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.path.as_str())
    }

    /// Get the size of a node in bytes (0 for directories)
    ///
    /// Returns `None` if the ID is invalid.
    fn size(&self, id: NodeId) -> Option<u64> {
        self.get(id).map(|n| n.size)
    }

    /// Get the depth of a node (root = 0)
    ///
    /// Returns 0 for invalid IDs.
    fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            depth += 1;
            current = self.parent(parent_id);
        }
        depth
    }

    /// Count children of a node
    ///
    /// Returns 0 for file nodes or invalid IDs.
    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    /// Get all ancestors of a node, from parent to root
    ///
    /// Returns an empty vector for the root or invalid IDs.
    fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Check if a node is an ancestor of another
    fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }

    /// Find a node by its slash-separated relative path
    ///
    /// The empty path selects the root. Returns `None` if any segment
    /// doesn't exist.
    fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self
                .children(current)
                .find(|&id| self.name(id) == Some(segment))?;
        }

        Some(current)
    }
}

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

/// Extension trait providing tree traversal and search utilities
///
/// This trait is automatically implemented for all types that implement `Tree`.
pub trait TreeTraversal: Tree {
    /// Walk the tree from the root in the specified order
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, self.root(), order)
    }

    /// Walk the tree starting from a specific node
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self>
    where
        Self: Sized,
    {
        TreeWalker::new(self, start, order)
    }

    /// Get all file nodes
    fn leaves(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_file(id))
            .collect()
    }

    /// Get all directory nodes
    fn directories(&self) -> Vec<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.is_directory(id))
            .collect()
    }

    /// Find nodes matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node) -> bool,
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }

    /// Find a node by name (first match in pre-order)
    fn find_by_name(&self, name: &str) -> Option<NodeId>
    where
        Self: Sized,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.name(id) == Some(name))
    }
}

// Blanket implementation for all Tree types
impl<T: Tree> TreeTraversal for T {}

/// Iterator for traversing a tree in different orders
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    stack: Vec<NodeId>,
    visited: std::collections::HashSet<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        Self {
            tree,
            order,
            stack: vec![start],
            visited: std::collections::HashSet::new(),
        }
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    fn next_preorder(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;

        // Push children in reverse so they pop in insertion order
        let children: Vec<_> = self.tree.children(current).collect();
        for child in children.into_iter().rev() {
            self.stack.push(child);
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(&current) = self.stack.last() {
            if self.visited.contains(&current) {
                self.stack.pop();
                return Some(current);
            }

            self.visited.insert(current);

            let children: Vec<_> = self.tree.children(current).collect();
            for child in children.into_iter().rev() {
                self.stack.push(child);
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        if self.stack.is_empty() {
            return None;
        }

        // Pop from front (treating stack as queue)
        let current = self.stack.remove(0);

        for child in self.tree.children(current) {
            self.stack.push(child);
        }

        Some(current)
    }
}
