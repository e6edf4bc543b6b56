//! Materializes flat path records into an arena-backed project tree

use std::collections::HashMap;

use crate::node::{Node, NodeId, NodeKind};
use crate::record::{PathRecord, RejectReason, RejectedRecord};
use crate::traits::Tree;

/// Internal arena entry: the node plus its links
#[derive(Debug, Clone)]
struct Entry {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A materialized project tree
///
/// Built once from a snapshot of path records and immutable afterwards.
/// Nodes live in an arena and are addressed by [`NodeId`]; the root is
/// always a directory with the empty path. Sibling order is first-insertion
/// order, reflecting the order of the input records.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    /// Arena storage for nodes
    entries: Vec<Entry>,
}

/// The result of a tree build: the tree plus every record that was skipped
///
/// A malformed record among thousands must not abort the build, so
/// rejections are collected here for the caller to inspect or surface.
#[derive(Debug, Clone)]
pub struct Materialized {
    /// The materialized tree
    pub tree: ProjectTree,
    /// Records that could not be materialized, in input order
    pub rejected: Vec<RejectedRecord>,
}

/// Build a tree from a flat sequence of path records
///
/// Records are processed in input order. Shared ancestor directories are
/// created once, on first mention, and later records reuse them; children
/// keep first-insertion order. Each record is validated before insertion:
/// a path with no segments after separator normalization rejects with
/// [`RejectReason::InvalidPath`], a negative size with
/// [`RejectReason::InvalidSize`].
///
/// Conflict policy is first-write-wins: a record that needs a directory
/// where a file already exists, a file where a directory already exists,
/// or a file path that was already materialized (regardless of size)
/// rejects with [`RejectReason::StructuralConflict`]. Already materialized
/// nodes are never mutated or dropped.
///
/// The function is pure and deterministic: the same records and root name
/// always produce a structurally identical tree.
pub fn build_tree(records: &[PathRecord], root_name: &str) -> Materialized {
    let mut builder = TreeBuilder::new(root_name);

    for record in records {
        if let Err(reason) = builder.insert(record) {
            builder.rejected.push(RejectedRecord::new(record.clone(), reason));
        }
    }

    Materialized {
        tree: builder.tree,
        rejected: builder.rejected,
    }
}

/// Construction-time state
///
/// The path index maps accumulated path -> node ID so intermediate
/// directories are found in O(1) instead of scanning siblings. It exists
/// only while building and is dropped with the builder.
struct TreeBuilder {
    tree: ProjectTree,
    path_index: HashMap<String, NodeId>,
    rejected: Vec<RejectedRecord>,
}

impl TreeBuilder {
    fn new(root_name: &str) -> Self {
        let root = Entry {
            node: Node::directory(root_name, ""),
            parent: None,
            children: Vec::new(),
        };

        Self {
            tree: ProjectTree {
                entries: vec![root],
            },
            path_index: HashMap::new(),
            rejected: Vec::new(),
        }
    }

    fn insert(&mut self, record: &PathRecord) -> Result<(), RejectReason> {
        let segments = record.segments();
        if segments.is_empty() {
            return Err(RejectReason::InvalidPath {
                path: record.path.clone(),
            });
        }

        let size = u64::try_from(record.size).map_err(|_| RejectReason::InvalidSize {
            size: record.size,
        })?;

        // Validate the whole walk before creating anything, so a rejected
        // record leaves no half-built directories behind.
        let mut accumulated = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if !accumulated.is_empty() {
                accumulated.push('/');
            }
            accumulated.push_str(segment);

            let is_leaf = i == segments.len() - 1;
            match self.path_index.get(&accumulated) {
                // A leaf may not land on any existing node; an intermediate
                // segment may only pass through a directory.
                Some(&id) if is_leaf || self.tree.entries[id.get()].node.is_file() => {
                    return Err(RejectReason::StructuralConflict { path: accumulated });
                }
                _ => {}
            }
        }

        // Walk again, creating missing directories and the file leaf
        let mut cursor = NodeId::ROOT;
        let mut accumulated = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if !accumulated.is_empty() {
                accumulated.push('/');
            }
            accumulated.push_str(segment);

            if i == segments.len() - 1 {
                let file = Node::file(*segment, accumulated.clone(), size);
                self.append_child(cursor, file, &accumulated);
            } else {
                cursor = match self.path_index.get(&accumulated) {
                    Some(&id) => id,
                    None => {
                        let dir = Node::directory(*segment, accumulated.clone());
                        self.append_child(cursor, dir, &accumulated)
                    }
                };
            }
        }

        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, node: Node, path: &str) -> NodeId {
        let id = NodeId::new(self.tree.entries.len());
        self.tree.entries.push(Entry {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.tree.entries[parent.get()].children.push(id);
        self.path_index.insert(path.to_string(), id);
        id
    }
}

impl ProjectTree {
    /// Build a tree from path records (see [`build_tree`])
    pub fn materialize(records: &[PathRecord], root_name: &str) -> Materialized {
        build_tree(records, root_name)
    }

    /// Cumulative byte size of the subtree rooted at `id`
    ///
    /// For a file this is its own size; for a directory, the sum over all
    /// files beneath it. Returns 0 for invalid IDs.
    pub fn subtree_size(&self, id: NodeId) -> u64 {
        let Some(entry) = self.entries.get(id.get()) else {
            return 0;
        };

        match entry.node.kind {
            NodeKind::File => entry.node.size,
            NodeKind::Directory => entry
                .children
                .iter()
                .map(|&child| self.subtree_size(child))
                .sum(),
        }
    }

    /// Count of file nodes in the tree
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.node.is_file()).count()
    }

    /// Count of directory nodes in the tree, including the root
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.node.is_directory()).count()
    }
}

impl Tree for ProjectTree {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        self.entries.get(id.get()).map(|e| &e.node)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries.get(id.get())?.parent
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(
            self.entries
                .get(id.get())
                .map(|e| e.children.iter().copied())
                .into_iter()
                .flatten(),
        )
    }

    fn node_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Tree;

    #[test]
    fn test_empty_input() {
        let materialized = build_tree(&[], "root");
        let tree = &materialized.tree;

        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.path(NodeId::ROOT), Some(""));
        assert_eq!(tree.name(NodeId::ROOT), Some("root"));
        assert_eq!(tree.child_count(NodeId::ROOT), 0);
        assert!(materialized.rejected.is_empty());
    }

    #[test]
    fn test_single_segment_path_is_direct_child() {
        let materialized = build_tree(&[PathRecord::new("x.py", 5)], "root");
        let tree = &materialized.tree;

        let children: Vec<_> = tree.children(NodeId::ROOT).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(tree.name(children[0]), Some("x.py"));
        assert_eq!(tree.size(children[0]), Some(5));
        assert!(tree.is_file(children[0]));
    }

    #[test]
    fn test_shared_ancestors_deduplicated() {
        let records = vec![
            PathRecord::new("a/b.py", 10),
            PathRecord::new("a/c.py", 20),
        ];
        let materialized = build_tree(&records, "root");
        let tree = &materialized.tree;

        let root_children: Vec<_> = tree.children(NodeId::ROOT).collect();
        assert_eq!(root_children.len(), 1);

        let a = root_children[0];
        assert_eq!(tree.name(a), Some("a"));
        assert!(tree.is_directory(a));

        let names: Vec<_> = tree
            .children(a)
            .filter_map(|id| tree.name(id).map(str::to_string))
            .collect();
        assert_eq!(names, vec!["b.py", "c.py"]);
    }

    #[test]
    fn test_subtree_size() {
        let records = vec![
            PathRecord::new("a/b.py", 10),
            PathRecord::new("a/deep/c.py", 20),
            PathRecord::new("top.py", 1),
        ];
        let tree = build_tree(&records, "root").tree;

        let a = tree.find_by_path("a").unwrap();
        assert_eq!(tree.subtree_size(a), 30);
        assert_eq!(tree.subtree_size(NodeId::ROOT), 31);

        let b = tree.find_by_path("a/b.py").unwrap();
        assert_eq!(tree.subtree_size(b), 10);
    }

    #[test]
    fn test_node_counts() {
        let records = vec![
            PathRecord::new("a/b.py", 10),
            PathRecord::new("a/deep/c.py", 20),
        ];
        let tree = build_tree(&records, "root").tree;

        assert_eq!(tree.file_count(), 2);
        assert_eq!(tree.directory_count(), 3); // root, a, deep
    }

    #[test]
    fn test_rejected_record_creates_no_directories() {
        // "a" is a file, so "a/b.py" must reject without leaving a partial
        // "a" directory behind.
        let records = vec![
            PathRecord::new("a", 1),
            PathRecord::new("a/b.py", 2),
        ];
        let materialized = build_tree(&records, "root");

        assert_eq!(materialized.rejected.len(), 1);
        assert_eq!(materialized.tree.node_count(), 2); // root + file "a"
        assert!(materialized.tree.is_file(materialized.tree.find_by_path("a").unwrap()));
    }
}
