//! Serializable view model for tree-rendering surfaces

use serde::{Deserialize, Serialize};

use crate::materialize::ProjectTree;
use crate::node::{NodeId, NodeKind};
use crate::traits::Tree;

/// A nested, serializable rendition of the tree
///
/// This is the payload handed to a rendering surface: directories carry
/// their children inline, files carry their size. Expanded/collapsed state
/// is presentation state and deliberately absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewNode {
    /// A directory with its children, in tree order
    Directory {
        name: String,
        path: String,
        children: Vec<ViewNode>,
    },
    /// A file with its size in bytes
    File {
        name: String,
        path: String,
        size: u64,
    },
}

impl ViewNode {
    /// The node's name
    pub fn name(&self) -> &str {
        match self {
            ViewNode::Directory { name, .. } | ViewNode::File { name, .. } => name,
        }
    }

    /// The node's relative path
    pub fn path(&self) -> &str {
        match self {
            ViewNode::Directory { path, .. } | ViewNode::File { path, .. } => path,
        }
    }
}

impl ProjectTree {
    /// Produce the nested view model rooted at the tree's root
    pub fn to_view(&self) -> ViewNode {
        self.view_node(self.root())
    }

    fn view_node(&self, id: NodeId) -> ViewNode {
        let node = match self.get(id) {
            Some(node) => node,
            // ids originate from this arena and are never out of bounds
            None => unreachable!("invalid node id {id}"),
        };

        match node.kind {
            NodeKind::Directory => ViewNode::Directory {
                name: node.name.clone(),
                path: node.path.clone(),
                children: self.children(id).map(|child| self.view_node(child)).collect(),
            },
            NodeKind::File => ViewNode::File {
                name: node.name.clone(),
                path: node.path.clone(),
                size: node.size,
            },
        }
    }
}
