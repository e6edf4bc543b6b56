//! Core node types for the materialized tree

use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a node within a tree
///
/// Internally represented as an index into an arena-based storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The type/kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// A directory - can have children
    #[display(fmt = "Directory")]
    Directory,

    /// A file - cannot have children
    #[display(fmt = "File")]
    File,
}

impl NodeKind {
    /// Returns true if this is a directory node
    pub const fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Returns true if this is a file node
    pub const fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A single node in the materialized tree
///
/// `path` is the slash-joined relative path from the root; the root itself
/// carries the empty path. `name` is the last path segment (or the root
/// label for the root node).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// The node's name (last path segment, not full path)
    pub name: String,
    /// Relative path from the root ("" for the root itself)
    pub path: String,
    /// Whether this is a directory or file node
    pub kind: NodeKind,
    /// File size in bytes (0 for directories)
    pub size: u64,
}

impl Node {
    /// Create a new directory node
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory,
            size: 0,
        }
    }

    /// Create a new file node
    pub fn file(name: impl Into<String>, path: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            size,
        }
    }

    /// Returns true if this is a directory node
    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Returns true if this is a file node
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Directory => write!(f, "{}/", self.name),
            NodeKind::File => write!(f, "{} ({} bytes)", self.name, self.size),
        }
    }
}
