//! Project Tree Library
//!
//! Materializes a flat list of relative file paths into a rooted tree of
//! directories and files, the shape a project browser renders. Input comes
//! from whatever surface enumerated the files (a folder picker, a scanner);
//! this crate owns only the in-memory transformation.
//!
//! # Core Concepts
//!
//! - **PathRecord**: One `(relative path, size)` entry from the enumeration
//! - **ProjectTree**: Arena-backed tree, built once and immutable after
//! - **Tree / TreeTraversal**: Navigation and walking over node IDs
//!
//! Malformed records are rejected and reported, never silently dropped:
//! [`build_tree`] returns the tree together with the rejection list.
//!
//! # Example
//!
//! ```
//! use project_tree::prelude::*;
//!
//! let records = vec![
//!     PathRecord::new("src/main.py", 120),
//!     PathRecord::new("README.md", 40),
//! ];
//! let materialized = build_tree(&records, "my-project");
//! assert!(materialized.rejected.is_empty());
//!
//! for id in materialized.tree.walk(TraversalOrder::PreOrder) {
//!     let depth = materialized.tree.depth(id);
//!     println!("{:indent$}{}", "", materialized.tree.name(id).unwrap(), indent = depth * 2);
//! }
//! ```

mod materialize;
mod node;
mod record;
mod traits;

#[cfg(feature = "serde")]
mod view;

pub use materialize::{build_tree, Materialized, ProjectTree};
pub use node::{Node, NodeId, NodeKind};
pub use record::{PathRecord, RejectReason, RejectedRecord};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

#[cfg(feature = "serde")]
pub use view::ViewNode;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{
        build_tree, Materialized, Node, NodeId, NodeKind, PathRecord, ProjectTree, RejectReason,
        RejectedRecord, TraversalOrder, Tree, TreeTraversal,
    };
}
