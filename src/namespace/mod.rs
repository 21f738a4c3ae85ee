//! In-memory namespace of directories and files.
//!
//! A [`NamespaceTree`] owns a root directory node and resolves every path
//! from it. Nodes own their children directly, so the structure is a strict
//! tree. Deleted subtrees are parked in an [`UndoHistory`] and can be
//! reattached under the root.

mod node;
mod path;
mod tree;
mod undo;

pub use node::{Node, NodeKind, ROOT_NAME};
pub use path::{split_leaf, split_path};
pub use tree::{CreateError, DeleteError, NamespaceTree, NavigationError, PayloadError, UndoError};
pub use undo::UndoHistory;
