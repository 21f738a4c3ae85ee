use std::fmt;

use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{MAX_INDENT_WIDTH, NamespaceConfig, RestorePolicy};

use super::path::{split_leaf, split_path};
use super::{Node, NodeKind, UndoHistory};

/// An in-memory namespace of directories and files rooted at `/`.
///
/// Every path is resolved from the root, with or without a leading slash.
/// Deleted nodes are kept in an [`UndoHistory`] and can be restored, always
/// as direct children of the root.
#[derive(Debug, Clone)]
pub struct NamespaceTree {
    root: Node,
    history: UndoHistory,
    restore_policy: RestorePolicy,
    indent_width: usize,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::with_config(&NamespaceConfig::default())
    }

    pub fn with_config(config: &NamespaceConfig) -> Self {
        NamespaceTree {
            root: Node::root(),
            history: UndoHistory::new(config.undo_depth),
            restore_policy: config.restore_policy,
            indent_width: config.indent_width.min(MAX_INDENT_WIDTH),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn undo_depth(&self) -> usize {
        self.history.depth().get()
    }

    /// Number of deleted nodes currently eligible for undo.
    pub fn pending_undo(&self) -> usize {
        self.history.len()
    }

    /// Resolves `path` to the node it names. The empty path names the root.
    pub fn navigate(&self, path: &str) -> Result<&Node, NavigationError> {
        let mut current = &self.root;
        for segment in split_path(path) {
            current = current
                .child(segment)
                .context(NotFoundSnafu { segment })?;
        }
        Ok(current)
    }

    fn navigate_mut(&mut self, path: &str) -> Result<&mut Node, NavigationError> {
        let mut current = &mut self.root;
        for segment in split_path(path) {
            current = current
                .child_mut(segment)
                .context(NotFoundSnafu { segment })?;
        }
        Ok(current)
    }

    /// Walks `segments` from `node`, requiring every step to be a directory.
    /// On failure returns the first segment that did not resolve.
    fn resolve_directory_mut<'a>(
        mut node: &'a mut Node,
        segments: &[&str],
    ) -> Result<&'a mut Node, String> {
        for segment in segments {
            debug!("Resolving path component '{}'", segment);
            node = node
                .child_mut(segment)
                .filter(|child| child.is_directory())
                .ok_or_else(|| segment.to_string())?;
        }
        Ok(node)
    }

    pub fn create(&mut self, path: &str, kind: NodeKind) -> Result<(), CreateError> {
        let (parents, name) = split_leaf(path).context(create_error::EmptyPathSnafu { path })?;
        let parent = Self::resolve_directory_mut(&mut self.root, &parents)
            .map_err(|segment| CreateError::InvalidPathComponent { segment })?;

        ensure!(
            !parent.has_child(name),
            create_error::AlreadyExistsSnafu { name, kind }
        );

        parent.attach(Node::new(name, kind));
        info!("{} created: {}", kind, path);
        Ok(())
    }

    pub fn create_dir(&mut self, path: &str) -> Result<(), CreateError> {
        self.create(path, NodeKind::Directory)
    }

    pub fn create_file(&mut self, path: &str) -> Result<(), CreateError> {
        self.create(path, NodeKind::File)
    }

    /// Detaches the node at `path` together with its subtree and makes it
    /// the next candidate for [`NamespaceTree::undo`].
    pub fn delete(&mut self, path: &str) -> Result<(), DeleteError> {
        let (parents, name) = split_leaf(path).context(delete_error::RootNotDeletableSnafu)?;
        let parent = Self::resolve_directory_mut(&mut self.root, &parents)
            .map_err(|segment| DeleteError::InvalidPathComponent { segment })?;

        let node = parent
            .detach(name)
            .context(delete_error::NotFoundSnafu { name })?;
        info!("Deleted: {}", path);

        if let Some(evicted) = self.history.push(node) {
            warn!(
                "Undo history full, discarding '{}' permanently",
                evicted.name()
            );
        }
        Ok(())
    }

    /// Restores the most recently deleted node under the root and returns its name.
    pub fn undo(&mut self) -> Result<String, UndoError> {
        let pending = self.history.peek().context(NothingToUndoSnafu)?;
        let name = pending.name().to_string();

        if self.root.has_child(&name) {
            match self.restore_policy {
                RestorePolicy::Reject => return RestoreConflictSnafu { name }.fail(),
                RestorePolicy::Overwrite => {
                    warn!("Restoring '{}' overwrites an existing root entry", name)
                }
            }
        }

        let node = self.history.pop().context(NothingToUndoSnafu)?;
        self.root.attach(node);
        info!("Undo successful, restored: {}", name);
        Ok(name)
    }

    /// Replaces the payload of the file at `path`.
    pub fn write(&mut self, path: &str, payload: impl Into<String>) -> Result<(), PayloadError> {
        let node = self.navigate_mut(path)?;
        ensure!(node.is_file(), NotAFileSnafu { name: node.name() });
        node.set_payload(payload.into());
        debug!("Wrote payload to {}", path);
        Ok(())
    }

    pub fn read(&self, path: &str) -> Result<&str, PayloadError> {
        let node = self.navigate(path)?;
        ensure!(node.is_file(), NotAFileSnafu { name: node.name() });
        Ok(node.payload())
    }

    /// Renders the whole tree, one `<indent><Dir|File>: <name>` line per node,
    /// depth first with children in insertion order.
    pub fn display(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, node: &Node, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(depth.saturating_mul(self.indent_width));
        writeln!(f, "{}{}: {}", indent, node.kind(), node.name())?;
        for child in node.children() {
            self.fmt_node(child, depth + 1, f)?;
        }
        Ok(())
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NamespaceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(&self.root, 0, f)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum NavigationError {
    #[snafu(display("Directory or file not found: {}", segment))]
    NotFound { segment: String },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(module)]
pub enum CreateError {
    #[snafu(display("Path '{}' does not name anything to create", path))]
    EmptyPath { path: String },
    #[snafu(display("Invalid path component: {}", segment))]
    InvalidPathComponent { segment: String },
    #[snafu(display("{} already exists: {}", kind, name))]
    AlreadyExists { name: String, kind: NodeKind },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(module)]
pub enum DeleteError {
    #[snafu(display("The root directory cannot be deleted"))]
    RootNotDeletable,
    #[snafu(display("Invalid path component: {}", segment))]
    InvalidPathComponent { segment: String },
    #[snafu(display("File or directory not found: {}", name))]
    NotFound { name: String },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum UndoError {
    #[snafu(display("Nothing to undo!"))]
    NothingToUndo,
    #[snafu(display("Cannot restore '{}': the root already has an entry with that name", name))]
    RestoreConflict { name: String },
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum PayloadError {
    #[snafu(context(false), display("{}", source))]
    Navigation { source: NavigationError },
    #[snafu(display("'{}' is a directory, not a file", name))]
    NotAFile { name: String },
}
