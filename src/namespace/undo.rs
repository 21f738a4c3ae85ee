use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::Node;

/// Bounded stack of detached nodes awaiting restore.
///
/// With a depth of one this is a single slot: every push evicts whatever
/// was held before.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    depth: NonZeroUsize,
    nodes: VecDeque<Node>,
}

impl UndoHistory {
    pub fn new(depth: NonZeroUsize) -> Self {
        UndoHistory {
            depth,
            nodes: VecDeque::with_capacity(depth.get()),
        }
    }

    pub fn depth(&self) -> NonZeroUsize {
        self.depth
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pushes a node, returning the oldest held node if the depth was exceeded.
    pub fn push(&mut self, node: Node) -> Option<Node> {
        self.nodes.push_back(node);
        if self.nodes.len() > self.depth.get() {
            self.nodes.pop_front()
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Node> {
        self.nodes.back()
    }

    pub fn pop(&mut self) -> Option<Node> {
        self.nodes.pop_back()
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(NonZeroUsize::MIN)
    }
}
