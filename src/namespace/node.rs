use derive_more::Display;
use hashlink::LinkedHashMap;

pub const ROOT_NAME: &str = "/";

/// The kind of a namespace node, rendered the way tree listings print it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NodeKind {
    #[display("Dir")]
    Directory,
    #[display("File")]
    File,
}

/// A directory or file in the namespace.
///
/// Children are owned by their parent and kept in insertion order. Files
/// never acquire children; directories ignore their payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    payload: String,
    children: LinkedHashMap<String, Node>,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            name: name.into(),
            kind,
            payload: String::new(),
            children: LinkedHashMap::new(),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Directory)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::File)
    }

    pub fn root() -> Self {
        Self::directory(ROOT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Iterates over direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Number of nodes below this one, not counting itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub(crate) fn set_payload(&mut self, payload: String) {
        self.payload = payload;
    }

    /// Attaches `child` under its own name, appended after existing children.
    /// An existing child with the same name is dropped and returned.
    pub(crate) fn attach(&mut self, child: Node) -> Option<Node> {
        let replaced = self.children.remove(&child.name);
        self.children.insert(child.name.clone(), child);
        replaced
    }

    pub(crate) fn detach(&mut self, name: &str) -> Option<Node> {
        self.children.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_a_directory_named_slash() {
        let root = Node::root();
        assert_eq!(root.name(), "/");
        assert!(root.is_directory());
        assert_eq!(root.children().count(), 0);
    }

    #[test]
    fn kind_renders_as_listing_label() {
        assert_eq!(NodeKind::Directory.to_string(), "Dir");
        assert_eq!(NodeKind::File.to_string(), "File");
    }

    #[test]
    fn attach_keeps_insertion_order() {
        let mut dir = Node::directory("dir");
        dir.attach(Node::file("b"));
        dir.attach(Node::file("a"));
        dir.attach(Node::directory("c"));

        let names: Vec<_> = dir.children().map(Node::name).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn attach_over_existing_name_returns_replaced_node() {
        let mut dir = Node::directory("dir");
        dir.attach(Node::file("x"));
        dir.attach(Node::file("y"));

        let replaced = dir.attach(Node::directory("x"));

        assert_eq!(replaced.map(|node| node.kind()), Some(NodeKind::File));
        let names: Vec<_> = dir.children().map(Node::name).collect();
        assert_eq!(names, vec!["y", "x"]);
        assert!(dir.child("x").unwrap().is_directory());
    }

    #[test]
    fn descendant_count_includes_whole_subtree() {
        let mut inner = Node::directory("inner");
        inner.attach(Node::file("a"));
        inner.attach(Node::file("b"));
        let mut outer = Node::directory("outer");
        outer.attach(inner);
        outer.attach(Node::file("c"));

        assert_eq!(outer.descendant_count(), 4);
    }
}
