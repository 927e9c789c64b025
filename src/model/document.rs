//! Read-only XML document tree.

use std::fmt;

use super::path::Path;
use crate::error::{Error, Result};

/// Index of a node inside a [`Document`].
///
/// Ids are assigned in document order, so sorting by id yields document
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

/// An element or text node stored in the document arena.
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    /// The synthetic document node that owns the root element.
    Root,
    Element {
        /// Qualified name as written, e.g. `tp:taxon-name`.
        name: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// A parsed, immutable XML document.
///
/// A `Document` created with [`Document::new`] is *unloaded*: it has no root
/// element and every extractor rejects it with
/// [`Error::DocumentNotReady`]. Loaded documents come from the
/// [`parser`](crate::parser) module.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create a new, unloaded document.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Append an element under `parent`, returning its id.
    pub(crate) fn append_element(
        &mut self,
        parent: NodeId,
        name: String,
        attributes: Vec<(String, String)>,
    ) -> NodeId {
        self.append(parent, NodeKind::Element { name, attributes })
    }

    /// Append a text node under `parent`, merging with a preceding text sibling.
    pub(crate) fn append_text(&mut self, parent: NodeId, text: &str) {
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if let NodeKind::Text(existing) = &mut self.nodes[last.0].kind {
                existing.push_str(text);
                return;
            }
        }
        self.append(parent, NodeKind::Text(text.to_string()));
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// The synthetic document node.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            id: NodeId(0),
        }
    }

    /// The top-level element, if the document is loaded.
    pub fn root_element(&self) -> Option<Node<'_>> {
        self.root().elements().next()
    }

    /// Whether the document holds a parsed tree.
    pub fn is_loaded(&self) -> bool {
        self.root_element().is_some()
    }

    /// Fail with [`Error::DocumentNotReady`] unless the document is loaded.
    pub fn ensure_loaded(&self) -> Result<()> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(Error::DocumentNotReady)
        }
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { doc: self, id })
    }

    /// Total number of nodes, including the document node.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Evaluate a path expression from the document node.
    pub fn select(&self, path: &Path) -> Vec<Node<'_>> {
        self.root().select(path)
    }

    /// Concatenated text of every node matched by `path`.
    pub fn select_text(&self, path: &Path) -> String {
        self.root().select_text(path)
    }

    /// All text in the document.
    pub fn text(&self) -> String {
        self.root().text()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed handle to a node of a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Node<'a> {
    /// The node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The owning document.
    pub fn document(&self) -> &'a Document {
        self.doc
    }

    fn data(&self) -> &'a NodeData {
        self.doc.data(self.id)
    }

    /// Whether this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self.data().kind, NodeKind::Element { .. })
    }

    /// Qualified element name (`prefix:local`), or `None` for non-elements.
    pub fn name(&self) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Element name without its namespace prefix.
    pub fn local_name(&self) -> Option<&'a str> {
        self.name()
            .map(|name| name.rsplit_once(':').map_or(name, |(_, local)| local))
    }

    /// Look up an attribute by its qualified name.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Look up an attribute by local name, ignoring any prefix.
    ///
    /// `attribute_local("href")` matches both `href` and `xlink:href`.
    pub fn attribute_local(&self, local: &str) -> Option<&'a str> {
        match &self.data().kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key.rsplit_once(':').map_or(key.as_str(), |(_, l)| l) == local)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Whether the element carries the attribute.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Parent node, `None` for the document node.
    pub fn parent(&self) -> Option<Node<'a>> {
        self.data().parent.map(|id| Node { doc: self.doc, id })
    }

    /// All direct children, elements and text alike.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&id| Node { doc, id })
    }

    /// Direct element children.
    pub fn elements(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.children().filter(|child| child.is_element())
    }

    /// First direct element child with the given qualified name.
    pub fn child(&self, name: &str) -> Option<Node<'a>> {
        self.elements().find(|child| child.name() == Some(name))
    }

    /// Aggregated text of this node and all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.data().kind {
            NodeKind::Text(text) => out.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Evaluate a path expression relative to this node.
    pub fn select(&self, path: &Path) -> Vec<Node<'a>> {
        path.evaluate(*self)
    }

    /// First node matched by `path`, in document order.
    pub fn select_first(&self, path: &Path) -> Option<Node<'a>> {
        self.select(path).into_iter().next()
    }

    /// Concatenated text of every node matched by `path`.
    ///
    /// An empty node-set yields an empty string.
    pub fn select_text(&self, path: &Path) -> String {
        self.select(path).iter().map(|node| node.text()).collect()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data().kind {
            NodeKind::Root => write!(f, "Node(#document)"),
            NodeKind::Element { name, .. } => write!(f, "Node(<{}> #{})", name, self.id.0),
            NodeKind::Text(text) => write!(f, "Node({:?})", text),
        }
    }
}
