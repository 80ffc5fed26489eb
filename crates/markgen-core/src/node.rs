//! HTML node tree
//!
//! Two node shapes exist: a [`LeafNode`] carries a value and never has
//! children, a [`ParentNode`] carries children and never has a value.
//! [`HtmlNode`] is the closed union of both and is what gets rendered.
//!
//! Fields are optional the way a loosely-built tree can leave them out;
//! rendering is where missing required parts are reported.

use indexmap::IndexMap;

/// Element attributes, serialized in insertion order
pub type Attributes = IndexMap<String, String>;

/// A renderable HTML node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Node with a value and no children
    Leaf(LeafNode),

    /// Node with children and no value
    Parent(ParentNode),
}

/// An HTML node holding a raw value.
///
/// A leaf without a tag renders as its bare value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Tag name, e.g. `"b"`. `None` renders the value without markup.
    pub tag: Option<String>,

    /// Raw value. Required at render time.
    pub value: Option<String>,

    /// Element attributes
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    /// Create a tagged leaf node
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// Create an untagged leaf node that renders as raw text
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    /// Replace the attributes of this node
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Append a single attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn attributes_to_string(&self) -> String {
        attributes_to_string(self.attributes.as_ref())
    }
}

/// An HTML node wrapping an ordered list of child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    /// Tag name. Required at render time.
    pub tag: Option<String>,

    /// Child nodes, rendered in order. Must be non-empty at render time.
    pub children: Option<Vec<HtmlNode>>,

    /// Element attributes
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    /// Create a parent node
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    /// Replace the attributes of this node
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Append a single attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<HtmlNode>) {
        self.children.get_or_insert_with(Vec::new).push(child.into());
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        self.children.iter().flat_map(|c| c.iter())
    }

    pub fn attributes_to_string(&self) -> String {
        attributes_to_string(self.attributes.as_ref())
    }
}

impl HtmlNode {
    /// Tag name of the node, if any
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// Attributes of the node, if any
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes.as_ref(),
            HtmlNode::Parent(parent) => parent.attributes.as_ref(),
        }
    }

    pub fn attributes_to_string(&self) -> String {
        attributes_to_string(self.attributes())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HtmlNode::Leaf(_))
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Serialize attributes for an opening tag.
///
/// Returns an empty string for absent or empty attributes, otherwise a
/// leading space followed by space-separated `name="value"` pairs in
/// insertion order. Values are not escaped.
pub fn attributes_to_string(attributes: Option<&Attributes>) -> String {
    let Some(attributes) = attributes.filter(|a| !a.is_empty()) else {
        return String::new();
    };

    let mut result = String::new();
    for (name, value) in attributes {
        result.push(' ');
        result.push_str(name);
        result.push_str("=\"");
        result.push_str(value);
        result.push('"');
    }
    result
}
