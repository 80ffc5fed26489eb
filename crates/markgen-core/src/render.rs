//! HTML rendering
//!
//! Renders an [`HtmlNode`] tree into an HTML fragment string. No escaping is
//! performed and no trailing newline is written.

use crate::node::{attributes_to_string, HtmlNode, LeafNode, ParentNode};
use crate::{HtmlError, Result};

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Check if a tag is a void element
pub(crate) fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_lowercase().as_str())
}

impl HtmlNode {
    /// Render this node and its descendants to HTML
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        self.render_into(&mut output)?;
        Ok(output)
    }

    /// Render into an existing buffer.
    ///
    /// On error the buffer may hold the output written before the failing node.
    pub fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl LeafNode {
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        self.render_into(&mut output)?;
        Ok(output)
    }

    pub fn render_into(&self, out: &mut String) -> Result<()> {
        let value = self.value.as_deref().ok_or(HtmlError::MissingValue)?;

        let Some(tag) = self.tag.as_deref() else {
            out.push_str(value);
            return Ok(());
        };

        open_tag(tag, self.attributes_to_string(), out);
        // Void elements have no content and no closing tag
        if is_void(tag) {
            return Ok(());
        }
        out.push_str(value);
        close_tag(tag, out);
        Ok(())
    }
}

impl ParentNode {
    pub fn render(&self) -> Result<String> {
        let mut output = String::new();
        self.render_into(&mut output)?;
        Ok(output)
    }

    pub fn render_into(&self, out: &mut String) -> Result<()> {
        let tag = self.tag.as_deref().ok_or(HtmlError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or(HtmlError::MissingChildren)?;

        open_tag(tag, attributes_to_string(self.attributes.as_ref()), out);
        for child in children {
            child.render_into(out)?;
        }
        close_tag(tag, out);
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: String, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
