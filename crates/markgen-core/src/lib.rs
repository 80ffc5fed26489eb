//! markgen-core - HTML node tree and rendering
//!
//! This crate provides the renderable HTML tree used by `markgen`. A tree is
//! built bottom-up from [`LeafNode`]s (a value, no children) and
//! [`ParentNode`]s (children, no value) and rendered top-down into an HTML
//! fragment string.
//!
//! Rendering performs no escaping. Values and attribute values are written
//! exactly as given; callers are responsible for escaping user content.
//!
//! # Example
//!
//! ```rust
//! use markgen_core::{HtmlNode, LeafNode, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::text("Hello ").into(),
//!         LeafNode::new("b", "World").into(),
//!     ],
//! );
//!
//! let html = HtmlNode::from(tree).render().unwrap();
//! assert_eq!(html, "<p>Hello <b>World</b></p>");
//! ```
//!
//! # Limits
//!
//! Rendering recurses once per nesting level. No depth limit is enforced, so
//! pathologically deep trees can exhaust the stack.

mod node;
mod render;

pub use node::{attributes_to_string, Attributes, HtmlNode, LeafNode, ParentNode};

/// Error type for rendering HTML nodes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node has no value")]
    MissingValue,

    #[error("parent node has no tag")]
    MissingTag,

    #[error("parent node has no children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, HtmlError>;
