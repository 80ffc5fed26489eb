//! # markgen
//!
//! Tokenize inline markdown into typed text spans and render them as HTML.
//!
//! The inline pipeline runs in fixed passes over a list of [`TextSpan`]s:
//!
//! ```text
//! raw text ──▶ delimiter passes ──▶ image pass ──▶ link pass ──▶ spans
//!              (code, bold, italic)
//!
//! spans ──▶ leaf nodes ──▶ parent node ──▶ HTML fragment
//! ```
//!
//! Only `Plain` spans are ever rescanned, so each pass leaves the output of
//! earlier passes untouched. Delimiters do not nest and cannot be escaped.
//! Malformed input (an unmatched delimiter) fails the whole conversion.
//!
//! Block-level structure (paragraphs, headings, lists) is out of scope: the
//! caller hands in one block of inline text at a time.
//!
//! ## Example
//!
//! ```rust
//! use markgen::InlineConverter;
//!
//! let converter = InlineConverter::new();
//! let html = converter
//!     .convert("This is **bold** and a [link](https://example.com)", "p")
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<p>This is <strong>bold</strong> and a <a href=\"https://example.com\">link</a></p>"
//! );
//! ```
//!
//! ## Example (individual passes)
//!
//! ```rust
//! use markgen::{split_spans_delimiter, split_spans_link, SpanKind, TextSpan};
//!
//! let spans = vec![TextSpan::plain("Use `cargo` or see [docs](d.html)")];
//! let spans = split_spans_delimiter(spans, "`", SpanKind::Code).unwrap();
//! let spans = split_spans_link(spans);
//!
//! assert_eq!(spans.len(), 4);
//! assert_eq!(spans[3], TextSpan::link("docs", "d.html"));
//! ```

mod convert;
mod delimiter;
mod options;
mod pattern;
mod segment;
mod service;
mod span;

pub use convert::text_span_to_html_node;
pub use delimiter::split_spans_delimiter;
pub use options::InlineOptions;
pub use pattern::{extract_markdown_images, extract_markdown_links, MarkdownPattern, PatternMatch};
pub use segment::{split_spans_image, split_spans_link, split_spans_pattern};
pub use service::{text_to_children, text_to_spans, InlineConverter};
pub use span::{SpanKind, TextSpan};

pub use markgen_core::{attributes_to_string, Attributes, HtmlError, HtmlNode, LeafNode, ParentNode};

/// Error type for inline conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    #[error("Invalid markdown, unmatched delimiter {delimiter:?} in {text:?}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    #[error("{kind} span has no url")]
    MissingUrl { kind: SpanKind },

    #[error(transparent)]
    Html(#[from] HtmlError),
}

pub type Result<T> = std::result::Result<T, InlineError>;
