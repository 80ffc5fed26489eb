//! InlineConverter - the main entry point for inline markdown to HTML.

use markgen_core::{HtmlNode, ParentNode};

use crate::convert::text_span_to_html_node;
use crate::delimiter::split_spans_delimiter;
use crate::options::InlineOptions;
use crate::segment::{split_spans_image, split_spans_link};
use crate::span::{SpanKind, TextSpan};
use crate::Result;

/// Tokenize a block of inline markdown into spans.
///
/// Runs the code, strong and emphasis delimiter passes, then the image and
/// link passes, each over the output of the previous one. Empty text yields
/// no spans.
pub fn text_to_spans(text: &str, options: &InlineOptions) -> Result<Vec<TextSpan>> {
    let delimiters = [
        (options.code_delimiter.as_str(), SpanKind::Code),
        (options.strong_delimiter.as_str(), SpanKind::Bold),
        (options.em_delimiter.as_str(), SpanKind::Italic),
    ];

    let mut spans = if text.is_empty() {
        Vec::new()
    } else {
        vec![TextSpan::plain(text)]
    };

    for (delimiter, kind) in delimiters {
        let count = spans.len();
        spans = split_spans_delimiter(spans, delimiter, kind).inspect_err(|err| {
            log::debug!("{kind} pass failed: {err}");
        })?;
        log::trace!("{kind} pass on {delimiter:?}: {count} -> {} spans", spans.len());
    }

    if options.images {
        let count = spans.len();
        spans = split_spans_image(spans);
        log::trace!("image pass: {count} -> {} spans", spans.len());
    }

    if options.links {
        let count = spans.len();
        spans = split_spans_link(spans);
        log::trace!("link pass: {count} -> {} spans", spans.len());
    }

    log::debug!("tokenized {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

/// Tokenize a block of inline markdown and convert each span to a leaf node
pub fn text_to_children(text: &str, options: &InlineOptions) -> Result<Vec<HtmlNode>> {
    text_to_spans(text, options)?
        .iter()
        .map(text_span_to_html_node)
        .collect()
}

/// The main service for converting inline markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct InlineConverter {
    options: InlineOptions,
}

impl InlineConverter {
    /// Create an InlineConverter with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an InlineConverter with custom options
    pub fn with_options(options: InlineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InlineOptions {
        &self.options
    }

    /// Tokenize `text` into spans
    pub fn spans(&self, text: &str) -> Result<Vec<TextSpan>> {
        text_to_spans(text, &self.options)
    }

    /// Tokenize `text` into leaf nodes
    pub fn children(&self, text: &str) -> Result<Vec<HtmlNode>> {
        text_to_children(text, &self.options)
    }

    /// Convert `text` to HTML wrapped in a `tag` element.
    ///
    /// Text that produces no spans (e.g. `""`) fails with
    /// [`HtmlError::MissingChildren`](markgen_core::HtmlError::MissingChildren).
    pub fn convert(&self, text: &str, tag: &str) -> Result<String> {
        let node = HtmlNode::from(ParentNode::new(tag, self.children(text)?));
        Ok(node.render()?)
    }
}
