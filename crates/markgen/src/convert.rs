//! Span to HTML node conversion

use markgen_core::{HtmlNode, LeafNode};

use crate::span::{SpanKind, TextSpan};
use crate::{InlineError, Result};

/// Convert a finished span into a leaf node.
///
/// | kind   | tag      | value  | attributes       |
/// |--------|----------|--------|------------------|
/// | Plain  | none     | text   |                  |
/// | Bold   | `strong` | text   |                  |
/// | Italic | `em`     | text   |                  |
/// | Code   | `code`   | text   |                  |
/// | Link   | `a`      | text   | `href`           |
/// | Image  | `img`    | `""`   | `src`, `alt`     |
///
/// Fails with [`InlineError::MissingUrl`] for a link or image span without a url.
pub fn text_span_to_html_node(span: &TextSpan) -> Result<HtmlNode> {
    let text = span.text();

    let leaf = match span.kind() {
        SpanKind::Plain => LeafNode::text(text),
        SpanKind::Bold => LeafNode::new("strong", text),
        SpanKind::Italic => LeafNode::new("em", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => LeafNode::new("a", text).with_attribute("href", required_url(span)?),
        SpanKind::Image => LeafNode::new("img", "")
            .with_attribute("src", required_url(span)?)
            .with_attribute("alt", text),
    };

    Ok(leaf.into())
}

fn required_url(span: &TextSpan) -> Result<&str> {
    span.url()
        .ok_or(InlineError::MissingUrl { kind: span.kind() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(span: TextSpan) -> String {
        text_span_to_html_node(&span).unwrap().render().unwrap()
    }

    #[test]
    fn test_plain() {
        let node = text_span_to_html_node(&TextSpan::plain("This is a text node")).unwrap();
        assert_eq!(node, HtmlNode::Leaf(LeafNode::text("This is a text node")));
        assert_eq!(node.render().unwrap(), "This is a text node");
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            render(TextSpan::new("bold", SpanKind::Bold)),
            "<strong>bold</strong>"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(render(TextSpan::new("it", SpanKind::Italic)), "<em>it</em>");
    }

    #[test]
    fn test_code() {
        assert_eq!(
            render(TextSpan::new("let x = 1;", SpanKind::Code)),
            "<code>let x = 1;</code>"
        );
    }

    #[test]
    fn test_link() {
        let node = text_span_to_html_node(&TextSpan::link("click", "https://a.com")).unwrap();
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attributes_to_string(), " href=\"https://a.com\"");
        assert_eq!(node.render().unwrap(), "<a href=\"https://a.com\">click</a>");
    }

    #[test]
    fn test_image() {
        assert_eq!(render(TextSpan::image("x", "u")), "<img src=\"u\" alt=\"x\">");
    }

    #[test]
    fn test_image_leaf_shape() {
        let node = text_span_to_html_node(&TextSpan::image("x", "u")).unwrap();
        let HtmlNode::Leaf(leaf) = node else {
            panic!("expected leaf node");
        };
        assert_eq!(leaf.value.as_deref(), Some(""));
        let keys: Vec<&str> = leaf
            .attributes
            .iter()
            .flat_map(|a| a.keys())
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["src", "alt"]);
    }

    #[test]
    fn test_link_without_url() {
        let span = TextSpan::new("dangling", SpanKind::Link);
        assert_eq!(
            text_span_to_html_node(&span),
            Err(InlineError::MissingUrl {
                kind: SpanKind::Link
            })
        );
    }

    #[test]
    fn test_image_without_url() {
        let span = TextSpan::new("alt", SpanKind::Image);
        let err = text_span_to_html_node(&span).unwrap_err();
        assert_eq!(err.to_string(), "image span has no url");
    }
}
