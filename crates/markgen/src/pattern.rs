//! Markdown image and link extraction
//!
//! Images have the form `![alt](url)` and links the form `[text](url)`. The
//! label may not contain `]` and the url may not contain `)`; either may be
//! empty. Matches are reported left to right and never overlap.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::span::SpanKind;

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]*)\)").expect("Invalid image regex"));

static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("Invalid link regex"));

/// Inline syntax recognized by the segmenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownPattern {
    /// `![alt](url)`
    Image,
    /// `[text](url)`, not directly preceded by `!`
    Link,
}

/// One occurrence of a [`MarkdownPattern`] in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    /// Alt text for images, link text for links
    pub label: &'a str,
    pub url: &'a str,
    /// Byte range of the whole matched syntax
    pub range: Range<usize>,
}

impl MarkdownPattern {
    /// Span kind produced for matches of this pattern
    pub fn kind(self) -> SpanKind {
        match self {
            MarkdownPattern::Image => SpanKind::Image,
            MarkdownPattern::Link => SpanKind::Link,
        }
    }

    /// Find all non-overlapping matches in `text`, in order of appearance
    pub fn find_all(self, text: &str) -> Vec<PatternMatch<'_>> {
        let (re, skip_after_bang) = match self {
            MarkdownPattern::Image => (&*IMAGE_RE, false),
            MarkdownPattern::Link => (&*LINK_RE, true),
        };

        let mut matches = Vec::new();
        let mut pos = 0;

        while let Some(caps) = re.captures_at(text, pos) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };

            // `[` right after `!` belongs to an image; retry from the next byte
            if skip_after_bang && text[..whole.start()].ends_with('!') {
                pos = whole.start() + 1;
                continue;
            }

            matches.push(PatternMatch {
                label: label.as_str(),
                url: url.as_str(),
                range: whole.range(),
            });
            pos = whole.end();
        }

        matches
    }

    /// Extract `(label, url)` pairs in order of appearance
    pub fn extract(self, text: &str) -> Vec<(String, String)> {
        self.find_all(text)
            .into_iter()
            .map(|m| (m.label.to_string(), m.url.to_string()))
            .collect()
    }
}

/// Extract `(alt, url)` pairs of all markdown images in `text`
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    MarkdownPattern::Image.extract(text)
}

/// Extract `(text, url)` pairs of all markdown links in `text`.
///
/// Image syntax is never reported as a link.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    MarkdownPattern::Link.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[rstest]
    #[case("![alt](u.png)", &[("alt", "u.png")])]
    #[case(
        "Here is an image ![alt text](http://example.com/image.png)",
        &[("alt text", "http://example.com/image.png")]
    )]
    #[case("No image here", &[])]
    #[case("Empty alt ![](https://example.com/image.png)", &[("", "https://example.com/image.png")])]
    #[case("Empty url ![alt]()", &[("alt", "")])]
    #[case(
        "Multiple images ![first](http://example.com/first.png) and ![second](http://example.com/second.png)",
        &[("first", "http://example.com/first.png"), ("second", "http://example.com/second.png")]
    )]
    #[case(
        "Special characters in alt ![alt with !@#$%^&*()](http://example.com/special.png)",
        &[("alt with !@#$%^&*()", "http://example.com/special.png")]
    )]
    #[case("Local image ![local image](./local-image.png)", &[("local image", "./local-image.png")])]
    #[case(
        "Multiline images ![first](http://example.com/first.png)\n![second](http://example.com/second.png)",
        &[("first", "http://example.com/first.png"), ("second", "http://example.com/second.png")]
    )]
    #[case("A link [not image](x.com)", &[])]
    fn test_extract_images(#[case] text: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(extract_markdown_images(text), pairs(expected));
    }

    #[rstest]
    #[case("Here is a link [example](http://example.com)", &[("example", "http://example.com")])]
    #[case("No link here", &[])]
    #[case("Empty link text []()", &[("", "")])]
    #[case(
        "Text with spaces in link [link with spaces](http://example.com)",
        &[("link with spaces", "http://example.com")]
    )]
    #[case(
        "Multiple links [first](http://example.com/first) and [second](http://example.com/second)",
        &[("first", "http://example.com/first"), ("second", "http://example.com/second")]
    )]
    #[case(
        "Special characters in link [link with !@#$%^&*()](http://example.com/special)",
        &[("link with !@#$%^&*()", "http://example.com/special")]
    )]
    #[case("Local link [local link](./local-link.html)", &[("local link", "./local-link.html")])]
    #[case("Line one [a](1.com)\nline two [b](2.com)", &[("a", "1.com"), ("b", "2.com")])]
    #[case("Image: ![img](img.com) not a link", &[])]
    #[case("![img](i.png) and [link](l.com)", &[("link", "l.com")])]
    fn test_extract_links(#[case] text: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(extract_markdown_links(text), pairs(expected));
    }

    #[test]
    fn test_link_retried_after_rejected_image_bracket() {
        // The first candidate starts right after `!`; the scan resumes inside it
        let text = "![x [y](z)";
        assert_eq!(extract_markdown_images(text), pairs(&[("x [y", "z")]));
        assert_eq!(extract_markdown_links(text), pairs(&[("y", "z")]));
    }

    #[test]
    fn test_url_stops_at_first_paren() {
        assert_eq!(
            extract_markdown_links("[wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
            pairs(&[("wiki", "https://en.wikipedia.org/wiki/Rust_(language")])
        );
    }

    #[test]
    fn test_find_all_ranges() {
        let text = "a ![b](c) d";
        let found = MarkdownPattern::Image.find_all(text);
        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].range.clone()], "![b](c)");
        assert_eq!(found[0].label, "b");
        assert_eq!(found[0].url, "c");
    }

    #[test]
    fn test_pattern_kind() {
        assert_eq!(MarkdownPattern::Image.kind(), SpanKind::Image);
        assert_eq!(MarkdownPattern::Link.kind(), SpanKind::Link);
    }
}
