//! Image and link segmentation
//!
//! Splits plain spans around every image or link occurrence, producing plain
//! spans interleaved with `Image`/`Link` spans.

use crate::pattern::MarkdownPattern;
use crate::span::TextSpan;

/// Split plain spans around every occurrence of `pattern`.
///
/// The whole matched syntax is removed from the text and replaced by one span
/// carrying the label and url. Empty plain text between matches is dropped.
/// Spans that are not plain, and plain spans without a match, are passed
/// through as-is.
pub fn split_spans_pattern(spans: Vec<TextSpan>, pattern: MarkdownPattern) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let matches = pattern.find_all(span.text());
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let text = span.text();
        let mut last = 0;
        for m in &matches {
            push_plain(&mut result, &text[last..m.range.start]);
            result.push(TextSpan::with_url(m.label, pattern.kind(), m.url));
            last = m.range.end;
        }
        push_plain(&mut result, &text[last..]);
    }

    result
}

/// Split plain spans around markdown images
pub fn split_spans_image(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, MarkdownPattern::Image)
}

/// Split plain spans around markdown links
pub fn split_spans_link(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_spans_pattern(spans, MarkdownPattern::Link)
}

fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::plain(text));
    }
}
