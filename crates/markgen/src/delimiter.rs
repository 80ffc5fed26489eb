//! Delimiter splitting
//!
//! Turns delimited regions of plain spans (e.g. `` `code` `` or `**bold**`)
//! into spans of a target kind. Delimiters are matched literally, left to
//! right, without nesting or escaping.

use crate::span::{SpanKind, TextSpan};
use crate::{InlineError, Result};

/// Split every plain span on `delimiter`.
///
/// Text between a pair of delimiters becomes a span of `kind`, text outside
/// stays plain. Empty segments are dropped. Spans that are not plain, and
/// plain spans without the delimiter, are passed through as-is.
///
/// Fails with [`InlineError::UnmatchedDelimiter`] if any plain span holds an
/// odd number of delimiters; no spans are returned in that case.
pub fn split_spans_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let count = span.text().matches(delimiter).count();
        if count == 0 {
            result.push(span);
            continue;
        }
        if count % 2 != 0 {
            return Err(InlineError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text().to_string(),
            });
        }

        for (i, segment) in span.text().split(delimiter).enumerate() {
            if segment.is_empty() {
                continue;
            }
            let segment_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            result.push(TextSpan::new(segment, segment_kind));
        }
    }

    Ok(result)
}
