//! Math span scanner.
//!
//! A single left-to-right pass tokenizes on `$` boundaries:
//! - `$$` opens display math when a matching `$$` follows on the same line
//!   with non-empty content free of `$`.
//! - `$` opens inline math when a matching `$` follows on the same line
//!   with non-empty content.
//! - Anything else is a literal `$`.
//!
//! Display math wins at a `$$` boundary, so inline math never consumes
//! half of a well-formed `$$...$$`. Content is kept verbatim.

use memchr::{memchr, memchr2};
use smallvec::SmallVec;

use super::event::Span;

/// Spans of one paragraph. Most paragraphs hold a handful.
pub type Spans = SmallVec<[Span; 4]>;

/// Split paragraph text into text and math spans.
///
/// Adjacent literal text is merged into one [`Span::Text`]. Empty input
/// yields no spans.
///
/// # Example
/// ```
/// use fixture_handbook::inline::{scan_math, Span};
///
/// let spans = scan_math("Value is $x+1$ always.");
/// assert_eq!(spans[1], Span::InlineMath("x+1".into()));
/// ```
pub fn scan_math(text: &str) -> Spans {
    let bytes = text.as_bytes();
    let mut spans = Spans::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'$', &bytes[pos..]) {
        let open = pos + offset;

        let matched = if bytes.get(open + 1) == Some(&b'$') {
            display_close(bytes, open + 2)
                .map(|close| (close, close + 2, true))
                .or_else(|| inline_close(bytes, open + 1).map(|close| (close, close + 1, false)))
        } else {
            inline_close(bytes, open + 1).map(|close| (close, close + 1, false))
        };

        match matched {
            Some((close, end, is_display)) => {
                if open > text_start {
                    spans.push(Span::Text(text[text_start..open].to_owned()));
                }
                let delim = if is_display { 2 } else { 1 };
                let content = text[open + delim..close].to_owned();
                spans.push(if is_display {
                    Span::DisplayMath(content)
                } else {
                    Span::InlineMath(content)
                });
                text_start = end;
                pos = end;
            }
            // Literal `$`; stays part of the pending text run.
            None => pos = open + 1,
        }
    }

    if text_start < text.len() {
        spans.push(Span::Text(text[text_start..].to_owned()));
    }
    spans
}

/// Find the closing `$$` for display content starting at `start`.
fn display_close(bytes: &[u8], start: usize) -> Option<usize> {
    let rest = bytes.get(start..)?;
    let offset = memchr2(b'$', b'\n', rest)?;
    let close = start + offset;
    if offset > 0 && bytes[close] == b'$' && bytes.get(close + 1) == Some(&b'$') {
        Some(close)
    } else {
        None
    }
}

/// Find the closing `$` for inline content starting at `start`.
///
/// When the opener is the first `$` of an unmatched `$$`, `start` points at
/// the second `$` and the content would be empty, so this declines.
fn inline_close(bytes: &[u8], start: usize) -> Option<usize> {
    let rest = bytes.get(start..)?;
    let offset = memchr2(b'$', b'\n', rest)?;
    let close = start + offset;
    (offset > 0 && bytes[close] == b'$').then_some(close)
}
