//! Inline content of paragraphs.
//!
//! The only inline markup is math: `$...$` and `$$...$$`. Everything
//! else, including `**bold**` and backslashes, stays literal text.

pub mod event;
mod math;

pub use event::Span;
pub use math::{scan_math, Spans};

/// Build the spans of a paragraph.
///
/// With `math` disabled the whole text is one [`Span::Text`].
pub fn paragraph_spans(text: &str, math: bool) -> Spans {
    if math {
        return scan_math(text);
    }
    let mut spans = Spans::new();
    if !text.is_empty() {
        spans.push(Span::Text(text.to_owned()));
    }
    spans
}
