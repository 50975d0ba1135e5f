//! Block parser implementation.

use std::borrow::Cow;

use memchr::memmem;
use tracing::trace;

use crate::Options;

use super::event::Block;
use super::rules::classify;

/// Segment delimiter.
const DELIMITER: &[u8] = b"\n\n";

/// Block parser state.
pub struct BlockParser<'a> {
    /// Input with CRLF normalized to LF.
    input: Cow<'a, str>,
    options: Options,
}

impl<'a> BlockParser<'a> {
    /// Create a parser with default options.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a parser with explicit options.
    pub fn new_with_options(input: &'a str, options: Options) -> Self {
        let input = if input.contains("\r\n") {
            Cow::Owned(input.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(input)
        };
        Self { input, options }
    }

    /// Parse all segments and append one block per segment.
    ///
    /// Trailing blank segments are skipped; blank segments between content
    /// become empty paragraphs. Nothing is appended for blank input.
    pub fn parse(&mut self, blocks: &mut Vec<Block>) {
        let segments = split_segments(&self.input);
        blocks.reserve(segments.len());
        for (index, segment) in segments.into_iter().enumerate() {
            let block = classify(segment, &self.options);
            trace!(index, kind = block.kind(), len = segment.len(), "classified segment");
            blocks.push(block);
        }
    }
}

/// Split on `"\n\n"` and trim line breaks around each segment.
///
/// Trailing segments that are blank after trimming are dropped.
pub fn split_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::with_capacity(input.len() / 128 + 1);
    let mut start = 0;
    for pos in memmem::find_iter(input.as_bytes(), DELIMITER) {
        segments.push(trim_line_breaks(&input[start..pos]));
        start = pos + DELIMITER.len();
    }
    segments.push(trim_line_breaks(&input[start..]));

    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

#[inline]
fn trim_line_breaks(segment: &str) -> &str {
    segment.trim_matches(|c| c == '\n' || c == '\r')
}
