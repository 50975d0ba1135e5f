//! HTML output.
//!
//! [`HtmlWriter`] owns a reusable buffer sized from the input length;
//! [`render_document`] walks a [`Document`] and writes one element per
//! block. Class names are stable hooks for the surrounding stylesheet.

use crate::block::{Block, Document};
use crate::escape;
use crate::inline::Span;

/// Class on inline math spans.
pub const MATH_INLINE_CLASS: &str = "math-inline";
/// Class on display math blocks.
pub const MATH_DISPLAY_CLASS: &str = "math-display";
/// Class on image caption placeholders.
pub const IMAGE_CAPTION_CLASS: &str = "image-caption";
/// Class on `<ul>` list blocks.
pub const LIST_CLASS: &str = "list";

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use fixture_handbook::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(32);
/// writer.write_str("<p>");
/// writer.write_escaped_text("Tork < 5 Nm");
/// writer.write_str("</p>");
/// assert_eq!(writer.into_string(), "<p>Tork &lt; 5 Nm</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with capacity based on expected input size.
    ///
    /// Markup adds roughly a quarter on top of the text.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write markup without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping.
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write an attribute value with escaping.
    #[inline]
    pub fn write_escaped_attr(&mut self, value: &str) {
        escape::escape_attr_into(&mut self.out, value);
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Write `<tag class="class">`.
    #[inline]
    pub fn open_tag_with_class(&mut self, tag: &str, class: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push_str(" class=\"");
        self.out.push_str(class);
        self.out.push_str("\">");
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

/// Render every block of `doc` into `writer`.
pub fn render_document(doc: &Document, writer: &mut HtmlWriter) {
    for block in doc {
        render_block(block, writer);
    }
}

/// Render a single block, followed by a newline.
pub fn render_block(block: &Block, writer: &mut HtmlWriter) {
    match block {
        Block::Heading {
            level,
            text,
            anchor,
        } => {
            let tag = level.tag();
            writer.write_str("<");
            writer.write_str(tag);
            if !anchor.is_empty() {
                writer.write_str(" id=\"");
                writer.write_escaped_attr(anchor);
                writer.write_str("\"");
            }
            writer.write_str(">");
            writer.write_escaped_text(text);
            writer.close_tag(tag);
        }
        Block::List { items } => {
            writer.open_tag_with_class("ul", LIST_CLASS);
            writer.newline();
            for item in items {
                writer.write_str("<li>");
                writer.write_escaped_text(item);
                writer.write_str("</li>\n");
            }
            writer.write_str("</ul>");
        }
        Block::ImageCaption { caption, label } => {
            writer.write_str("<p class=\"");
            writer.write_str(IMAGE_CAPTION_CLASS);
            writer.write_str("\" data-label=\"");
            writer.write_escaped_attr(label);
            writer.write_str("\">");
            writer.write_escaped_text(caption);
            writer.write_str("</p>");
        }
        Block::Paragraph { spans } => {
            // A <div> cannot live inside <p>.
            let has_display = spans.iter().any(|s| matches!(s, Span::DisplayMath(_)));
            if has_display {
                writer.open_tag_with_class("div", "paragraph");
            } else {
                writer.write_str("<p>");
            }
            for span in spans {
                render_span(span, writer);
            }
            writer.close_tag(if has_display { "div" } else { "p" });
        }
    }
    writer.newline();
}

fn render_span(span: &Span, writer: &mut HtmlWriter) {
    match span {
        Span::Text(text) => writer.write_escaped_text(text),
        Span::InlineMath(math) => {
            writer.open_tag_with_class("span", MATH_INLINE_CLASS);
            writer.write_escaped_text(math);
            writer.close_tag("span");
        }
        Span::DisplayMath(math) => {
            writer.open_tag_with_class("div", MATH_DISPLAY_CLASS);
            writer.write_escaped_text(math);
            writer.close_tag("div");
        }
    }
}
