//! fixture-handbook: renderer for the CNC and robotic-welding fixture
//! design handbook.
//!
//! Handbook content is semi-structured text. This crate turns a content
//! string into an ordered [`Document`] of typed blocks and writes it out
//! as HTML.
//!
//! # Design Principles
//! - Total: every input renders, malformed markup degrades to a paragraph
//! - No regex: byte-level scanning with memchr
//! - Closed block set: an ordered table of predicate/constructor rules
//! - No globals: the section registry is a value passed to callers
//!
//! # Example
//! ```
//! use fixture_handbook::{parse, Block};
//!
//! let doc = parse("## Giriş\n\n* A\n* B\n* C");
//! assert_eq!(doc.len(), 2);
//! assert!(matches!(&doc.blocks()[1], Block::List { items } if items.len() == 3));
//! ```

pub mod anchor;
pub mod block;
pub mod error;
pub mod escape;
pub mod inline;
pub mod registry;
pub mod render;
pub mod toc;

use serde::{Deserialize, Serialize};
use tracing::debug;

// Re-export primary types
pub use anchor::AnchorStyle;
pub use block::{Block, BlockParser, Document, HeadingLevel};
pub use error::RegistryError;
pub use inline::Span;
pub use registry::{Registry, Section};
pub use render::{render_document, HtmlWriter};
pub use toc::{table_of_contents, TocEntry};

/// Parsing/rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// How heading anchors treat non-ASCII letters.
    pub anchor_style: AnchorStyle,
    /// Recognize `$...$` and `$$...$$` in paragraphs.
    pub math: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            anchor_style: AnchorStyle::default(),
            math: true,
        }
    }
}

/// Parse content into a document with default options.
pub fn parse(input: &str) -> Document {
    parse_with_options(input, &Options::default())
}

/// Parse content into a document.
///
/// Never fails and never returns an empty document.
pub fn parse_with_options(input: &str, options: &Options) -> Document {
    let mut parser = BlockParser::new_with_options(input, *options);
    let mut blocks = Vec::with_capacity((input.len() / 256).max(4));
    parser.parse(&mut blocks);
    let doc = Document::from_blocks(blocks);
    debug!(input_len = input.len(), blocks = doc.len(), "parsed document");
    doc
}

/// Convert content to HTML.
///
/// # Example
/// ```
/// let html = fixture_handbook::to_html("## Giriş\n\nDeğer $x+1$ olur.");
/// assert!(html.contains("<h2 id=\"giris\">Giriş</h2>"));
/// assert!(html.contains("<span class=\"math-inline\">x+1</span>"));
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert content to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let doc = parse_with_options(input, options);
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_document(&doc, &mut writer);
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_one_paragraph() {
        let doc = parse("");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.blocks()[0], Block::plain_paragraph(""));
        assert_eq!(to_html(""), "<p></p>\n");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(parse("\n\n\n").len(), 1);
    }

    #[test]
    fn test_heading_and_paragraph() {
        let html = to_html("## Başlık\n\nMetin.");
        assert_eq!(html, "<h2 id=\"baslik\">Başlık</h2>\n<p>Metin.</p>\n");
    }

    #[test]
    fn test_h3() {
        let html = to_html("### 3-2-1 Kuralı");
        assert_eq!(html, "<h3 id=\"3-2-1-kurali\">3-2-1 Kuralı</h3>\n");
    }

    #[test]
    fn test_literal_anchor_option() {
        let options = Options {
            anchor_style: AnchorStyle::Literal,
            ..Options::default()
        };
        let html = to_html_with_options("## Giriş", &options);
        assert_eq!(html, "<h2 id=\"giri\">Giriş</h2>\n");
    }

    #[test]
    fn test_math_disabled_option() {
        let options = Options {
            math: false,
            ..Options::default()
        };
        assert_eq!(to_html_with_options("$x$", &options), "<p>$x$</p>\n");
    }

    #[test]
    fn test_paragraph_escaping() {
        assert_eq!(to_html("a < b & c"), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn test_bold_markers_stay_literal() {
        assert_eq!(to_html("**Hassasiyet**"), "<p>**Hassasiyet**</p>\n");
    }

    #[test]
    fn test_complex_document() {
        let input = "## Giriş\n\nMetin $k$.\n\n* A\n* B\n\n![Şema](etiket)\n\n$$F=ma$$";
        let doc = parse(input);
        let kinds: Vec<_> = doc.iter().map(Block::kind).collect();
        assert_eq!(
            kinds,
            ["heading2", "paragraph", "list", "image_caption", "paragraph"]
        );
    }

    #[test]
    fn test_options_deserialize_defaults() {
        let options: Options = serde_json::from_str(r#"{"anchor_style": "literal"}"#).unwrap();
        assert_eq!(options.anchor_style, AnchorStyle::Literal);
        assert!(options.math);
    }
}
