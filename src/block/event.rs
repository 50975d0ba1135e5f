//! Block types.

use serde::Serialize;

use crate::inline::{Span, Spans};

/// Heading level. Only `##` and `###` headings exist in handbook content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    /// `## ` heading.
    H2,
    /// `### ` heading.
    H3,
}

impl HeadingLevel {
    /// Source prefix, trailing space included.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::H2 => "## ",
            Self::H3 => "### ",
        }
    }

    /// HTML tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

/// One classified unit of display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `## text` or `### text`.
    Heading {
        /// Heading level.
        level: HeadingLevel,
        /// Everything after the prefix, later lines included.
        text: String,
        /// Anchor identifier for in-page links.
        anchor: String,
    },
    /// Segment whose first line starts with `* `.
    List {
        /// Item texts without the marker, in source order.
        items: Vec<String>,
    },
    /// `![caption](label)` placeholder for a figure.
    ImageCaption {
        /// Text between `![` and `](`.
        caption: String,
        /// Text between `(` and `)`.
        label: String,
    },
    /// Anything else.
    Paragraph {
        /// Text and math spans.
        spans: Spans,
    },
}

impl Block {
    /// Paragraph holding `text` verbatim, without math scanning.
    pub fn plain_paragraph(text: &str) -> Self {
        let mut spans = Spans::new();
        if !text.is_empty() {
            spans.push(Span::Text(text.to_owned()));
        }
        Self::Paragraph { spans }
    }

    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { level: HeadingLevel::H2, .. } => "heading2",
            Self::Heading { level: HeadingLevel::H3, .. } => "heading3",
            Self::List { .. } => "list",
            Self::ImageCaption { .. } => "image_caption",
            Self::Paragraph { .. } => "paragraph",
        }
    }

    /// Re-serialize a heading to its source form. `None` for other blocks.
    pub fn heading_source(&self) -> Option<String> {
        match self {
            Self::Heading { level, text, .. } => Some(format!("{}{}", level.prefix(), text)),
            _ => None,
        }
    }
}

/// Ordered blocks of one content string. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Wrap parsed blocks. An empty list becomes one empty paragraph.
    pub(crate) fn from_blocks(mut blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            blocks.push(Block::plain_paragraph(""));
        }
        Self { blocks }
    }

    /// Document of exactly one paragraph holding `message` verbatim.
    pub fn fallback(message: &str) -> Self {
        Self {
            blocks: vec![Block::plain_paragraph(message)],
        }
    }

    /// Blocks in source order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks (always at least one).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`: a document holds at least one block.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
