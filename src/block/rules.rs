//! Ordered classification rules.
//!
//! Each rule pairs a prefix test with a constructor. Rules are tried in
//! order and the first whose test passes and whose constructor accepts the
//! segment wins. A constructor may decline (the image rule does when the
//! full `![caption](label)` pattern is missing), in which case the next
//! rule is tried. [`classify`] always ends in a paragraph.

use crate::anchor::anchor_id;
use crate::inline::paragraph_spans;
use crate::Options;

use super::event::{Block, HeadingLevel};

/// Marker that starts a list line.
pub const LIST_MARKER: &str = "* ";

/// A predicate/constructor pair.
pub struct Rule {
    /// Rule name, for logs.
    pub name: &'static str,
    /// Cheap prefix test on the raw segment.
    pub matches: fn(&str) -> bool,
    /// Build the block, or decline.
    pub build: fn(&str, &Options) -> Option<Block>,
}

/// Rules in precedence order. Paragraph is the fallback and is not listed.
pub const RULES: &[Rule] = &[
    Rule {
        name: "heading2",
        matches: is_heading2,
        build: build_heading2,
    },
    Rule {
        name: "heading3",
        matches: is_heading3,
        build: build_heading3,
    },
    Rule {
        name: "list",
        matches: is_list,
        build: build_list,
    },
    Rule {
        name: "image_caption",
        matches: is_image_caption,
        build: build_image_caption,
    },
];

/// Classify one segment. Never fails.
pub fn classify(segment: &str, options: &Options) -> Block {
    RULES
        .iter()
        .filter(|rule| (rule.matches)(segment))
        .find_map(|rule| (rule.build)(segment, options))
        .unwrap_or_else(|| build_paragraph(segment, options))
}

pub fn is_heading2(segment: &str) -> bool {
    segment.starts_with(HeadingLevel::H2.prefix())
}

pub fn is_heading3(segment: &str) -> bool {
    segment.starts_with(HeadingLevel::H3.prefix())
}

pub fn is_list(segment: &str) -> bool {
    segment.starts_with(LIST_MARKER)
}

pub fn is_image_caption(segment: &str) -> bool {
    segment.starts_with("![")
}

fn build_heading2(segment: &str, options: &Options) -> Option<Block> {
    Some(heading(HeadingLevel::H2, segment, options))
}

fn build_heading3(segment: &str, options: &Options) -> Option<Block> {
    Some(heading(HeadingLevel::H3, segment, options))
}

fn heading(level: HeadingLevel, segment: &str, options: &Options) -> Block {
    let text = &segment[level.prefix().len()..];
    Block::Heading {
        level,
        text: text.to_owned(),
        anchor: anchor_id(text, options.anchor_style),
    }
}

/// Keep lines that start with the marker; drop the rest.
pub fn build_list(segment: &str, _options: &Options) -> Option<Block> {
    let items = segment
        .split('\n')
        .filter_map(|line| line.strip_prefix(LIST_MARKER))
        .map(|item| item.strip_suffix('\r').unwrap_or(item).to_owned())
        .collect();
    Some(Block::List { items })
}

/// Match `![caption](label)` on the first line.
///
/// The caption ends at the first `](`, the label at the next `)`. Text
/// after the closing parenthesis is ignored.
pub fn build_image_caption(segment: &str, _options: &Options) -> Option<Block> {
    let line = segment.split('\n').next()?;
    let rest = line.strip_prefix("![")?;
    let caption_end = rest.find("](")?;
    let caption = &rest[..caption_end];
    let after = &rest[caption_end + 2..];
    let label_end = after.find(')')?;
    Some(Block::ImageCaption {
        caption: caption.to_owned(),
        label: after[..label_end].to_owned(),
    })
}

pub fn build_paragraph(segment: &str, options: &Options) -> Block {
    Block::Paragraph {
        spans: paragraph_spans(segment, options.math),
    }
}
