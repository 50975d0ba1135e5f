//! Table of contents.

use serde::Serialize;

use crate::block::{Block, Document, HeadingLevel};

/// One heading in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: HeadingLevel,
    /// First line of the heading text.
    pub title: String,
    /// Same anchor as the rendered heading, so links always resolve.
    pub anchor: String,
}

/// Collect the headings of `doc` in document order.
pub fn table_of_contents(doc: &Document) -> Vec<TocEntry> {
    doc.iter()
        .filter_map(|block| match block {
            Block::Heading {
                level,
                text,
                anchor,
            } => Some(TocEntry {
                level: *level,
                title: text.lines().next().unwrap_or_default().to_owned(),
                anchor: anchor.clone(),
            }),
            _ => None,
        })
        .collect()
}
