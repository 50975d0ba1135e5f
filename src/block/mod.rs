//! Block-level parsing of handbook content.
//!
//! Content is split on blank lines into segments, and each segment maps to
//! exactly one block:
//! - `## ` and `### ` headings
//! - `* ` lists
//! - `![caption](label)` image captions
//! - Paragraphs (everything else)

mod event;
mod parser;
pub mod rules;

pub use event::{Block, Document, HeadingLevel};
pub use parser::{split_segments, BlockParser};
pub use rules::{classify, Rule, RULES};
