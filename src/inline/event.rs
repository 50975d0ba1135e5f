//! Inline span types.

use serde::Serialize;

/// One piece of paragraph content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    /// Plain text, rendered escaped.
    Text(String),
    /// `$...$` content without the delimiters.
    InlineMath(String),
    /// `$$...$$` content without the delimiters.
    DisplayMath(String),
}

impl Span {
    /// The span's content, delimiters excluded.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::InlineMath(s) | Self::DisplayMath(s) => s,
        }
    }

    /// Whether this span is math of either kind.
    pub fn is_math(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_excludes_delimiters() {
        assert_eq!(Span::InlineMath("x+1".into()).as_str(), "x+1");
        assert_eq!(Span::DisplayMath("F=ma".into()).as_str(), "F=ma");
    }

    #[test]
    fn test_is_math() {
        assert!(!Span::Text("a".into()).is_math());
        assert!(Span::InlineMath("a".into()).is_math());
    }
}
