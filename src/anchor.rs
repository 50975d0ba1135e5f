//! Heading anchor identifiers.
//!
//! An anchor is the heading text lower-cased, with every run of characters
//! outside `[a-z0-9]` collapsed into a single `-` and no leading or
//! trailing `-`. Identical heading text yields identical anchors.

use serde::{Deserialize, Serialize};

/// How non-ASCII letters are treated when building an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorStyle {
    /// Non-ASCII letters act as separators: `Giriş` becomes `giri`.
    Literal,
    /// Turkish and common Latin letters fold to ASCII first:
    /// `Giriş` becomes `giris`.
    #[default]
    Transliterate,
}

/// Build the anchor identifier for a heading.
///
/// # Example
/// ```
/// use fixture_handbook::anchor::{anchor_id, AnchorStyle};
///
/// assert_eq!(anchor_id("3-2-1 Kuralı (Locating Principle)", AnchorStyle::Transliterate),
///            "3-2-1-kurali-locating-principle");
/// assert_eq!(anchor_id("Giriş", AnchorStyle::Literal), "giri");
/// ```
pub fn anchor_id(text: &str, style: AnchorStyle) -> String {
    let mut out = String::with_capacity(text.len());
    // Pending separator; only emitted once a following alphanumeric shows up.
    let mut pending = false;

    for lower in text.chars().flat_map(char::to_lowercase) {
        let folded = match style {
            AnchorStyle::Literal => Fold::One(lower),
            AnchorStyle::Transliterate => fold_ascii(lower),
        };
        let mut push = |c: char| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                if pending && !out.is_empty() {
                    out.push('-');
                }
                pending = false;
                out.push(c);
            } else {
                pending = true;
            }
        };
        match folded {
            Fold::Skip => {}
            Fold::One(c) => push(c),
            Fold::Two(a, b) => {
                push(a);
                push(b);
            }
        }
    }

    out
}

enum Fold {
    Skip,
    One(char),
    Two(char, char),
}

/// Fold a lower-cased character to ASCII where a common equivalent exists.
fn fold_ascii(c: char) -> Fold {
    let folded = match c {
        // Turkish
        'ç' => 'c',
        'ğ' => 'g',
        'ı' => 'i',
        'ö' => 'o',
        'ş' => 's',
        'ü' => 'u',
        'â' => 'a',
        'î' => 'i',
        'û' => 'u',
        // `İ` lower-cases to `i` + U+0307; the dot is dropped.
        '\u{307}' => return Fold::Skip,
        // Latin-1
        'à' | 'á' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ø' => 'o',
        'ù' | 'ú' => 'u',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        'ß' => return Fold::Two('s', 's'),
        'æ' => return Fold::Two('a', 'e'),
        other => other,
    };
    Fold::One(folded)
}
