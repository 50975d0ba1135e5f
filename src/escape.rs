//! HTML escaping utilities.
//!
//! Text content takes a memchr fast path: scan for the first escapable
//! byte, then bulk-copy the segments between escapes. All escapable
//! characters are ASCII, so every split point is a char boundary.

use memchr::{memchr, memchr3};

/// Lookup table for escapable characters in text content.
/// `"` is escaped too so text can be pasted into attribute context.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Escape HTML text content into `out`.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use fixture_handbook::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "F < 2 & k > 1");
/// assert_eq!(out, "F &lt; 2 &amp; k &gt; 1");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    let bytes = input.as_bytes();
    let mut pos = match first_text_escape(bytes) {
        Some(p) => p,
        None => {
            out.push_str(input);
            return;
        }
    };

    out.push_str(&input[..pos]);

    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !TEXT_ESCAPE_TABLE[bytes[pos] as usize] {
            pos += 1;
        }
        out.push_str(&input[scan_start..pos]);

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => "&quot;",
            });
            pos += 1;
        }
    }
}

/// Escape an attribute value for a double-quoted attribute into `out`.
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    out.push_str(&html_escape::encode_double_quoted_attribute(input));
}

/// Check whether text content needs any escaping.
#[inline]
pub fn needs_text_escape(input: &str) -> bool {
    first_text_escape(input.as_bytes()).is_some()
}

/// Escape text content and return it as a new `String`.
///
/// Prefer [`escape_text_into`] to reuse buffers.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input);
    out
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
