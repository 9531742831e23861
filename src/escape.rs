//! Escaping of HTML-sensitive characters and restoration of literal
//! markup-escape sequences.
//!
//! Fast-path optimized: scans for the first escapable byte with `memchr`,
//! then bulk-copies the segments in between.

use memchr::{memchr, memchr3};

/// Escape `&`, `<` and `>` for HTML text content.
///
/// A single left-to-right pass, so entities produced by this call are never
/// themselves re-escaped. The pass is not idempotent across repeated calls
/// and is applied exactly once per block.
///
/// # Example
/// ```
/// let mut out = String::new();
/// md2html::escape::escape_into(&mut out, "a & b < c > d");
/// assert_eq!(out, "a &amp; b &lt; c &gt; d");
/// ```
pub fn escape_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let found = match memchr3(b'&', b'<', b'>', &bytes[pos..]) {
            Some(i) => pos + i,
            None => {
                out.push_str(&text[pos..]);
                return;
            }
        };
        out.push_str(&text[pos..found]);
        out.push_str(match bytes[found] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        });
        pos = found + 1;
    }
}

/// Restore backslash-escaped markup delimiters: `\*` becomes `*` and `\_`
/// becomes `_`. No other escape sequences are recognized; a backslash
/// before any other byte passes through untouched.
pub fn unescape_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let found = match memchr(b'\\', &bytes[pos..]) {
            Some(i) => pos + i,
            None => break,
        };
        match bytes.get(found + 1) {
            Some(&b) if b == b'*' || b == b'_' => {
                out.push_str(&text[start..found]);
                out.push(b as char);
                start = found + 2;
                pos = found + 2;
            }
            _ => pos = found + 1,
        }
    }
    out.push_str(&text[start..]);
}

/// Escape into a fresh `String`.
///
/// Prefer `escape_into` to reuse buffers.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    escape_into(&mut out, text);
    out
}

/// Unescape into a fresh `String`.
///
/// Prefer `unescape_into` to reuse buffers.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    unescape_into(&mut out, text);
    out
}
