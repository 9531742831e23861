//! Block classification: heading or paragraph.

/// A classified block.
///
/// Classification is a total function over strings: every block is either a
/// heading or a paragraph, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// One-or-more leading `#` characters followed by whitespace.
    ///
    /// The level is unclamped: seven or more `#` still classify as a
    /// heading and render as a literal `<h7>`, `<h8>`, ... downstream.
    Heading { level: u32, text: &'a str },
    Paragraph { text: &'a str },
}

/// Classify one raw block.
///
/// A heading is a run of `#` anchored at the very start of the block,
/// followed by at least one whitespace byte; the whole whitespace run is
/// consumed and the remainder becomes the heading text. Heading text may
/// span newlines. Anything else, including `#` with no following
/// whitespace, degrades to a paragraph.
///
/// # Example
/// ```
/// use md2html::block::{classify, Block};
///
/// assert_eq!(classify("## Sub"), Block::Heading { level: 2, text: "Sub" });
/// assert_eq!(classify("#NoSpace"), Block::Paragraph { text: "#NoSpace" });
/// ```
pub fn classify(raw: &str) -> Block<'_> {
    let bytes = raw.as_bytes();
    let hashes = bytes.iter().take_while(|&&b| b == b'#').count();
    if hashes > 0 {
        let ws = bytes[hashes..]
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        if ws > 0 {
            return Block::Heading {
                level: hashes as u32,
                text: &raw[hashes + ws..],
            };
        }
    }
    Block::Paragraph { text: raw }
}
