//! md2html: single-pass converter from a lightweight Markdown dialect to HTML.
//!
//! The input document is split into blank-line-separated blocks; each block
//! is classified as a heading or a paragraph, HTML-escaped, run through a
//! fixed ordered set of inline markup rules (bold, italic, strikethrough,
//! underline, code, highlight), unescaped for literal `\*`/`\_` sequences,
//! and wrapped in its block tag.
//!
//! # Design Principles
//! - No AST: blocks are borrowed slices, inline state is a flat piece list
//! - No regex: pure byte-level scanning
//! - No backtracking: linear time per rule on all inputs
//! - The core never fails on string input; I/O errors stay in the binary
//!
//! # Example
//! ```
//! let html = md2html::to_html("# Hello\n\nThis is **bold** and _italic_ text.");
//! assert_eq!(
//!     html,
//!     "<h1>Hello</h1>\n<p>This is <strong>bold</strong> and <em>italic</em> text.</p>"
//! );
//! ```

pub mod block;
pub mod escape;
pub mod inline;
pub mod range;
pub mod render;
pub mod split;

pub use block::Block;
pub use range::Range;
pub use render::HtmlWriter;

/// Convert a document to HTML.
///
/// Block fragments are joined with a single newline; there is no trailing
/// newline after the last block. All-blank input produces an empty string.
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer);
    writer.into_string()
}

/// Convert a document to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; existing capacity is reused.
pub fn to_html_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(input, &mut writer);
    *out = writer.into_string();
}

/// Render all blocks of a document to a writer.
fn render_to_writer(input: &str, writer: &mut HtmlWriter) {
    let blocks = split::split_blocks(input);

    // Scratch buffers reused across blocks. Each block still produces its
    // own fragment; nothing leaks between blocks.
    let mut escaped = String::new();
    let mut body = String::new();

    for (index, raw) in blocks.iter().enumerate() {
        if index > 0 {
            writer.newline();
        }
        render_block(raw, writer, &mut escaped, &mut body);
    }
}

/// Render one raw block: classify, escape, apply inline rules, unescape,
/// wrap in the block tag.
fn render_block(raw: &str, writer: &mut HtmlWriter, escaped: &mut String, body: &mut String) {
    let (level, text) = match block::classify(raw) {
        Block::Heading { level, text } => (Some(level), text),
        Block::Paragraph { text } => (None, text),
    };

    escaped.clear();
    escape::escape_into(escaped, text);
    let marked = inline::apply_markup(escaped);
    body.clear();
    escape::unescape_into(body, &marked);

    match level {
        Some(level) => {
            writer.heading_start(level);
            writer.write_string(body);
            writer.heading_end(level);
        }
        None => {
            writer.paragraph_start();
            writer.write_string(body);
            writer.paragraph_end();
        }
    }
}
