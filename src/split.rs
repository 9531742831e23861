//! Document splitting into blank-line-separated blocks.

/// Split raw input into ordered blocks.
///
/// A line containing only whitespace counts as blank. Leading and trailing
/// blank lines are discarded; any run of one-or-more blank lines separates
/// two blocks. Interior single newlines are preserved within a block. The
/// returned slices borrow from the input.
///
/// # Example
/// ```
/// let blocks = md2html::split::split_blocks("# Title\n\nbody\nmore\n");
/// assert_eq!(blocks, vec!["# Title", "body\nmore"]);
/// ```
pub fn split_blocks(input: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in input.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if is_blank(content) {
            if let Some(s) = start.take() {
                blocks.push(&input[s..end]);
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + content.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        blocks.push(&input[s..end]);
    }
    blocks
}

/// A line is blank if it contains nothing but ASCII whitespace.
#[inline]
fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b.is_ascii_whitespace())
}
