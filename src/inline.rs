//! Inline markup engine.
//!
//! Applies a fixed, ordered set of delimiter-pair rules over one block of
//! escaped text. The block is kept as a flat piece list instead of a single
//! repeatedly-substituted string: rules only ever scan literal text pieces,
//! so a later rule can never match inside markup inserted by an earlier
//! one. Inner text between a matched pair stays literal and remains
//! visible to later rules.
//!
//! Three phases per rule:
//! 1. Collect: non-overlapping, non-escaped delimiter occurrences
//! 2. Pair: consecutive occurrences form opener/closer pairs (non-greedy)
//! 3. Rebuild: delimiter bytes are replaced by tag pieces

use memchr::memchr;

use crate::range::Range;

/// A delimiter-pair to tag-pair rule. Opener and closer are identical.
struct Rule {
    delim: &'static [u8],
    open: &'static str,
    close: &'static str,
}

/// Rules in application order. Earlier rules take precedence: their
/// delimiters are consumed and never reconsidered by later rules. Two-byte
/// delimiters come before their one-byte prefixes so `**` is never read as
/// two `*`.
const RULES: [Rule; 8] = [
    Rule { delim: b"**", open: "<strong>", close: "</strong>" },
    Rule { delim: b"__", open: "<strong>", close: "</strong>" },
    Rule { delim: b"*", open: "<em>", close: "</em>" },
    Rule { delim: b"_", open: "<em>", close: "</em>" },
    Rule { delim: b"--", open: "<s>", close: "</s>" },
    Rule { delim: b"++", open: "<u>", close: "</u>" },
    Rule { delim: b"`", open: "<code>", close: "</code>" },
    Rule { delim: b"~", open: "<mark>", close: "</mark>" },
];

/// One segment of a partially marked-up block.
#[derive(Clone, Copy, Debug)]
enum Piece {
    /// Literal text, as a byte range into the escaped block.
    Text(Range),
    /// A tag inserted by an earlier rule.
    Tag(&'static str),
}

/// Apply all markup rules to one block of escaped text.
///
/// Unmatched delimiters stay literal; a delimiter directly preceded by a
/// backslash is never recognized.
///
/// # Example
/// ```
/// use md2html::inline::apply_markup;
///
/// assert_eq!(apply_markup("**a** and **b**"), "<strong>a</strong> and <strong>b</strong>");
/// assert_eq!(apply_markup("*lonely"), "*lonely");
/// ```
pub fn apply_markup(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut pieces: Vec<Piece> = Vec::with_capacity(8);
    if !bytes.is_empty() {
        pieces.push(Piece::Text(Range::from_usize(0, bytes.len())));
    }

    let mut occurrences: Vec<u32> = Vec::new();
    for rule in &RULES {
        collect_occurrences(bytes, &pieces, rule.delim, &mut occurrences);
        if occurrences.len() < 2 {
            continue;
        }
        pieces = rebuild(&pieces, &occurrences, rule);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for piece in &pieces {
        match *piece {
            Piece::Text(range) => out.push_str(range.slice(text)),
            Piece::Tag(tag) => out.push_str(tag),
        }
    }
    out
}

/// Collect non-overlapping, non-escaped occurrences of a delimiter across
/// the literal pieces, in document order. Positions are absolute byte
/// offsets into the block.
fn collect_occurrences(bytes: &[u8], pieces: &[Piece], delim: &[u8], out: &mut Vec<u32>) {
    out.clear();
    for piece in pieces {
        let range = match piece {
            Piece::Text(r) => *r,
            Piece::Tag(_) => continue,
        };
        let (start, end) = (range.start as usize, range.end as usize);
        let mut pos = start;
        while pos + delim.len() <= end {
            let found = match memchr(delim[0], &bytes[pos..end]) {
                Some(i) => pos + i,
                None => break,
            };
            if found + delim.len() > end || &bytes[found..found + delim.len()] != delim {
                pos = found + 1;
                continue;
            }
            // A backslash directly before the delimiter (within the same
            // literal piece) suppresses it. An accepted occurrence advances
            // by the delimiter length so runs never overlap.
            if found > start && bytes[found - 1] == b'\\' {
                pos = found + 1;
                continue;
            }
            out.push(found as u32);
            pos = found + delim.len();
        }
    }
}

/// Replace each opener/closer pair's delimiter bytes with tag pieces.
///
/// Consecutive occurrences pair up, which is exactly global non-greedy
/// matching: each opener takes the nearest following delimiter as its
/// closer. An unpaired trailing occurrence stays literal. A pair may span
/// piece boundaries, so the wrapped span can contain earlier-inserted
/// tags.
fn rebuild(pieces: &[Piece], occurrences: &[u32], rule: &Rule) -> Vec<Piece> {
    let paired = occurrences.len() & !1;
    let dlen = rule.delim.len() as u32;
    let mut out = Vec::with_capacity(pieces.len() + paired * 2);
    let mut next = 0;

    for piece in pieces {
        let range = match *piece {
            Piece::Tag(tag) => {
                out.push(Piece::Tag(tag));
                continue;
            }
            Piece::Text(r) => r,
        };
        let mut cur = range.start;
        while next < paired && occurrences[next] < range.end {
            let pos = occurrences[next];
            if pos > cur {
                out.push(Piece::Text(Range::new(cur, pos)));
            }
            out.push(Piece::Tag(if next % 2 == 0 { rule.open } else { rule.close }));
            cur = pos + dlen;
            next += 1;
        }
        if cur < range.end {
            out.push(Piece::Text(Range::new(cur, range.end)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_star() {
        assert_eq!(apply_markup("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_strong_underscore() {
        assert_eq!(apply_markup("__bold__"), "<strong>bold</strong>");
    }

    #[test]
    fn test_em_star_and_underscore() {
        assert_eq!(apply_markup("*a* _b_"), "<em>a</em> <em>b</em>");
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(apply_markup("--gone--"), "<s>gone</s>");
    }

    #[test]
    fn test_underline() {
        assert_eq!(apply_markup("++under++"), "<u>under</u>");
    }

    #[test]
    fn test_code() {
        assert_eq!(apply_markup("`x`"), "<code>x</code>");
    }

    #[test]
    fn test_mark() {
        assert_eq!(apply_markup("~hi~"), "<mark>hi</mark>");
    }

    #[test]
    fn test_non_greedy_spans() {
        assert_eq!(
            apply_markup("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_unmatched_opener_stays_literal() {
        assert_eq!(apply_markup("*lonely"), "*lonely");
    }

    #[test]
    fn test_odd_occurrence_stays_literal() {
        assert_eq!(apply_markup("*a* *b"), "<em>a</em> *b");
    }

    #[test]
    fn test_escaped_delimiter_not_recognized() {
        assert_eq!(apply_markup("\\*x\\* *y*"), "\\*x\\* <em>y</em>");
    }

    #[test]
    fn test_empty_span() {
        assert_eq!(apply_markup("****"), "<strong></strong>");
    }

    #[test]
    fn test_span_across_newline() {
        assert_eq!(apply_markup("**a\nb**"), "<strong>a\nb</strong>");
    }

    #[test]
    fn test_em_inside_strong() {
        assert_eq!(
            apply_markup("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_double_before_single_precedence() {
        // The leftover third star still pairs with the trailing one, the
        // same way chained substitution behaved.
        assert_eq!(apply_markup("***a***"), "<strong><em>a</strong></em>");
    }

    #[test]
    fn test_later_rule_pairs_across_earlier_tags() {
        assert_eq!(
            apply_markup("*a* -- *b* --"),
            "<em>a</em><s> <em>b</em> </s>"
        );
    }

    #[test]
    fn test_two_strikethrough_spans() {
        assert_eq!(apply_markup("--a-- --b--"), "<s>a</s> <s>b</s>");
    }

    #[test]
    fn test_consumed_delimiters_invisible_to_later_rules() {
        // The `**` pair is consumed by the strong rule; the `_` rule then
        // pairs across the inserted tags.
        assert_eq!(apply_markup("_**x**_"), "<em><strong>x</strong></em>");
    }

    #[test]
    fn test_em_applies_before_code_span() {
        // Rule order is fixed: emphasis outranks code, so a starred word
        // inside backticks is still emphasized.
        assert_eq!(apply_markup("`a *b* c`"), "<code>a <em>b</em> c</code>");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(apply_markup("no markup here"), "no markup here");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(apply_markup(""), "");
    }
}
