use md2html::to_html;

// One test group per rule, then interaction cases.

#[test]
fn strong_with_stars() {
    assert_eq!(to_html("**bold**"), "<p><strong>bold</strong></p>");
}

#[test]
fn strong_with_underscores() {
    assert_eq!(to_html("__bold__"), "<p><strong>bold</strong></p>");
}

#[test]
fn em_with_star() {
    assert_eq!(to_html("*word*"), "<p><em>word</em></p>");
}

#[test]
fn em_with_underscore() {
    assert_eq!(to_html("_word_"), "<p><em>word</em></p>");
}

#[test]
fn strikethrough() {
    assert_eq!(to_html("--gone--"), "<p><s>gone</s></p>");
}

#[test]
fn underline() {
    assert_eq!(to_html("++kept++"), "<p><u>kept</u></p>");
}

#[test]
fn code_span() {
    assert_eq!(to_html("`let x`"), "<p><code>let x</code></p>");
}

#[test]
fn highlight() {
    assert_eq!(to_html("~note~"), "<p><mark>note</mark></p>");
}

#[test]
fn non_greedy_independent_spans() {
    assert_eq!(
        to_html("**a** and **b**"),
        "<p><strong>a</strong> and <strong>b</strong></p>"
    );
}

#[test]
fn unmatched_delimiter_stays_literal() {
    assert_eq!(to_html("*lonely"), "<p>*lonely</p>");
    assert_eq!(to_html("lonely~"), "<p>lonely~</p>");
}

#[test]
fn escaped_delimiters_stay_literal() {
    assert_eq!(to_html("\\*x\\* *y*"), "<p>*x* <em>y</em></p>");
}

#[test]
fn escaped_star_next_to_live_pair() {
    assert_eq!(to_html("a \\* b * c *"), "<p>a * b <em> c </em></p>");
}

#[test]
fn em_inside_strong() {
    assert_eq!(
        to_html("**a *b* c**"),
        "<p><strong>a <em>b</em> c</strong></p>"
    );
}

#[test]
fn strong_rule_wins_over_em() {
    assert_eq!(to_html("**x**"), "<p><strong>x</strong></p>");
    assert!(!to_html("**x**").contains("<em>"));
}

#[test]
fn span_across_newline_within_block() {
    assert_eq!(to_html("**a\nb**"), "<p><strong>a\nb</strong></p>");
}

#[test]
fn code_span_contents_are_escaped() {
    assert_eq!(to_html("`<div>`"), "<p><code>&lt;div&gt;</code></p>");
}

#[test]
fn em_outranks_code_span() {
    // Fixed rule order: emphasis is applied before code, so a starred word
    // inside backticks is still emphasized.
    assert_eq!(
        to_html("`a *b* c`"),
        "<p><code>a <em>b</em> c</code></p>"
    );
}

#[test]
fn mixed_rules_in_one_paragraph() {
    assert_eq!(
        to_html("--a-- ++b++ `c` ~d~"),
        "<p><s>a</s> <u>b</u> <code>c</code> <mark>d</mark></p>"
    );
}

#[test]
fn ampersand_escaped_before_rules() {
    assert_eq!(to_html("fish & chips"), "<p>fish &amp; chips</p>");
}

#[test]
fn triple_star_leftover_pairs_with_trailing() {
    assert_eq!(to_html("***a***"), "<p><strong><em>a</strong></em></p>");
}
