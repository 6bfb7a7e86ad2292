//! Tests for positions and word scanning

use rstest::rstest;

use crate::syntax::{
    byte_offset, identifiers, split_lines, string_literal_spans, utf16_column, utf16_len,
    whole_word_matches, word_at, word_runs, Position, TextRange,
};

#[test]
fn test_split_lines_handles_crlf() {
    assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
}

#[test]
fn test_split_lines_empty_text_is_one_line() {
    assert_eq!(split_lines(""), vec![""]);
}

#[test]
fn test_split_lines_trailing_newline_adds_empty_line() {
    assert_eq!(split_lines("let x = 1\n"), vec!["let x = 1", ""]);
}

#[test]
fn test_utf16_len_counts_surrogate_pairs() {
    assert_eq!(utf16_len("abc"), 3);
    assert_eq!(utf16_len("가나"), 2);
    assert_eq!(utf16_len("a😀b"), 4);
}

#[test]
fn test_utf16_column_and_byte_offset_agree() {
    let line = "가 = x";
    // '가' is 3 bytes and 1 UTF-16 unit
    assert_eq!(utf16_column(line, 3), 1);
    assert_eq!(byte_offset(line, 1), 3);
    assert_eq!(byte_offset(line, 100), line.len());
    assert_eq!(utf16_column(line, 100), utf16_len(line));
}

#[test]
fn test_word_runs_include_digit_runs() {
    let runs: Vec<_> = word_runs("foo(12, bar_2)").collect();
    assert_eq!(runs, vec![(0, "foo"), (4, "12"), (8, "bar_2")]);
}

#[test]
fn test_identifiers_skip_digit_led_runs() {
    let ids: Vec<_> = identifiers("x1 = 9abc + _y").map(|(_, id)| id).collect();
    assert_eq!(ids, vec!["x1", "_y"]);
}

#[test]
fn test_whole_word_matches() {
    let hits: Vec<_> = whole_word_matches("x + xs + x", "x").collect();
    assert_eq!(hits, vec![0, 9]);
}

#[test]
fn test_string_literal_spans() {
    let line = r#"print "a b" + 'c' + "open"#;
    let spans = string_literal_spans(line);
    assert_eq!(spans, vec![6..11, 14..17]);
}

#[test]
fn test_string_literal_spans_nested_quote_kinds() {
    let line = r#"'say "hi"' x"#;
    assert_eq!(string_literal_spans(line), vec![0..10]);
}

#[rstest]
#[case("print total", 8, Some("total"))]
#[case("print total", 6, Some("total"))]
#[case("print total", 11, Some("total"))]
#[case("print total", 5, Some("print"))]
#[case("a  b", 2, None)]
#[case("", 0, None)]
#[case("abc", 99, Some("abc"))]
fn test_word_at(#[case] line: &str, #[case] column: u32, #[case] expected: Option<&str>) {
    assert_eq!(word_at(line, column).map(|(_, word)| word), expected);
}

#[test]
fn test_word_at_reports_start_offset() {
    assert_eq!(word_at("let count = 1", 6), Some((4, "count")));
}

#[test]
fn test_text_range_helpers() {
    assert_eq!(
        TextRange::full_line(3, "let y"),
        TextRange::new(Position::new(3, 0), Position::new(3, 5))
    );
    assert_eq!(
        TextRange::of_bytes(0, "가 z", 4, 1),
        TextRange::on_line(0, 2, 3)
    );
}
