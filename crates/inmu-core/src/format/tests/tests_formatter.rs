//! Tests for the formatter

use rstest::rstest;

use crate::format::{format_document, FormattingOptions, DEFAULT_TAB_SIZE};
use crate::syntax::{Position, TextRange};

#[test]
fn test_function_body_indented_with_two_spaces() {
    let edit = format_document("fn f() {\nprint 1\n}", &FormattingOptions::new(2, true));
    assert_eq!(edit.new_text, "fn f() {\n  print 1\n}");
}

#[test]
fn test_nested_blocks_and_existing_indentation() {
    let text = "fn f() {\n        if x {\n print x\n}\n    }";
    let edit = format_document(text, &FormattingOptions::default());
    assert_eq!(
        edit.new_text,
        "fn f() {\n    if x {\n        print x\n    }\n}"
    );
}

#[test]
fn test_tabs_when_spaces_disabled() {
    let edit = format_document("if x {\nprint x\n}", &FormattingOptions::new(8, false));
    assert_eq!(edit.new_text, "if x {\n\tprint x\n}");
}

#[rstest]
#[case(0, DEFAULT_TAB_SIZE as usize)]
#[case(2, 2)]
#[case(3, 3)]
fn test_indent_unit_width(#[case] tab_size: u32, #[case] width: usize) {
    let unit = FormattingOptions::new(tab_size, true).indent_unit();
    assert_eq!(unit, " ".repeat(width));
}

#[test]
fn test_extra_closing_braces_never_go_negative() {
    let edit = format_document("}\n}\nprint 1", &FormattingOptions::default());
    assert_eq!(edit.new_text, "}\n}\nprint 1");
}

#[test]
fn test_blank_lines_inside_block_are_indented() {
    let edit = format_document("fn f() {\n\n}", &FormattingOptions::new(2, true));
    assert_eq!(edit.new_text, "fn f() {\n  \n}");
}

#[test]
fn test_edit_covers_whole_document() {
    let edit = format_document("let x = 1\r\n  let yy = 2", &FormattingOptions::default());
    assert_eq!(
        edit.range,
        TextRange::new(Position::new(0, 0), Position::new(1, 12))
    );
    assert_eq!(edit.new_text, "let x = 1\nlet yy = 2");
}

#[test]
fn test_empty_document() {
    let edit = format_document("", &FormattingOptions::default());
    assert_eq!(edit.range, TextRange::on_line(0, 0, 0));
    assert_eq!(edit.new_text, "");
}

#[test]
fn test_trailing_newline_preserved() {
    let edit = format_document("print 1\n", &FormattingOptions::default());
    assert_eq!(edit.new_text, "print 1\n");
    assert_eq!(edit.range.end, Position::new(1, 0));
}
