use super::*;
use asm_ir::{Category, Position};
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let tok = Token::new(0, 0, "foo", Category::Unknown);
    let diag = Diagnostic::error(ErrorCode::E1001, tok.span())
        .with_message("test error")
        .with_note("some context");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "test error");
    assert_eq!(diag.notes, vec!["some context".to_string()]);
}

#[test]
fn test_missing_label_colon_covers_head() {
    let head = Token::new(4, 2, "foo", Category::Unknown);
    let diag = missing_label_colon(&head);

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "missing colon for label");
    assert_eq!(diag.span.start, Position::new(4, 2));
    assert_eq!(diag.span.end, Position::new(4, 5));
    assert!(diag.notes[0].contains("`foo:`"));
}

#[test]
fn test_content_after_label_covers_range() {
    let first = Token::new(2, 4, "baz", Category::Unknown);
    let last = Token::new(2, 11, ":", Category::Operator);
    let diag = content_after_label(&first, &last);

    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.message, "unexpected content after label");
    assert_eq!(diag.span.start, Position::new(2, 4));
    assert_eq!(diag.span.end, Position::new(2, 12));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_diagnostic_display_format() {
    let head = Token::new(0, 0, "foo", Category::Unknown);
    let output = missing_label_colon(&head).to_string();

    assert!(output.starts_with("error [E1001]: missing colon for label"));
    assert!(output.contains("--> 1:1-1:4"));
    assert!(output.contains("= note: labels are declared as `foo:`"));
}
