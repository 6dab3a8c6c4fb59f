use super::*;
use asm_lexer::{lex_document, line_count};
use pretty_assertions::assert_eq;

fn texts<'a>(instruction: &Instruction<'a, '_>) -> Vec<&'a str> {
    instruction.tokens.iter().map(|t| t.text).collect()
}

#[test]
fn one_instruction_per_line() {
    let src = "mov eax, 5\n\nfoo:\n";
    let tokens = lex_document(src);
    let instructions = assemble(&tokens, line_count(src));

    assert_eq!(instructions.len(), 4);
    assert_eq!(texts(&instructions[0]), vec!["mov", "eax", "5"]);
    assert!(instructions[1].tokens.is_empty());
    assert_eq!(texts(&instructions[2]), vec!["foo", ":"]);
    assert!(instructions[3].tokens.is_empty());

    let lines: Vec<_> = instructions.iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![0, 1, 2, 3]);
}

#[test]
fn comments_are_excluded_from_body() {
    let src = "; header\nret ; done\n";
    let tokens = lex_document(src);
    let instructions = assemble(&tokens, line_count(src));

    assert!(instructions[0].tokens.is_empty());
    assert_eq!(texts(&instructions[1]), vec!["ret"]);
    // The comment is still in the document list.
    assert_eq!(tokens.len(), 3);
}

#[test]
fn first_index_points_into_document_list() {
    let src = "nop\n\nfoo bar\n";
    let tokens = lex_document(src);
    let instructions = assemble(&tokens, line_count(src));

    assert_eq!(instructions[0].first_index, 0);
    assert_eq!(instructions[1].first_index, 1);
    assert_eq!(instructions[2].first_index, 1);
    assert_eq!(tokens[instructions[2].first_index].text, "foo");
    assert_eq!(instructions[3].first_index, 3);
}

#[test]
fn head_is_first_token() {
    let src = "jmp loop_top";
    let tokens = lex_document(src);
    let instructions = assemble(&tokens, line_count(src));

    assert_eq!(instructions[0].head().map(|t| t.text), Some("jmp"));
    assert_eq!(instructions[0].tokens.len(), 2);
}

#[test]
fn empty_document_has_one_empty_instruction() {
    let instructions = assemble(&[], line_count(""));
    assert_eq!(instructions.len(), 1);
    assert!(instructions[0].tokens.is_empty());
}
