use super::*;
use asm_ir::{Category, Modifiers};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn same_line_columns_are_relative() {
    let tokens = [
        Token::new(0, 0, "mov", Category::Keyword),
        Token::new(0, 4, "eax", Category::Variable),
        Token::new(0, 9, "5", Category::Number),
    ];
    assert_eq!(
        encode(&tokens),
        vec![
            0, 0, 3, 0, 0, //
            0, 4, 3, 2, 0, //
            0, 5, 1, 3, 0,
        ]
    );
}

#[test]
fn line_advance_resets_column() {
    let mut label = Token::new(2, 0, "foo", Category::FunctionLabel);
    label.modifiers = Modifiers::DECLARATION;
    let tokens = [
        Token::new(0, 8, "ret", Category::Keyword),
        label,
        Token::new(2, 3, ":", Category::Operator),
    ];
    assert_eq!(
        encode(&tokens),
        vec![
            0, 8, 3, 0, 0, //
            2, 0, 3, 1, 1, //
            0, 3, 1, 7, 0,
        ]
    );
}

#[test]
fn unknown_tokens_are_emitted_as_labels() {
    let tokens = [
        Token::new(0, 0, "jmp", Category::Keyword),
        Token::new(0, 4, "loop_top", Category::Unknown),
        Token::new(0, 13, "; c", Category::Comment),
    ];
    assert_eq!(
        encode(&tokens),
        vec![
            0, 0, 3, 0, 0, //
            0, 4, 8, 8, 0, //
            0, 9, 3, 4, 0,
        ]
    );
}

#[test]
fn empty_list_encodes_to_nothing() {
    assert!(encode(&[]).is_empty());
    assert!(decode(&[]).is_empty());
}

#[test]
fn decode_ignores_partial_tuple() {
    let decoded = decode(&[1, 2, 3, 0, 0, 9, 9]);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].line, 1);
    assert_eq!(decoded[0].column, 2);
}

/// Arbitrary ordered token layout: `(line gap, column gap, length, category)`.
fn token_layout() -> impl Strategy<Value = Vec<(u32, u32, usize, usize)>> {
    prop::collection::vec((0u32..3, 0u32..6, 1usize..8, 0usize..Category::LEGEND.len()), 0..40)
}

proptest! {
    #[test]
    fn decode_inverts_encode(layout in token_layout()) {
        let text = "x".repeat(8);
        let mut tokens = Vec::new();
        let (mut line, mut next_col) = (0u32, 0u32);
        for (line_gap, col_gap, len, cat) in layout {
            if line_gap > 0 {
                line += line_gap;
                next_col = 0;
            }
            let column = next_col + col_gap;
            tokens.push(Token::new(line, column, &text[..len], Category::LEGEND[cat]));
            next_col = column + len as u32;
        }

        let decoded = decode(&encode(&tokens));
        prop_assert_eq!(decoded.len(), tokens.len());
        for (d, t) in decoded.iter().zip(&tokens) {
            prop_assert_eq!((d.line, d.column, d.length), (t.line, t.column, t.len()));
            prop_assert_eq!(d.category, t.category.legend_index());
        }
    }
}
