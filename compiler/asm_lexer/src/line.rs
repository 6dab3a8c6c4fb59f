//! Single-line scanner built on logos.
//!
//! Rules, tried at each offset:
//!
//! 1. `;` starts a comment that runs to the end of the line.
//! 2. A run of ASCII digits is a number.
//! 3. An ASCII letter or `_` followed by letters, digits or `_` is an
//!    identifier, classified by [`crate::keywords::classify`].
//! 4. `[`, `]` and `:` are single-character operators.
//! 5. Anything else is skipped without producing a token.
//!
//! Skipping is normal operation, not an error: the scanner has no failure
//! state. Whitespace is a logos skip pattern; every other unmatched character
//! comes back from logos as `Err(())` and is dropped here.

use asm_ir::{utf16_len, Category, Token};
use logos::Logos;

use crate::keywords::classify;

/// Raw token from logos (before classification).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0C]+")]
enum RawToken {
    #[regex(r";[^\n]*")]
    Comment,

    #[regex(r"[0-9]+")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token("[")]
    #[token("]")]
    #[token(":")]
    Operator,
}

/// Converts byte offsets to UTF-16 columns.
///
/// Offsets must be queried in increasing order; the tracker walks forward
/// from the previous query so a whole line costs one pass.
struct ColumnTracker<'a> {
    text: &'a str,
    ascii: bool,
    byte: usize,
    column: u32,
}

impl<'a> ColumnTracker<'a> {
    fn new(text: &'a str) -> Self {
        ColumnTracker {
            text,
            ascii: text.is_ascii(),
            byte: 0,
            column: 0,
        }
    }

    fn column_at(&mut self, offset: usize) -> u32 {
        debug_assert!(offset >= self.byte, "column queries must move forward");
        if self.ascii {
            return u32::try_from(offset).unwrap_or(u32::MAX);
        }
        self.column += utf16_len(&self.text[self.byte..offset]);
        self.byte = offset;
        self.column
    }
}

/// Scan one line (without its terminator) into tokens.
///
/// `line` is stamped on every token. Identifier categories are provisional:
/// label validation may still promote an `Unknown` head to a label.
pub fn lex_line(line: u32, text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(text);
    let mut columns = ColumnTracker::new(text);

    while let Some(result) = lexer.next() {
        let Ok(raw) = result else {
            tracing::trace!(line, offset = lexer.span().start, "skipped unrecognized input");
            continue;
        };

        let slice = lexer.slice();
        let column = columns.column_at(lexer.span().start);
        let category = match raw {
            RawToken::Comment => Category::Comment,
            RawToken::Number => Category::Number,
            RawToken::Ident => classify(slice),
            RawToken::Operator => Category::Operator,
        };
        tokens.push(Token::new(line, column, slice, category));

        if raw == RawToken::Comment {
            break;
        }
    }

    tokens
}
