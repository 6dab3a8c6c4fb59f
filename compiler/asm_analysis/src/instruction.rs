//! Line assembly: one [`Instruction`] per source line.
//!
//! An instruction is a borrowed view over the document's token list, not a
//! copy. A comment always runs to the end of its line, so removing it leaves
//! a contiguous sub-slice and the view stays a plain `&[Token]`.

use asm_ir::{Category, Token};

/// The non-comment tokens of one source line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction<'a, 'src> {
    /// 0-based source line.
    pub line: u32,
    /// Index of `tokens[0]` in the document token list. For an empty
    /// instruction this is where its first token would have been.
    pub first_index: usize,
    pub tokens: &'a [Token<'src>],
}

impl<'a, 'src> Instruction<'a, 'src> {
    pub fn head(&self) -> Option<&'a Token<'src>> {
        self.tokens.first()
    }
}

/// Partition `tokens` into exactly `line_count` instructions, in line order.
///
/// Blank and comment-only lines yield empty instructions; no line is dropped.
/// `tokens` must be ordered by `(line, column)` as the lexer produces it.
pub fn assemble<'a, 'src>(tokens: &'a [Token<'src>], line_count: u32) -> Vec<Instruction<'a, 'src>> {
    let mut instructions = Vec::with_capacity(line_count as usize);
    let mut index = 0;

    for line in 0..line_count {
        let start = index;
        while index < tokens.len() && tokens[index].line == line {
            index += 1;
        }

        let mut body = &tokens[start..index];
        if let Some((last, rest)) = body.split_last() {
            if last.category == Category::Comment {
                body = rest;
            }
        }
        debug_assert!(
            body.iter().all(|t| t.category != Category::Comment),
            "comment before end of line {line}"
        );

        instructions.push(Instruction {
            line,
            first_index: start,
            tokens: body,
        });
    }

    debug_assert_eq!(index, tokens.len(), "tokens past the last line");
    instructions
}

#[cfg(test)]
mod tests;
