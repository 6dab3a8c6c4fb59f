//! Relative-delta encoding of tokens for the highlighting protocol.
//!
//! Each token becomes five integers:
//!
//! ```text
//! deltaLine, deltaColumn, length, categoryIndex, modifierBits
//! ```
//!
//! `deltaColumn` is relative to the previous token's column when both sit on
//! the same line, and absolute (relative to 0) after a line advance.

use asm_ir::Token;

/// Integers per encoded token.
pub const TOKEN_STRIDE: usize = 5;

/// Encode an ordered token list, one tuple per token.
///
/// The `(line, column)` ordering of `tokens` is assumed, not checked.
pub fn encode(tokens: &[Token<'_>]) -> Vec<u32> {
    let mut data = Vec::with_capacity(tokens.len() * TOKEN_STRIDE);
    let mut cur_line = 0;
    let mut cur_col = 0;

    for token in tokens {
        let delta_line = token.line - cur_line;
        if delta_line > 0 {
            cur_col = 0;
        }
        let delta_col = token.column - cur_col;

        data.extend_from_slice(&[
            delta_line,
            delta_col,
            token.len(),
            token.category.legend_index(),
            token.modifiers.bits(),
        ]);

        cur_line = token.line;
        cur_col = token.column;
    }

    data
}

/// A token position recovered from the encoded form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DecodedToken {
    pub line: u32,
    pub column: u32,
    pub length: u32,
    pub category: u32,
    pub modifiers: u32,
}

/// Replay an encoded stream back to absolute positions.
///
/// A trailing partial tuple (length not a multiple of [`TOKEN_STRIDE`]) is
/// ignored.
pub fn decode(data: &[u32]) -> Vec<DecodedToken> {
    let mut line = 0;
    let mut column = 0;

    data.chunks_exact(TOKEN_STRIDE)
        .map(|chunk| {
            if chunk[0] > 0 {
                line += chunk[0];
                column = 0;
            }
            column += chunk[1];
            DecodedToken {
                line,
                column,
                length: chunk[2],
                category: chunk[3],
                modifiers: chunk[4],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests;
