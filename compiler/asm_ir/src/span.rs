//! Line/column positions and token-derived spans.

use std::fmt;

use crate::Token;

/// A 0-based `(line, column)` position; columns are UTF-16 code units.
///
/// Ordering is lexicographic: line first, then column.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    /// Renders 1-based, the way editors show positions to people.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Half-open range `[start, end)` between two positions.
///
/// Spans are only ever built from tokens, so every diagnostic range points
/// at text the lexer actually produced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span from the start of `first` to the end of `last`.
    pub fn covering(first: &Token<'_>, last: &Token<'_>) -> Self {
        debug_assert!(
            first.position() <= last.position(),
            "span tokens out of order"
        );
        Span {
            start: first.position(),
            end: last.end_position(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
