//! Whole-document lexing.
//!
//! Lines are split on `\n`; a `\r` immediately before it belongs to the
//! terminator and is not part of the line. A document always has at least
//! one line, and a trailing `\n` opens a final empty line, matching how
//! editors number lines.

use asm_ir::Token;

use crate::line::lex_line;

/// Iterator over the lines of a document, terminators removed.
pub struct SourceLines<'src> {
    rest: Option<&'src str>,
}

impl<'src> SourceLines<'src> {
    pub fn new(source: &'src str) -> Self {
        SourceLines { rest: Some(source) }
    }
}

impl<'src> Iterator for SourceLines<'src> {
    type Item = &'src str;

    fn next(&mut self) -> Option<&'src str> {
        let rest = self.rest?;
        let line = match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(nl) => {
                self.rest = Some(&rest[nl + 1..]);
                &rest[..nl]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

/// Number of lines in `source` (newline count plus one).
pub fn line_count(source: &str) -> u32 {
    let newlines = memchr::memchr_iter(b'\n', source.as_bytes()).count();
    u32::try_from(newlines + 1).unwrap_or(u32::MAX)
}

/// Lex every line of `source` into one `(line, column)`-ordered token list.
pub fn lex_document(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    for (line, text) in (0u32..).zip(SourceLines::new(source)) {
        tokens.extend(lex_line(line, text));
    }
    tokens
}
