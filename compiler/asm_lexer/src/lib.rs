//! Lexer for assembly source.
//!
//! Scans text line by line with logos and classifies identifiers against
//! fixed vocabularies. The output is a flat token list ordered by
//! `(line, column)`; nothing here can fail.

mod document;
pub mod keywords;
mod line;

pub use document::{lex_document, line_count, SourceLines};
pub use keywords::classify;
pub use line::lex_line;
