//! Shared value types for the assembly analysis pipeline.
//!
//! Everything here is a plain value: tokens borrow their text from the
//! document source, spans are built from tokens, and nothing carries
//! behavior beyond small accessors.

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{utf16_len, Category, Modifiers, Token};
