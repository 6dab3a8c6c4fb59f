//! Diagnostic types for structured error reporting.
//!
//! Diagnostics are values, never panics or `Err`s: a label-syntax violation
//! becomes a [`Diagnostic`] pushed onto a [`DiagnosticQueue`], and analysis
//! carries on with the next line.
//!
//! Every diagnostic range is a [`Span`](asm_ir::Span) built from tokens the
//! lexer produced, so there is no way to report a location that does not
//! correspond to real source text.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{content_after_label, missing_label_colon, Diagnostic};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
