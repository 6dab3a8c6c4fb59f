//! Core diagnostic type.
//!
//! Every diagnostic the analysis reports is an error; label violations are
//! the only defects this layer detects.

use std::fmt;

use asm_ir::{Span, Token};

use crate::ErrorCode;

/// An error anchored to a token span.
///
/// `notes` are auxiliary messages that share the diagnostic's range; the
/// server turns each one into a related-information entry.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Source range, always derived from lexer tokens.
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error [{}]: {}\n  --> {}",
            self.code, self.message, self.span
        )?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

// Label diagnostics

/// A label candidate (`head`) that is not followed by `:`.
pub fn missing_label_colon(head: &Token<'_>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001, head.span())
        .with_message(ErrorCode::E1001.description())
        .with_note(format!("labels are declared as `{}:`", head.text))
}

/// Tokens from `first` through `last` trail a label on the same line.
pub fn content_after_label(first: &Token<'_>, last: &Token<'_>) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002, Span::covering(first, last))
        .with_message(ErrorCode::E1002.description())
        .with_note("label declarations must stand alone on their line")
}

#[cfg(test)]
mod tests;
