//! Analysis engine for assembly source.
//!
//! One pass over a document's full text:
//!
//! ```text
//! lex_document → assemble → labels::validate → LabelReport::apply → encode
//! ```
//!
//! The pass is synchronous, has no failure path, and is a pure function of
//! the text: analyzing the same text twice yields identical tokens and
//! diagnostics. Per-document state between passes lives in
//! [`DocumentAnalysisStore`].

pub mod delta;
pub mod encode;
pub mod instruction;
pub mod labels;
pub mod store;

use asm_diagnostic::Diagnostic;

pub use delta::{apply_edit, compute_edit, TokenEdit};
pub use encode::{decode, encode, DecodedToken, TOKEN_STRIDE};
pub use instruction::{assemble, Instruction};
pub use store::{DocumentAnalysisStore, Snapshot, TokensDelta};

/// Result of analyzing one document snapshot.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Analysis {
    /// Encoded semantic tokens for the whole document.
    pub tokens: Vec<u32>,
    /// Label diagnostics, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
    /// Declared label names, in line order.
    pub labels: Vec<String>,
}

/// Run the full pipeline over `source`.
pub fn analyze(source: &str) -> Analysis {
    let lines = asm_lexer::line_count(source);
    let mut tokens = asm_lexer::lex_document(source);

    let report = {
        let instructions = assemble(&tokens, lines);
        labels::validate(&instructions)
    };
    let labels = report.label_names(&tokens);
    let diagnostics = report.apply(&mut tokens);
    let encoded = encode(&tokens);

    tracing::debug!(
        lines,
        tokens = tokens.len(),
        encoded = encoded.len() / TOKEN_STRIDE,
        labels = labels.len(),
        diagnostics = diagnostics.len(),
        "analyzed document"
    );

    Analysis {
        tokens: encoded,
        diagnostics,
        labels,
    }
}
