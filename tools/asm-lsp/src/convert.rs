//! Engine types to LSP wire types.

use asm_analysis::{Snapshot, TokenEdit, TOKEN_STRIDE};
use asm_diagnostic::Diagnostic;
use asm_ir::Span;
use tower_lsp::lsp_types as lsp;

use crate::capabilities::DIAGNOSTIC_SOURCE;

fn position(position: asm_ir::Position) -> lsp::Position {
    lsp::Position::new(position.line, position.column)
}

pub fn range(span: Span) -> lsp::Range {
    lsp::Range::new(position(span.start), position(span.end))
}

/// Each note becomes a related-information entry pointing back at the
/// diagnostic's own range.
pub fn diagnostic(uri: &lsp::Url, diag: &Diagnostic) -> lsp::Diagnostic {
    let range = range(diag.span);
    let related_information = (!diag.notes.is_empty()).then(|| {
        diag.notes
            .iter()
            .map(|note| lsp::DiagnosticRelatedInformation {
                location: lsp::Location::new(uri.clone(), range),
                message: note.clone(),
            })
            .collect()
    });

    lsp::Diagnostic {
        range,
        severity: Some(lsp::DiagnosticSeverity::ERROR),
        code: Some(lsp::NumberOrString::String(diag.code.as_str().to_string())),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message: diag.message.clone(),
        related_information,
        ..Default::default()
    }
}

/// Regroup a flat encoded stream into wire tokens.
pub fn semantic_tokens(data: &[u32]) -> Vec<lsp::SemanticToken> {
    data.chunks_exact(TOKEN_STRIDE)
        .map(|chunk| lsp::SemanticToken {
            delta_line: chunk[0],
            delta_start: chunk[1],
            length: chunk[2],
            token_type: chunk[3],
            token_modifiers_bitset: chunk[4],
        })
        .collect()
}

pub fn snapshot(snapshot: &Snapshot) -> lsp::SemanticTokens {
    lsp::SemanticTokens {
        result_id: Some(snapshot.result_id.clone()),
        data: semantic_tokens(&snapshot.data),
    }
}

/// `start` and `delete_count` stay in integers; the edit is token aligned so
/// `data` regroups without remainder.
pub fn token_edit(edit: &TokenEdit) -> lsp::SemanticTokensEdit {
    lsp::SemanticTokensEdit {
        start: u32::try_from(edit.start).unwrap_or(u32::MAX),
        delete_count: u32::try_from(edit.delete_count).unwrap_or(u32::MAX),
        data: (!edit.data.is_empty()).then(|| semantic_tokens(&edit.data)),
    }
}
