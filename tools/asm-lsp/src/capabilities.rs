//! Token legend and advertised server capabilities.

use asm_ir::{Category, Modifiers};
use tower_lsp::lsp_types::{
    CompletionOptions, DiagnosticOptions, DiagnosticServerCapabilities, SemanticTokenModifier,
    SemanticTokenType, SemanticTokensFullOptions, SemanticTokensLegend, SemanticTokensOptions,
    SemanticTokensServerCapabilities, ServerCapabilities, TextDocumentSyncCapability,
    TextDocumentSyncKind, WorkDoneProgressOptions,
};

use crate::config::ServerConfig;

/// Identifier of the pull-diagnostics provider, also used as diagnostic source.
pub const DIAGNOSTIC_SOURCE: &str = "asm";

/// Legend matching `Category::legend_index` and the modifier bit positions.
pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: Category::LEGEND
            .iter()
            .map(|category| category.legend_name())
            .map(SemanticTokenType::new)
            .collect(),
        token_modifiers: Modifiers::LEGEND
            .iter()
            .copied()
            .map(SemanticTokenModifier::new)
            .collect(),
    }
}

pub fn server_capabilities(config: &ServerConfig) -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
        semantic_tokens_provider: Some(SemanticTokensServerCapabilities::SemanticTokensOptions(
            SemanticTokensOptions {
                work_done_progress_options: WorkDoneProgressOptions::default(),
                legend: legend(),
                range: Some(false),
                full: Some(SemanticTokensFullOptions::Delta {
                    delta: Some(config.semantic_tokens_delta),
                }),
            },
        )),
        diagnostic_provider: Some(DiagnosticServerCapabilities::Options(DiagnosticOptions {
            identifier: Some(DIAGNOSTIC_SOURCE.to_string()),
            inter_file_dependencies: false,
            workspace_diagnostics: false,
            work_done_progress_options: WorkDoneProgressOptions::default(),
        })),
        completion_provider: Some(CompletionOptions {
            resolve_provider: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    }
}
