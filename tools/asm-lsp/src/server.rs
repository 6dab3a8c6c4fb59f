// Assembly LSP Server implementation

use asm_analysis::{decode, DocumentAnalysisStore, TokensDelta};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};
use tracing::{debug, trace, warn};

use crate::capabilities::server_capabilities;
use crate::config::ServerConfig;
use crate::convert;
use crate::error::ServerError;

/// Assembly Language Server
pub struct AsmLanguageServer {
    client: Client,
    /// Latest full text of every open document
    documents: DashMap<Url, String>,
    /// Never held across an `.await`
    store: Mutex<DocumentAnalysisStore>,
    config: RwLock<ServerConfig>,
}

impl AsmLanguageServer {
    pub fn new(client: Client) -> Self {
        AsmLanguageServer {
            client,
            documents: DashMap::new(),
            store: Mutex::new(DocumentAnalysisStore::new()),
            config: RwLock::new(ServerConfig::default()),
        }
    }

    /// Copy of the current text of `uri`.
    fn text(&self, uri: &Url) -> std::result::Result<String, ServerError> {
        self.documents
            .get(uri)
            .map(|text| text.value().clone())
            .ok_or_else(|| ServerError::DocumentNotFound(uri.clone()))
    }

    /// Get completions
    fn get_completions(&self) -> Vec<CompletionItem> {
        vec![CompletionItem {
            label: "mov".to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            detail: Some("move data between operands".to_string()),
            ..Default::default()
        }]
    }
}

fn full_report(items: Vec<Diagnostic>) -> DocumentDiagnosticReportResult {
    DocumentDiagnosticReportResult::Report(DocumentDiagnosticReport::Full(
        RelatedFullDocumentDiagnosticReport {
            related_documents: None,
            full_document_diagnostic_report: FullDocumentDiagnosticReport {
                result_id: None,
                items,
            },
        },
    ))
}

#[tower_lsp::async_trait]
impl LanguageServer for AsmLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let config = ServerConfig::from_initialization_options(params.initialization_options)
            .unwrap_or_else(|err| {
                warn!(%err, "falling back to default configuration");
                ServerConfig::default()
            });
        *self.config.write() = config;

        Ok(InitializeResult {
            capabilities: server_capabilities(&config),
            server_info: Some(ServerInfo {
                name: "asm-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "Assembly language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        self.store.lock().open(uri.as_str());
        self.documents.insert(uri, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        // Full sync: the last change carries the whole document
        if let Some(change) = params.content_changes.into_iter().last() {
            self.store.lock().invalidate(uri.as_str());
            self.documents.insert(uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.store.lock().close(uri.as_str());
        self.documents.remove(&uri);
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = params.text_document.uri;
        let tokens = match self.text(&uri) {
            Ok(text) => {
                let mut store = self.store.lock();
                let snapshot = store.full(uri.as_str(), &text);
                trace!(%uri, tokens = ?decode(&snapshot.data), "full semantic tokens");
                convert::snapshot(snapshot)
            }
            Err(err) => {
                debug!(%err, "semantic tokens requested for unknown document");
                SemanticTokens::default()
            }
        };
        Ok(Some(SemanticTokensResult::Tokens(tokens)))
    }

    async fn semantic_tokens_full_delta(
        &self,
        params: SemanticTokensDeltaParams,
    ) -> Result<Option<SemanticTokensFullDeltaResult>> {
        let uri = params.text_document.uri;
        let text = match self.text(&uri) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, "semantic token delta requested for unknown document");
                return Ok(None);
            }
        };

        let outcome =
            self.store
                .lock()
                .delta(uri.as_str(), &text, &params.previous_result_id);
        let result = match outcome {
            TokensDelta::Edits { result_id, edits } => {
                SemanticTokensFullDeltaResult::TokensDelta(SemanticTokensDelta {
                    result_id: Some(result_id),
                    edits: edits.iter().map(convert::token_edit).collect(),
                })
            }
            TokensDelta::Full(snapshot) => {
                SemanticTokensFullDeltaResult::Tokens(convert::snapshot(&snapshot))
            }
        };
        Ok(Some(result))
    }

    async fn diagnostic(
        &self,
        params: DocumentDiagnosticParams,
    ) -> Result<DocumentDiagnosticReportResult> {
        let uri = params.text_document.uri;
        let text = match self.text(&uri) {
            Ok(text) => text,
            Err(err) => {
                debug!(%err, "diagnostics requested for unknown document");
                return Ok(full_report(Vec::new()));
            }
        };
        if !self.config.read().label_diagnostics {
            return Ok(full_report(Vec::new()));
        }

        let diagnostics = self.store.lock().take_diagnostics(uri.as_str(), &text);
        let items = diagnostics
            .iter()
            .map(|diag| convert::diagnostic(&uri, diag))
            .collect();
        Ok(full_report(items))
    }

    async fn completion(&self, _: CompletionParams) -> Result<Option<CompletionResponse>> {
        Ok(Some(CompletionResponse::Array(self.get_completions())))
    }

    async fn completion_resolve(&self, item: CompletionItem) -> Result<CompletionItem> {
        Ok(item)
    }
}
