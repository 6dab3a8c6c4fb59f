//! Failures surfaced by request handlers.

use tower_lsp::lsp_types::Url;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// A request named a document that was never opened, or was closed.
    #[error("document not found: {0}")]
    DocumentNotFound(Url),

    /// `initializationOptions` did not match [`ServerConfig`](crate::config::ServerConfig).
    #[error("invalid initialization options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
