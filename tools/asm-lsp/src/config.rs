//! Client-supplied settings.
//!
//! Read once from `initializationOptions`; every key is optional.
//!
//! ```json
//! { "labelDiagnostics": true, "semanticTokensDelta": true }
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::ServerError;

#[derive(Clone, Copy, Eq, PartialEq, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// When false, diagnostic pulls get an empty report.
    pub label_diagnostics: bool,
    /// Whether `full.delta` is advertised for semantic tokens.
    pub semantic_tokens_delta: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            label_diagnostics: true,
            semantic_tokens_delta: true,
        }
    }
}

impl ServerConfig {
    /// Parse `initializationOptions`. Absent or `null` options give the
    /// defaults.
    pub fn from_initialization_options(options: Option<Value>) -> Result<Self, ServerError> {
        match options {
            None | Some(Value::Null) => Ok(ServerConfig::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }
}
