// Assembly Language Server Protocol implementation
//
// Provides IDE features:
// - Semantic highlighting (full and delta)
// - Label diagnostics (pull model)
// - Code completion (basic)

mod capabilities;
mod config;
mod convert;
mod error;
mod server;

use std::sync::Once;

use tower_lsp::{LspService, Server};

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "ASM_LSP_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber. Stdout carries the protocol, so nothing may
/// be logged there.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if a filter is set
        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::new(directives))
            .init();
    });
}

#[tokio::main]
async fn main() {
    init_tracing();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(server::AsmLanguageServer::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
