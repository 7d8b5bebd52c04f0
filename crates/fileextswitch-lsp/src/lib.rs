//! # fileextswitch-lsp
//!
//! Language Server Protocol host for fileextswitch.
//!
//! Editors without a native extension API (Neovim, Helix, Zed, ...) can bind a
//! key to `workspace/executeCommand` with the `fileextswitch` command:
//!
//! ```json
//! {
//!   "command": "fileextswitch",
//!   "arguments": [{ "extensions": [".spec.ts", ".ts"], "useOtherColumn": false }]
//! }
//! ```
//!
//! The server resolves the companion of the active document and asks the
//! client to open it with `window/showDocument`. Warnings, "no match" and I/O
//! errors are reported with `window/showMessage`.
//!
//! The server communicates over stdin/stdout.

mod backend;
mod deferred_host;
mod locale;

pub use backend::Backend;
pub use deferred_host::DeferredHost;

use tower_lsp::{LspService, Server};

/// Start the LSP server.
///
/// Runs until the client requests shutdown and exits.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn start_server() -> anyhow::Result<()> {
    locale::init_from_env();

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
    Ok(())
}
