use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries the protocol.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("FILEEXTSWITCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    match std::env::args().nth(1).as_deref() {
        Some("--version" | "-V") => {
            println!("fileextswitch-lsp {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some("--help" | "-h") => {
            println!("Usage: fileextswitch-lsp");
            println!();
            println!("Serves the `fileextswitch` command over stdin/stdout.");
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    init_tracing();
    match fileextswitch_lsp::start_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fileextswitch-lsp: {e:#}");
            ExitCode::FAILURE
        }
    }
}
