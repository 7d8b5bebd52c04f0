//! LSP backend for fileextswitch.
//!
//! Tracks the active document through open/close notifications and serves the
//! `fileextswitch` command through `workspace/executeCommand`.

mod events;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use fileextswitch_core::{
    CommandRegistry, HostEffect, Registration, SwitchOutcome, ViewColumn, activate, deactivate,
    switch_to_companion,
};
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use crate::deferred_host::DeferredHost;

/// LSP backend serving the companion switch command.
pub struct Backend {
    client: Client,
    registry: Arc<CommandRegistry>,
    registration: Mutex<Option<Registration>>,
    /// Most recently opened document, used when the command carries no `uri`
    active_document: RwLock<Option<Url>>,
}

impl Backend {
    /// Create a new backend instance with the given client connection.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            registry: CommandRegistry::new(),
            registration: Mutex::new(None),
            active_document: RwLock::new(None),
        }
    }

    /// Registers the command unless a previous `initialize` already did.
    fn ensure_registered(&self) {
        let mut slot = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_none() {
            match activate(&self.registry) {
                Ok(registration) => *slot = Some(registration),
                Err(e) => tracing::warn!(error = %e, "command registration failed"),
            }
        }
    }

    fn release_registration(&self) {
        let registration = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(registration) = registration {
            deactivate(registration);
        }
    }

    /// Active file for a command payload: an explicit `uri` argument, else the
    /// last opened document.
    async fn active_path(&self, payload: &Value) -> Option<PathBuf> {
        let explicit = payload
            .get("uri")
            .and_then(Value::as_str)
            .and_then(|uri| Url::parse(uri).ok());
        let uri = match explicit {
            Some(uri) => uri,
            None => self.active_document.read().await.clone()?,
        };
        uri.to_file_path().ok()
    }

    /// Run the switch on a blocking thread and replay its effects to the client.
    async fn run_switch(&self, payload: Value) -> Option<Value> {
        let active = self.active_path(&payload).await;
        let column = payload
            .get("activeColumn")
            .and_then(Value::as_u64)
            .and_then(|c| u32::try_from(c).ok())
            .and_then(ViewColumn::new);

        let result = tokio::task::spawn_blocking(move || {
            let host = DeferredHost::new(active, column);
            let outcome = switch_to_companion(&host, &payload);
            (outcome, host.into_effects())
        })
        .await;

        let (outcome, effects) = match result {
            Ok(done) => done,
            Err(e) => {
                self.client
                    .show_message(MessageType::ERROR, format!("Internal error: {e}"))
                    .await;
                return None;
            }
        };

        for effect in effects {
            self.apply(effect).await;
        }

        match outcome {
            SwitchOutcome::Opened { path, column } => {
                let uri = Url::from_file_path(&path).ok()?;
                Some(json!({ "uri": uri, "column": column }))
            }
            SwitchOutcome::NoActiveFile => {
                self.client
                    .log_message(MessageType::LOG, "fileextswitch: no active document")
                    .await;
                None
            }
            SwitchOutcome::NoMatch | SwitchOutcome::Failed(_) => None,
        }
    }

    async fn apply(&self, effect: HostEffect) {
        match effect {
            HostEffect::Warning(message) => {
                self.client.show_message(MessageType::WARNING, message).await
            }
            HostEffect::Info(message) => self.client.show_message(MessageType::INFO, message).await,
            HostEffect::Error(message) => {
                self.client.show_message(MessageType::ERROR, message).await
            }
            HostEffect::Open { path, column } => self.open_document(path, column).await,
        }
    }

    async fn open_document(&self, path: PathBuf, column: ViewColumn) {
        let Ok(uri) = Url::from_file_path(&path) else {
            self.client
                .log_message(
                    MessageType::WARNING,
                    format!("Cannot build a URI for {}", path.display()),
                )
                .await;
            return;
        };

        // showDocument has no notion of columns; the client decides placement.
        self.client
            .log_message(
                MessageType::LOG,
                format!("fileextswitch: opening {uri} (column {column})"),
            )
            .await;

        let params = ShowDocumentParams {
            uri: uri.clone(),
            external: Some(false),
            take_focus: Some(true),
            selection: None,
        };
        match self.client.show_document(params).await {
            Ok(true) => {}
            Ok(false) => {
                self.client
                    .log_message(MessageType::WARNING, format!("Client declined to open {uri}"))
                    .await;
            }
            Err(e) => {
                self.client
                    .log_message(MessageType::WARNING, format!("showDocument failed: {e}"))
                    .await;
            }
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(locale) = params
            .initialization_options
            .as_ref()
            .and_then(|options| options.get("locale"))
            .and_then(Value::as_str)
        {
            crate::locale::init_from_client(locale);
        }

        self.ensure_registered();

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::NONE),
                        ..Default::default()
                    },
                )),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: self.registry.names(),
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "fileextswitch-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "fileextswitch-lsp initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        self.release_registration();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.handle_did_open(params).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.handle_did_close(params).await;
    }

    async fn execute_command(&self, params: ExecuteCommandParams) -> Result<Option<Value>> {
        if !self.registry.is_registered(&params.command) {
            self.client
                .log_message(
                    MessageType::WARNING,
                    format!("Unknown command: {}", params.command),
                )
                .await;
            return Ok(None);
        }

        let payload = params.arguments.into_iter().next().unwrap_or(Value::Null);
        Ok(self.run_switch(payload).await)
    }
}
