use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tower_lsp::{LanguageServer, jsonrpc::Result, lsp_types::*};
use tracing::{debug, info, warn};

use crate::{
    config::ServerSettings,
    document::Document,
    ide::lsp::{function_symbol_to_lsp, lsp_position_to_ide, navigation_link_to_lsp},
    server::state::LlvmLanguageServer,
};

const CLIENT_NOTIFICATION_PREFIX: &str = "llvm-analyzer:";

#[tower_lsp::async_trait]
impl LanguageServer for LlvmLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing llvm-analyzer...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        info!("Serving language ids: {}", initial_settings.language_ids.join(", "));
        self.apply_settings(initial_settings).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                definition_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "llvm-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        info!("llvm-analyzer initialized");
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        self.apply_settings(merged).await;
        info!("Applied updated llvm-analyzer settings");
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down llvm-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let item = params.text_document;
        let uri = item.uri;
        let filename = short_name(&uri);
        let settings = self.settings_snapshot().await;

        info!("Opened {filename} ({}, v{}, {} bytes)", item.language_id, item.version, item.text.len());
        self.document_store.open(uri.clone(), item.language_id, item.text, item.version);

        if !settings.symbols.scan_on_open {
            return;
        }
        let Some(document) = self.served_document(&uri, &settings) else {
            return;
        };

        let symbols = self.symbol_provider.document_symbols(&document);
        if settings.logging.level.allows_info() {
            self.log_to_client(format!("Indexed {} function(s) in {filename}", symbols.len())).await;
        }
    }

    /// Edits only update the stored text; symbols are rescanned on the next
    /// outline request.
    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;
        if !self.document_store.apply_changes(&uri, params.content_changes, version) {
            warn!("Change for unopened document {}", short_name(&uri));
            return;
        }
        debug!("Changed {} (v{version})", short_name(&uri));
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        debug!("Closed {}", short_name(&uri));
        self.document_store.close(&uri);
        self.symbol_provider.remove_file(&uri);
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;
        let settings = self.settings_snapshot().await;
        let Some(document) = self.served_document(&uri, &settings) else {
            return Ok(None);
        };

        let start = std::time::Instant::now();
        let symbols = self.symbol_provider.document_symbols(&document);
        debug!("document-symbols {} → {} function(s) ({:?})", short_name(&uri), symbols.len(), start.elapsed());

        let symbols = symbols.into_iter().map(function_symbol_to_lsp).collect();
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let settings = self.settings_snapshot().await;
        let Some(document) = self.served_document(&uri, &settings) else {
            return Ok(None);
        };

        let filename = short_name(&uri);
        let link = self.symbol_provider.definition(&document, lsp_position_to_ide(position));
        match &link {
            Some(link) => debug!(
                "goto-def {filename}:{}:{} → line {}",
                position.line + 1,
                position.character + 1,
                link.target_selection_range.start.line + 1,
            ),
            None => debug!("goto-def {filename}:{}:{} → none", position.line + 1, position.character + 1),
        }

        Ok(link.map(|link| GotoDefinitionResponse::Link(vec![navigation_link_to_lsp(link)])))
    }
}

impl LlvmLanguageServer {
    /// The open document at `uri`, if its language id is one the server serves.
    fn served_document(
        &self,
        uri: &Url,
        settings: &ServerSettings,
    ) -> Option<Document> {
        let document = self.document_store.get(uri)?;
        if !settings.serves_language(&document.language_id) {
            debug!("Skipping {} with language id '{}'", short_name(uri), document.language_id);
            return None;
        }
        Some(document)
    }

    async fn log_to_client(
        &self,
        message: String,
    ) {
        let result = AssertUnwindSafe(
            self.client.log_message(MessageType::INFO, prefixed_client_message(message)),
        )
        .catch_unwind()
        .await;
        if result.is_err() {
            warn!("log_message panicked (client may have disconnected)");
        }
    }
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
