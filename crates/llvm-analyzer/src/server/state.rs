use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::Client;

use crate::{config::ServerSettings, document::DocumentStore, symbols::SymbolProvider};

/// The llvm-analyzer backend that implements the Language Server Protocol.
pub struct LlvmLanguageServer {
    /// The LSP client handle, used to send log messages back.
    pub(crate) client: Client,

    /// Thread-safe store of all open documents.
    pub(crate) document_store: Arc<DocumentStore>,

    /// Per-document symbol sessions backing outlines and go-to-definition.
    pub(crate) symbol_provider: Arc<SymbolProvider>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl LlvmLanguageServer {
    /// Create a new `LlvmLanguageServer` wired to the given LSP client.
    ///
    /// `_log_messages` is accepted for CLI compatibility but message-level
    /// logging is controlled entirely through the `tracing` subscriber.
    pub fn new(
        client: Client,
        _log_messages: bool,
    ) -> Self {
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            symbol_provider: Arc::new(SymbolProvider::new()),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        *self.settings.write().await = settings;
    }
}
