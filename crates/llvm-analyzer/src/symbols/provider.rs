use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::{
    document::TextLines,
    ide::navigation::{IdePosition, NavigationLink},
    symbols::{session::SymbolSession, types::FunctionSymbol},
};

/// Per-document symbol sessions for the language server.
///
/// Each open document gets its own [`SymbolSession`], created on first use
/// and dropped when the document closes.
#[derive(Debug, Default)]
pub struct SymbolProvider {
    sessions: DashMap<Url, Arc<SymbolSession>>,
}

impl SymbolProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for `uri`, created empty if the document has none yet.
    pub fn session(
        &self,
        uri: &Url,
    ) -> Arc<SymbolSession> {
        self.sessions.entry(uri.clone()).or_default().value().clone()
    }

    /// Run the extractor over `document`, returning the outline.
    pub fn document_symbols<D: TextLines + ?Sized>(
        &self,
        document: &D,
    ) -> Vec<FunctionSymbol> {
        self.session(document.uri()).extract(document)
    }

    /// Resolve the reference on `position`'s line against the document's index.
    ///
    /// A document that was never scanned resolves nothing.
    pub fn definition<D: TextLines + ?Sized>(
        &self,
        document: &D,
        position: IdePosition,
    ) -> Option<NavigationLink> {
        let session = self.sessions.get(document.uri()).map(|entry| Arc::clone(entry.value()));
        let Some(session) = session else {
            debug!("[definition] {} has not been scanned yet", document.uri());
            return None;
        };
        session.resolve(document, position)
    }

    /// Discard the session (and its index) for a closed document.
    pub fn remove_file(
        &self,
        uri: &Url,
    ) {
        self.sessions.remove(uri);
    }

    pub fn has_session(
        &self,
        uri: &Url,
    ) -> bool {
        self.sessions.contains_key(uri)
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/provider_tests.rs"]
mod tests;
