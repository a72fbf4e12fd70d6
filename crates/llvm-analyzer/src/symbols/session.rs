use std::sync::Arc;

use crate::{
    document::TextLines,
    ide::navigation::{IdePosition, NavigationLink},
    symbols::{extractor::SymbolExtractor, index::SymbolIndex, resolver::ReferenceResolver, types::FunctionSymbol},
};

/// One scanner instance: an index plus the extractor that fills it and the
/// resolver that reads it.
///
/// The index lives as long as the session and is never reset, so rescans
/// overwrite entries by name rather than starting over.
#[derive(Debug)]
pub struct SymbolSession {
    index: Arc<SymbolIndex>,
    extractor: SymbolExtractor,
    resolver: ReferenceResolver,
}

impl Default for SymbolSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSession {
    pub fn new() -> Self {
        let index = Arc::new(SymbolIndex::new());
        Self {
            extractor: SymbolExtractor::new(Arc::clone(&index)),
            resolver: ReferenceResolver::new(Arc::clone(&index)),
            index,
        }
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    pub fn extract<D: TextLines + ?Sized>(
        &self,
        document: &D,
    ) -> Vec<FunctionSymbol> {
        self.extractor.extract(document)
    }

    pub fn resolve<D: TextLines + ?Sized>(
        &self,
        document: &D,
        position: IdePosition,
    ) -> Option<NavigationLink> {
        self.resolver.resolve(document, position)
    }
}
