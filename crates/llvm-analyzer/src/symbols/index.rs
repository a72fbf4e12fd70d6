use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::symbols::types::FunctionSymbol;

/// Function name → symbol, in order of first discovery.
///
/// Inserting an existing name replaces the symbol but keeps its original
/// position. Scans never clear the index.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    map: RwLock<IndexMap<String, FunctionSymbol>>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry keyed by `symbol.function_name`.
    ///
    /// Returns the replaced symbol, if any.
    pub fn insert(
        &self,
        symbol: FunctionSymbol,
    ) -> Option<FunctionSymbol> {
        self.map.write().insert(symbol.function_name.clone(), symbol)
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<FunctionSymbol> {
        self.map.read().get(name).cloned()
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.map.read().contains_key(name)
    }

    /// All symbols, in insertion order.
    pub fn symbols(&self) -> Vec<FunctionSymbol> {
        self.map.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/index_tests.rs"]
mod tests;
