use std::sync::Arc;

use tracing::trace;

use crate::{
    document::TextLines,
    ide::navigation::{IdePosition, IdeRange, NavigationLink},
    symbols::{index::SymbolIndex, patterns},
};

/// Maps a `call`/`invoke` line to the indexed definition it names.
///
/// Only the cursor's line matters, not its column: a matching line resolves
/// to its single `@name` reference wherever the cursor sits.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    index: Arc<SymbolIndex>,
}

impl ReferenceResolver {
    pub fn new(index: Arc<SymbolIndex>) -> Self {
        Self {
            index,
        }
    }

    pub fn resolve<D: TextLines + ?Sized>(
        &self,
        document: &D,
        position: IdePosition,
    ) -> Option<NavigationLink> {
        let text = document.line_text(position.line as usize)?;
        let (kind, found) = patterns::match_reference(text)?;
        let (start, end) = found.name_columns();

        let Some(symbol) = self.index.get(found.name) else {
            trace!("[resolve] {kind:?} of {} on line {} has no known definition", found.name, position.line + 1);
            return None;
        };

        Some(NavigationLink {
            origin_range: IdeRange::on_line(position.line, start, end),
            target_uri: document.uri().clone(),
            target_range: symbol.full_range,
            target_selection_range: symbol.header_range,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/resolver_tests.rs"]
mod tests;
