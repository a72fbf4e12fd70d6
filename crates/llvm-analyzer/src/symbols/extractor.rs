use std::sync::Arc;

use tracing::debug;

use crate::{
    document::TextLines,
    ide::navigation::{IdePosition, IdeRange},
    symbols::{
        index::SymbolIndex,
        patterns,
        types::{FunctionSymbol, SymbolKind},
    },
};

/// Leading comment emitted by clang above every function; never a useful label.
const FUNCTION_ATTRS_PREFIX: &str = "Function Attrs";
const COMMENT_MARKER: char = ';';
const CLOSING_BRACE: &str = "}";

/// Header line seen, closing brace not yet found.
struct OpenHeader {
    line: u32,
    name: String,
    name_range: IdeRange,
}

/// Single forward pass over a document's lines that records every
/// `define ... {` / `}` pair into the shared index.
///
/// A body ends at the first line whose trimmed text is exactly `}`; nested
/// braces are not tracked.
#[derive(Debug, Clone)]
pub struct SymbolExtractor {
    index: Arc<SymbolIndex>,
}

impl SymbolExtractor {
    pub fn new(index: Arc<SymbolIndex>) -> Self {
        Self {
            index,
        }
    }

    pub fn index(&self) -> &SymbolIndex {
        &self.index
    }

    /// Scan `document` and return the whole index in discovery order.
    pub fn extract<D: TextLines + ?Sized>(
        &self,
        document: &D,
    ) -> Vec<FunctionSymbol> {
        let mut comments: Vec<String> = Vec::new();
        let mut open_header: Option<OpenHeader> = None;
        let mut closed = 0usize;

        for line_idx in 0..document.line_count() {
            let Some(text) = document.line_text(line_idx) else {
                continue;
            };

            if text.trim() == CLOSING_BRACE
                && let Some(header) = open_header.take()
            {
                let end = document.line_range(line_idx).map(|range| range.end).unwrap_or_default();
                let display_name = comments
                    .first()
                    .filter(|comment| !comment.starts_with(FUNCTION_ATTRS_PREFIX))
                    .cloned()
                    .unwrap_or_else(|| header.name.clone());
                self.index.insert(FunctionSymbol {
                    full_range: IdeRange::new(IdePosition::new(header.line, 0), end),
                    header_range: header.name_range,
                    function_name: header.name,
                    display_name,
                    kind: SymbolKind::Function,
                });
                closed += 1;
                continue;
            }

            if let Some(found) = patterns::match_define(text) {
                let (start, end) = found.name_columns();
                let line = line_idx as u32;
                open_header = Some(OpenHeader {
                    line,
                    name: found.name.to_string(),
                    name_range: IdeRange::on_line(line, start, end),
                });
                continue;
            }

            if open_header.is_none() {
                match text.strip_prefix(COMMENT_MARKER) {
                    Some(comment) => comments.push(comment.trim().to_string()),
                    None => comments.clear(),
                }
            }
        }

        if let Some(header) = open_header {
            debug!(
                "[symbols] {} at line {} has no closing brace; not indexed",
                header.name,
                header.line + 1,
            );
        }

        let symbols = self.index.symbols();
        debug!("[symbols] scanned {} lines: {closed} function(s) closed, {} indexed", document.line_count(), symbols.len());
        symbols
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/extractor_tests.rs"]
mod tests;
