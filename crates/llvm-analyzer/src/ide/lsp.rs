use tower_lsp::lsp_types::{DocumentSymbol, LocationLink, Position, Range, SymbolKind as LspSymbolKind};

use crate::{
    ide::navigation::{IdePosition, IdeRange, NavigationLink},
    symbols::{FunctionSymbol, SymbolKind},
};

pub fn lsp_position_to_ide(position: Position) -> IdePosition {
    IdePosition::new(position.line, position.character)
}

pub fn ide_position_to_lsp(position: IdePosition) -> Position {
    Position::new(position.line, position.character)
}

pub fn ide_range_to_lsp(range: IdeRange) -> Range {
    Range::new(ide_position_to_lsp(range.start), ide_position_to_lsp(range.end))
}

pub fn navigation_link_to_lsp(link: NavigationLink) -> LocationLink {
    LocationLink {
        origin_selection_range: Some(ide_range_to_lsp(link.origin_range)),
        target_uri: link.target_uri,
        target_range: ide_range_to_lsp(link.target_range),
        target_selection_range: ide_range_to_lsp(link.target_selection_range),
    }
}

pub fn symbol_kind_to_lsp(kind: SymbolKind) -> LspSymbolKind {
    match kind {
        SymbolKind::Function => LspSymbolKind::FUNCTION,
    }
}

/// Outline entry: labelled with the display name, detailed with the raw `@name`.
///
/// Clients reject empty symbol names, so a blank display name (from a bare `;`
/// comment line) is rendered as the function name instead.
pub fn function_symbol_to_lsp(symbol: FunctionSymbol) -> DocumentSymbol {
    let name = if symbol.display_name.trim().is_empty() {
        symbol.function_name.clone()
    } else {
        symbol.display_name
    };
    DocumentSymbol {
        name,
        detail: Some(symbol.function_name),
        kind: symbol_kind_to_lsp(symbol.kind),
        tags: None,
        #[allow(deprecated)]
        deprecated: None,
        range: ide_range_to_lsp(symbol.full_range),
        selection_range: ide_range_to_lsp(symbol.header_range),
        children: None,
    }
}
