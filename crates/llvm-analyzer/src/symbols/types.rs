use crate::ide::navigation::IdeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Function,
}

/// One discovered `define` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSymbol {
    /// The `@name` token exactly as written in the header, sigil included.
    pub function_name: String,
    /// First leading comment line, or `function_name` when there is none.
    pub display_name: String,
    pub kind: SymbolKind,
    /// Column 0 of the header line through the end of the closing `}` line.
    pub full_range: IdeRange,
    /// The `@name` token within the header line.
    pub header_range: IdeRange,
}
