use tower_lsp::lsp_types::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdePosition {
    pub line: u32,
    pub character: u32,
}

impl IdePosition {
    pub const fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdeRange {
    pub start: IdePosition,
    pub end: IdePosition,
}

impl IdeRange {
    pub const fn new(
        start: IdePosition,
        end: IdePosition,
    ) -> Self {
        Self {
            start,
            end,
        }
    }

    /// Range confined to one line, between two UTF-16 columns.
    pub const fn on_line(
        line: u32,
        start_character: u32,
        end_character: u32,
    ) -> Self {
        Self::new(IdePosition::new(line, start_character), IdePosition::new(line, end_character))
    }
}

/// Result of resolving a reference: where the jump starts and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLink {
    /// The `@name` token on the calling line.
    pub origin_range: IdeRange,
    /// Document holding the definition (always the requesting document).
    pub target_uri: Url,
    /// Whole definition, header line through closing brace.
    pub target_range: IdeRange,
    /// The `@name` token in the definition header.
    pub target_selection_range: IdeRange,
}
