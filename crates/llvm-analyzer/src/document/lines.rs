use tower_lsp::lsp_types::Url;

use crate::{
    ide::navigation::{IdePosition, IdeRange},
    text_pos::utf16_len,
};

/// Read-only, line-addressable view of a document.
///
/// This is the only surface the symbol scanner sees: it never mutates the
/// document and never needs more than one line at a time.
pub trait TextLines {
    /// Identity of the document, used as the target of navigation links.
    fn uri(&self) -> &Url;

    /// Number of lines, counting a trailing empty line after a final newline.
    fn line_count(&self) -> usize;

    /// Text of a 0-based line without its line terminator.
    fn line_text(
        &self,
        line: usize,
    ) -> Option<&str>;

    /// Span of a whole line, from column 0 to the end of its text.
    fn line_range(
        &self,
        line: usize,
    ) -> Option<IdeRange> {
        let text = self.line_text(line)?;
        let line = line as u32;
        Some(IdeRange::new(IdePosition::new(line, 0), IdePosition::new(line, utf16_len(text))))
    }
}
