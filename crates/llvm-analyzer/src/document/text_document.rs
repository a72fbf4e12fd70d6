use tower_lsp::lsp_types::*;

use crate::{document::TextLines, text_pos::byte_offset_of_utf16_column};

// ── Document ────────────────────────────────────────────────────────────────

/// Snapshot of a single open text document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document URI.
    pub uri: Url,
    /// Language identifier reported by the client on open (e.g. `llvm`).
    pub language_id: String,
    /// Full source text (always kept up-to-date).
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Pre-computed line start byte offsets (rebuilt on every mutation).
    line_offsets: Vec<usize>,
}

impl Document {
    pub fn new(
        uri: Url,
        language_id: impl Into<String>,
        text: String,
        version: i32,
    ) -> Self {
        let line_offsets = Self::compute_line_offsets(&text);
        Self {
            uri,
            language_id: language_id.into(),
            text,
            version,
            line_offsets,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    /// Convert an LSP `Position` (line/character, 0-based) to a byte offset.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        let line = pos.line as usize;
        let line_start = *self.line_offsets.get(line)?;
        let line_end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let line_text = &self.text[line_start..line_end];
        Some(line_start + byte_offset_of_utf16_column(line_text, pos.character))
    }

    // ── mutations ───────────────────────────────────────────────────────

    /// Replace the full content and bump version.
    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_offsets = Self::compute_line_offsets(&self.text);
    }

    /// Apply a list of incremental or full-content changes and bump version.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            if let Some(range) = change.range {
                if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end))
                    && start <= end
                {
                    self.text.replace_range(start..end, &change.text);
                    self.line_offsets = Self::compute_line_offsets(&self.text);
                }
            } else {
                self.text = change.text;
                self.line_offsets = Self::compute_line_offsets(&self.text);
            }
        }
        self.version = version;
    }

    // ── internal helpers ────────────────────────────────────────────────

    fn compute_line_offsets(text: &str) -> Vec<usize> {
        let mut offsets = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        offsets
    }
}

impl TextLines for Document {
    fn uri(&self) -> &Url {
        &self.uri
    }

    fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        let slice = &self.text[start..end];
        Some(slice.trim_end_matches('\n').trim_end_matches('\r'))
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
