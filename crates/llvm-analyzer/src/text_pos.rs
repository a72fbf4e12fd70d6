//! UTF-16 column helpers.
//!
//! LSP columns count UTF-16 code units, while `regex` captures and `str`
//! slicing work in UTF-8 bytes. Everything the symbol scanner reports goes
//! through these helpers.

/// Number of UTF-16 code units needed to encode `text`.
pub fn utf16_len(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// UTF-16 column of a byte offset inside a single line.
///
/// Offsets past the end of the line clamp to the line length.
pub fn utf16_column_of_byte_offset(
    line: &str,
    byte_offset: usize,
) -> u32 {
    let mut end = byte_offset.min(line.len());
    while !line.is_char_boundary(end) {
        end -= 1;
    }
    utf16_len(&line[..end])
}

/// Byte offset of a UTF-16 column inside a single line.
///
/// Columns past the end of the line clamp to `line.len()`; a column that
/// lands in the middle of a surrogate pair rounds up to the next character.
pub fn byte_offset_of_utf16_column(
    line: &str,
    column: u32,
) -> usize {
    let mut utf16_offset = 0u32;
    for (byte_idx, ch) in line.char_indices() {
        if utf16_offset >= column {
            return byte_idx;
        }
        utf16_offset += ch.len_utf16() as u32;
    }
    line.len()
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
