#![allow(dead_code)]

use std::path::PathBuf;

use llvm_analyzer::Document;
use tower_lsp::lsp_types::{Position, Url};

pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative_path)
}

pub fn fixture_uri(relative_path: &str) -> Url {
    Url::from_file_path(fixture_path(relative_path)).expect("fixture path is valid file:// URI")
}

pub fn read_fixture(relative_path: &str) -> String {
    std::fs::read_to_string(fixture_path(relative_path)).expect("fixture must exist")
}

pub fn fixture_document(relative_path: &str) -> Document {
    Document::new(fixture_uri(relative_path), "llvm", read_fixture(relative_path), 1)
}

pub fn inline_document(text: &str) -> Document {
    Document::new(Url::parse("file:///inline.ll").expect("valid URI"), "llvm", text.to_string(), 1)
}

pub fn position_of(
    source: &str,
    needle: &str,
) -> Position {
    position_of_nth(source, needle, 0)
}

pub fn position_of_nth(
    source: &str,
    needle: &str,
    nth: usize,
) -> Position {
    assert!(!needle.is_empty(), "needle must not be empty");
    let mut from = 0usize;
    let mut current = 0usize;

    loop {
        let Some(idx) = source[from..].find(needle) else {
            panic!("needle not found: {needle}");
        };
        let absolute = from + idx;
        if current == nth {
            let before = &source[..absolute];
            let line = before.as_bytes().iter().filter(|&&b| b == b'\n').count() as u32;
            let col = before
                .rsplit_once('\n')
                .map(|(_, tail)| tail.encode_utf16().count() as u32)
                .unwrap_or_else(|| before.encode_utf16().count() as u32);
            return Position::new(line, col);
        }
        current += 1;
        from = absolute + needle.len();
    }
}
