use super::*;
use crate::document::Document;

const MODULE: &str = "\
; Entry point
define void @main() {
  call void @helper(i32 0)
  ret void
}

define void @helper(i32 %n) {
  ret void
}
";

fn doc(
    uri: &str,
    text: &str,
) -> Document {
    Document::new(Url::parse(uri).unwrap(), "llvm", text.to_string(), 1)
}

#[test]
fn document_symbols_populate_the_session_index() {
    let provider = SymbolProvider::new();
    let document = doc("file:///a.ll", MODULE);

    let symbols = provider.document_symbols(&document);
    let labels: Vec<&str> = symbols.iter().map(|s| s.display_name.as_str()).collect();
    assert_eq!(labels, vec!["Entry point", "@helper"]);
    assert_eq!(provider.session(&document.uri).index().len(), 2);
}

#[test]
fn definition_requires_a_prior_scan() {
    let provider = SymbolProvider::new();
    let document = doc("file:///a.ll", MODULE);

    assert!(provider.definition(&document, IdePosition::new(2, 5)).is_none());
    assert!(!provider.has_session(&document.uri));

    provider.document_symbols(&document);
    let link = provider.definition(&document, IdePosition::new(2, 5)).unwrap();
    assert_eq!(link.target_selection_range.start.line, 6);
}

#[test]
fn sessions_are_isolated_per_document() {
    let provider = SymbolProvider::new();
    let defines = doc("file:///defines.ll", MODULE);
    let calls = doc("file:///calls.ll", "define void @other() {\n  call void @helper(i32 1)\n}\n");

    provider.document_symbols(&defines);
    provider.document_symbols(&calls);

    assert!(provider.definition(&calls, IdePosition::new(1, 0)).is_none());
}

#[test]
fn removing_a_file_discards_its_index() {
    let provider = SymbolProvider::new();
    let document = doc("file:///a.ll", MODULE);
    provider.document_symbols(&document);
    assert!(provider.has_session(&document.uri));

    provider.remove_file(&document.uri);
    assert!(!provider.has_session(&document.uri));
    assert!(provider.definition(&document, IdePosition::new(2, 5)).is_none());
}
