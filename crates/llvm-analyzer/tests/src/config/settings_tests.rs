use serde_json::json;

use super::*;

#[test]
fn defaults_serve_llvm_documents() {
    let settings = ServerSettings::default();
    assert_eq!(settings.language_ids, vec!["llvm"]);
    assert!(settings.serves_language("llvm"));
    assert!(!settings.serves_language("c"));
    assert!(settings.symbols.scan_on_open);
    assert_eq!(settings.logging.level, LogLevel::Info);
}

#[test]
fn parses_namespaced_payload() {
    let payload = json!({
        "llvm-analyzer": {
            "languageIds": ["llvm", "llvm-ir"],
            "symbols": {
                "scanOnOpen": false
            },
            "logging": {
                "level": "debug"
            }
        }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings.language_ids, vec!["llvm", "llvm-ir"]);
    assert!(settings.serves_language("llvm-ir"));
    assert!(!settings.symbols.scan_on_open);
    assert_eq!(settings.logging.level, LogLevel::Debug);
    assert!(settings.logging.level.allows_debug());
}

#[test]
fn parses_direct_payload() {
    let payload = json!({
        "symbols": { "scanOnOpen": false },
        "logging": { "level": "error" }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert!(!settings.symbols.scan_on_open);
    assert_eq!(settings.logging.level, LogLevel::Error);
    assert!(!settings.logging.level.allows_info());
}

#[test]
fn normalizes_language_ids() {
    let payload = json!({ "languageIds": [" llvm ", "", "mlir", "llvm"] });
    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings.language_ids, vec!["llvm", "mlir"]);
}

#[test]
fn empty_language_ids_fall_back_to_default() {
    let payload = json!({ "languageIds": [] });
    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings.language_ids, vec![DEFAULT_LANGUAGE_ID]);
}

#[test]
fn invalid_fragments_are_ignored() {
    let payload = json!({
        "logging": { "level": "loud" },
        "unknownSection": { "x": 1 }
    });
    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings, ServerSettings::default());
}

#[test]
fn merge_keeps_unmentioned_values() {
    let base = ServerSettings::from_lsp_payload(Some(&json!({ "symbols": { "scanOnOpen": false } })));
    let merged = base.merged_with_payload(&json!({ "logging": { "level": "warn" } }));
    assert!(!merged.symbols.scan_on_open);
    assert_eq!(merged.logging.level, LogLevel::Warn);
}
