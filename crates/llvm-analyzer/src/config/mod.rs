//! Server settings.
//!
//! Each category lives in its own file. [`ServerSettings`] aggregates them
//! and handles JSON deserialization from LSP initialization options and
//! `didChangeConfiguration` payloads.

pub(crate) mod logging;
pub(crate) mod symbols;

use std::collections::{HashMap, HashSet};

use logging::LoggingSettingsPatch;
pub use logging::{LogLevel, LoggingSettings};
use serde::Deserialize;
use serde_json::Value;
use symbols::SymbolSettingsPatch;
pub use symbols::SymbolSettings;

pub const SETTINGS_SECTION_KEY: &str = "llvm-analyzer";
pub const DEFAULT_LANGUAGE_ID: &str = "llvm";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Document language ids the symbol features are bound to.
    pub language_ids: Vec<String>,
    pub symbols: SymbolSettings,
    pub logging: LoggingSettings,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            language_ids: vec![DEFAULT_LANGUAGE_ID.to_string()],
            symbols: SymbolSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    /// Whether documents opened with `language_id` get outlines and navigation.
    pub fn serves_language(
        &self,
        language_id: &str,
    ) -> bool {
        self.language_ids.iter().any(|id| id == language_id)
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(v) = patch.language_ids {
            self.language_ids = v;
        }
        if let Some(p) = patch.symbols {
            self.symbols.apply_patch(p);
        }
        if let Some(p) = patch.logging {
            self.logging.apply_patch(p);
        }
    }

    fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.language_ids = self
            .language_ids
            .iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(id.clone()))
            .collect();
        if self.language_ids.is_empty() {
            self.language_ids.push(DEFAULT_LANGUAGE_ID.to_string());
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    language_ids: Option<Vec<String>>,
    symbols: Option<SymbolSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = Vec::new();
    candidates.push(payload.clone());
    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }
    candidates
}

#[cfg(test)]
#[path = "../../tests/src/config/settings_tests.rs"]
mod tests;
