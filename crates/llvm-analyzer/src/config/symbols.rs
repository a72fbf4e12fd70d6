use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSettings {
    /// Scan documents as soon as they open, so go-to-definition works before
    /// the outline is first requested.
    pub scan_on_open: bool,
}

impl Default for SymbolSettings {
    fn default() -> Self {
        Self {
            scan_on_open: true,
        }
    }
}

impl SymbolSettings {
    pub(crate) fn apply_patch(
        &mut self,
        patch: SymbolSettingsPatch,
    ) {
        if let Some(v) = patch.scan_on_open {
            self.scan_on_open = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SymbolSettingsPatch {
    pub(crate) scan_on_open: Option<bool>,
    #[serde(flatten)]
    pub(crate) _extra: HashMap<String, Value>,
}
