use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolved visibility and enablement of one field after rule application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub hidden: bool,
    pub disabled: bool,
}

impl FieldState {
    #[must_use]
    pub fn visible(self) -> bool {
        !self.hidden
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        !self.disabled
    }
}

/// Per-field resolved state for every field in a schema, keyed by field id.
pub type FieldStateMap = BTreeMap<String, FieldState>;
