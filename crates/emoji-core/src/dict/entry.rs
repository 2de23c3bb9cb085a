use serde::{Deserialize, Serialize};

/// One `(keyword, value)` pair. `keyword` is what the user types after the
/// sentinel, `value` is what gets inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub keyword: String,
    pub value: String,
}

impl SymbolEntry {
    pub fn new(keyword: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            value: value.into(),
        }
    }
}
