use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{DictError, Dictionary, SymbolEntry};

/// Built-in emoji set, `keyword<TAB>value` per line.
pub const DEFAULT_EMOJI_TSV: &str = include_str!("default_emoji.tsv");

/// Immutable, ordered symbol list.
#[derive(Debug, Clone, Default)]
pub struct SymbolDictionary {
    entries: Vec<SymbolEntry>,
}

#[derive(Deserialize)]
struct TomlSymbols {
    #[serde(default)]
    symbol: Vec<SymbolEntry>,
}

impl SymbolDictionary {
    /// Build from `(keyword, value)` entries, keeping their order.
    /// Entries with an empty keyword can never match and are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SymbolEntry>,
    {
        let mut dropped = 0usize;
        let entries: Vec<SymbolEntry> = entries
            .into_iter()
            .filter(|e| {
                let keep = !e.keyword.is_empty();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        if dropped > 0 {
            debug!(dropped, "skipped symbol entries with empty keyword");
        }
        Self { entries }
    }

    /// Parse TSV: `keyword<TAB>value`, `#` comment lines and blank lines skipped.
    ///
    /// The keyword is trimmed; the value is kept verbatim apart from the line
    /// terminator so that values may carry meaningful spaces.
    pub fn from_tsv_str(s: &str) -> Result<Self, DictError> {
        let mut entries = Vec::new();
        for (idx, raw) in s.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let Some((keyword, value)) = line.split_once('\t') else {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: "expected keyword<TAB>value".to_string(),
                });
            };
            if value.is_empty() {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: format!("missing value for keyword '{}'", keyword.trim()),
                });
            }
            entries.push(SymbolEntry::new(keyword.trim(), value));
        }
        Ok(Self::from_entries(entries))
    }

    /// Parse TOML made of `[[symbol]]` tables with `keyword` and `value` keys.
    pub fn from_toml_str(s: &str) -> Result<Self, DictError> {
        let parsed: TomlSymbols = toml::from_str(s).map_err(|e| DictError::Toml(e.to_string()))?;
        Ok(Self::from_entries(parsed.symbol))
    }

    /// Load from a file. `.toml` files use the TOML layout, anything else TSV.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dict = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            _ => Self::from_tsv_str(&content)?,
        };
        debug!(path = %path.display(), entries = dict.len(), "loaded symbol dictionary");
        Ok(dict)
    }

    /// A fresh copy of the built-in emoji set.
    pub fn default_emoji() -> Self {
        // build.rs validates the embedded file, so a failure here is a build bug.
        Self::from_tsv_str(DEFAULT_EMOJI_TSV).expect("embedded emoji TSV must be valid")
    }
}

impl Dictionary for SymbolDictionary {
    fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }
}
