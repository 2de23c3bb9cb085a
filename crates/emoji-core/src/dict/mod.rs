//! Symbol dictionary storage.
//!
//! `SymbolDictionary` holds the ordered `(keyword, value)` list the matcher
//! searches. It is built once from one of the loaders and never mutated, so a
//! single `Arc` can be shared by every session.

mod entry;
mod symbol_dict;

pub use entry::SymbolEntry;
pub use symbol_dict::{SymbolDictionary, DEFAULT_EMOJI_TSV};

use std::io;

use crate::candidates::{match_suggestions, Suggestion};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("TOML parse error: {0}")]
    Toml(String),
}

pub trait Dictionary: Send + Sync {
    /// All entries in load order.
    fn entries(&self) -> &[SymbolEntry];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Entries whose keyword contains `term`, ranked by match position and
    /// capped at `max_results`.
    fn search(&self, term: &str, max_results: usize) -> Vec<Suggestion> {
        match_suggestions(term, self.entries(), max_results)
    }
}
