//! Suggestion matching.
//!
//! A dictionary entry matches when the search term occurs inside its keyword
//! (exact, case-sensitive substring). Matches are ranked by where the term
//! first occurs; dictionary order breaks ties.

use serde::Serialize;

use crate::dict::SymbolEntry;


/// Default cap on the number of suggestions offered at once.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A ranked match, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub keyword: String,
    pub value: String,
    /// Character index of the first occurrence of the term in `keyword`.
    pub match_rank: usize,
}

impl Suggestion {
    /// Text to splice into the buffer when this suggestion is chosen.
    pub fn insertion_text(&self, use_keyword_as_value: bool) -> &str {
        if use_keyword_as_value {
            &self.keyword
        } else {
            &self.value
        }
    }
}

/// Rank `entries` against `term`.
///
/// An empty term matches nothing. The sort is stable, so entries with the
/// same rank stay in dictionary order.
pub fn match_suggestions(
    term: &str,
    entries: &[SymbolEntry],
    max_results: usize,
) -> Vec<Suggestion> {
    if term.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, &SymbolEntry)> = entries
        .iter()
        .filter_map(|e| {
            let byte = e.keyword.find(term)?;
            Some((e.keyword[..byte].chars().count(), e))
        })
        .collect();

    ranked.sort_by_key(|&(rank, _)| rank);
    ranked.truncate(max_results);

    ranked
        .into_iter()
        .map(|(match_rank, e)| Suggestion {
            keyword: e.keyword.clone(),
            value: e.value.clone(),
            match_rank,
        })
        .collect()
}
