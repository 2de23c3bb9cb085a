use emoji_core::candidates::Suggestion;

use super::types::cyclic_index;

/// Ranked suggestions plus the highlighted index.
///
/// Navigation is cyclic in both directions. The highlight starts unset and
/// the first `advance` lands on the first (forward) or last (backward) item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<Suggestion>,
    highlighted: Option<usize>,
}

impl SuggestionList {
    pub fn new(items: Vec<Suggestion>) -> Self {
        Self {
            items,
            highlighted: None,
        }
    }

    pub fn items(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Highlight `index`. Out-of-range indices leave the highlight unchanged.
    pub fn highlight(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.highlighted = Some(index);
            true
        } else {
            false
        }
    }

    pub fn advance(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(current) => cyclic_index(current, if forward { 1 } else { -1 }, len),
            None if forward => 0,
            None => len - 1,
        });
    }

    /// The highlighted suggestion. Does not change state.
    pub fn selected(&self) -> Option<&Suggestion> {
        self.highlighted.and_then(|i| self.items.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(n: usize) -> SuggestionList {
        SuggestionList::new(
            (0..n)
                .map(|i| Suggestion {
                    keyword: format!("k{i}"),
                    value: format!("v{i}"),
                    match_rank: 0,
                })
                .collect(),
        )
    }

    #[test]
    fn test_starts_unset() {
        let l = list(3);
        assert_eq!(l.highlighted(), None);
        assert!(l.selected().is_none());
    }

    #[test]
    fn test_advance_from_unset() {
        let mut l = list(3);
        l.advance(true);
        assert_eq!(l.highlighted(), Some(0));

        let mut l = list(3);
        l.advance(false);
        assert_eq!(l.highlighted(), Some(2));
    }

    #[test]
    fn test_advance_wraps() {
        let mut l = list(3);
        l.highlight_first();
        l.advance(false);
        assert_eq!(l.highlighted(), Some(2));
        l.advance(true);
        assert_eq!(l.highlighted(), Some(0));
        l.advance(true);
        l.advance(true);
        l.advance(true);
        assert_eq!(l.highlighted(), Some(0));
    }

    #[test]
    fn test_single_item() {
        let mut l = list(1);
        l.highlight_first();
        l.advance(true);
        assert_eq!(l.highlighted(), Some(0));
        l.advance(false);
        assert_eq!(l.highlighted(), Some(0));
    }

    #[test]
    fn test_empty_list() {
        let mut l = list(0);
        l.highlight_first();
        l.advance(true);
        assert_eq!(l.highlighted(), None);
        assert!(!l.highlight(0));
    }

    #[test]
    fn test_selected_does_not_mutate() {
        let mut l = list(3);
        l.highlight(1);
        assert_eq!(l.selected().unwrap().keyword, "k1");
        assert_eq!(l.selected().unwrap().keyword, "k1");
        assert_eq!(l.highlighted(), Some(1));
    }

    #[test]
    fn test_highlight_out_of_range() {
        let mut l = list(2);
        l.highlight_first();
        assert!(!l.highlight(5));
        assert_eq!(l.highlighted(), Some(0));
    }

    proptest! {
        #[test]
        fn advance_is_a_cyclic_bijection(len in 1usize..12, start in 0usize..12) {
            let start = start % len;
            let mut l = list(len);
            l.highlight(start);

            for _ in 0..len {
                l.advance(true);
            }
            prop_assert_eq!(l.highlighted(), Some(start));

            l.advance(true);
            l.advance(false);
            prop_assert_eq!(l.highlighted(), Some(start));

            l.advance(false);
            l.advance(true);
            prop_assert_eq!(l.highlighted(), Some(start));
        }
    }
}
