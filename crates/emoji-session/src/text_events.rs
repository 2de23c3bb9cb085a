use tracing::{debug, debug_span};

use emoji_core::fragment::extract;

use super::navigator::SuggestionList;
use super::response::build_popup_response;
use super::types::{ActiveSession, KeyResponse, PopupAnchor, SessionState};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Re-evaluate the fragment left of the caret after the buffer changed.
    ///
    /// Opens a session when the fragment triggers and has matches, updates an
    /// open one (highlight back to the first item), and closes it otherwise.
    /// The buffer itself is never modified here.
    pub fn on_text_changed(&mut self, buffer: &str, caret: usize) -> KeyResponse {
        let _span = debug_span!("on_text_changed", caret).entered();

        let fragment = extract(buffer, caret, self.config.offset_encoding);
        let suggestions = match fragment.trigger_term(self.config.sentinel) {
            Some(term) => self.dict.search(term, self.config.max_suggestions),
            None => Vec::new(),
        };
        if suggestions.is_empty() {
            return self.close();
        }

        let anchor = match &self.state {
            SessionState::Active(a) => a.anchor,
            SessionState::Idle => {
                debug!(fragment = %fragment.text, matches = suggestions.len(), "session opened");
                self.query_anchor(fragment.end)
            }
        };

        let mut list = SuggestionList::new(suggestions);
        list.highlight_first();
        self.state = SessionState::Active(ActiveSession {
            fragment,
            suggestions: list,
            anchor,
        });
        build_popup_response(&self.state, false)
    }

    fn query_anchor(&self, caret: usize) -> Option<PopupAnchor> {
        let provider = self.coords.as_ref()?;
        let PopupAnchor { top, left } = provider.coordinates_for_offset(caret);
        Some(PopupAnchor {
            top: top + self.config.popup_top_offset,
            left,
        })
    }

    /// Drop the session if one is open. Hides the popup only when there was one.
    pub(super) fn close(&mut self) -> KeyResponse {
        if self.is_active() {
            debug!("session closed");
            self.reset_state();
            KeyResponse::hide()
        } else {
            KeyResponse::not_consumed()
        }
    }
}
