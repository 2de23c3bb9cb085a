use tracing::debug;

use emoji_core::splice::TextEdit;

use super::types::{KeyResponse, PopupAction, SessionState};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Commit the highlighted suggestion.
    ///
    /// The response carries a `TextEdit` replacing the fragment with the
    /// suggestion's value (or keyword) plus a trailing space, and asks the
    /// host to restore focus. The session is closed afterwards. No-op while
    /// idle.
    pub fn on_commit(&mut self) -> KeyResponse {
        let SessionState::Active(ref a) = self.state else {
            return KeyResponse::not_consumed();
        };
        let Some(chosen) = a.suggestions.selected() else {
            return KeyResponse::not_consumed();
        };

        let edit = TextEdit {
            fragment: a.fragment.clone(),
            text: chosen
                .insertion_text(self.config.use_keyword_as_value)
                .to_string(),
            encoding: self.config.offset_encoding,
        };
        debug!(keyword = %chosen.keyword, caret = edit.caret(), "suggestion committed");

        let mut resp = KeyResponse::consumed();
        resp.edit = Some(edit);
        resp.popup = PopupAction::Hide;
        resp.side_effects.restore_focus = true;
        self.reset_state();
        resp
    }

    /// Commit the suggestion at `index` (a pointer pick in the popup).
    /// Out-of-range indices and idle sessions are no-ops.
    pub fn pick(&mut self, index: usize) -> KeyResponse {
        let SessionState::Active(ref mut a) = self.state else {
            return KeyResponse::not_consumed();
        };
        if !a.suggestions.highlight(index) {
            return KeyResponse::not_consumed();
        }
        self.on_commit()
    }

    /// Close the session without touching the text.
    pub fn on_cancel(&mut self) -> KeyResponse {
        self.close()
    }

    /// The caret moved by pointer; a popup must never outlive that.
    pub fn on_caret_moved_by_pointer(&mut self) -> KeyResponse {
        self.close()
    }

    pub(super) fn reset_state(&mut self) {
        self.state = SessionState::Idle;
    }
}
