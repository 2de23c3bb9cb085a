use tracing::debug_span;

use emoji_core::keymap::KeyIntent;

use super::response::build_popup_response;
use super::types::{KeyEvent, KeyResponse, SessionState};
use super::AutocompleteSession;

impl AutocompleteSession {
    /// Process a key press. Returns a KeyResponse describing what the caller should do.
    ///
    /// Navigation keys are swallowed only while a session is active, commit
    /// keys only while there is something to commit. Cancel always closes the
    /// session but is never swallowed. Every other key passes through.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event).entered();

        let intent = event.named().and_then(|k| self.config.keymap.intent(k));
        match intent {
            Some(KeyIntent::Next) => self.on_navigate(true),
            Some(KeyIntent::Previous) => self.on_navigate(false),
            Some(KeyIntent::Commit) => self.on_commit(),
            Some(KeyIntent::Cancel) => self.on_cancel(),
            None => KeyResponse::not_consumed(),
        }
    }

    /// Move the highlight one step. No-op while idle.
    pub fn on_navigate(&mut self, forward: bool) -> KeyResponse {
        let SessionState::Active(ref mut a) = self.state else {
            return KeyResponse::not_consumed();
        };
        a.suggestions.advance(forward);
        build_popup_response(&self.state, true)
    }
}
