//! Stateful autocomplete session: trigger detection, suggestion navigation
//! and commit handling for one text surface.
//!
//! `AutocompleteSession` owns the popup state and processes each text change
//! and key press, returning responses the host translates into surface calls
//! (suppress a key, show the popup, apply an edit, restore focus).

pub(crate) mod types;

mod commit;
mod key_handlers;
mod navigator;
mod response;
mod text_events;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use emoji_core::candidates::Suggestion;
use emoji_core::dict::Dictionary;
use emoji_core::fragment::Fragment;

pub use navigator::SuggestionList;
pub use types::{
    CoordinateProvider, KeyEvent, KeyResponse, PopupAction, PopupAnchor, SessionConfig,
    SideEffects,
};

use types::{ActiveSession, SessionState};

/// Autocomplete session for a single text surface.
pub struct AutocompleteSession {
    dict: Arc<dyn Dictionary>,
    coords: Option<Box<dyn CoordinateProvider>>,
    config: SessionConfig,
    state: SessionState,
}

impl AutocompleteSession {
    pub fn new(dict: Arc<dyn Dictionary>, config: SessionConfig) -> Self {
        Self {
            dict,
            coords: None,
            config,
            state: SessionState::Idle,
        }
    }

    /// Attach the host's caret-coordinate capability. Without one, sessions
    /// open with no popup anchor.
    pub fn set_coordinate_provider(&mut self, provider: impl CoordinateProvider + 'static) {
        self.coords = Some(Box::new(provider));
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    fn active(&self) -> Option<&ActiveSession> {
        match &self.state {
            SessionState::Active(a) => Some(a),
            SessionState::Idle => None,
        }
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        self.active().map(|a| &a.fragment)
    }

    /// Current suggestions; empty when idle.
    pub fn suggestions(&self) -> &[Suggestion] {
        self.active()
            .map(|a| a.suggestions.items())
            .unwrap_or(&[])
    }

    /// Highlighted index; `None` when idle.
    pub fn highlighted(&self) -> Option<usize> {
        self.active().and_then(|a| a.suggestions.highlighted())
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion> {
        self.active().and_then(|a| a.suggestions.selected())
    }

    pub fn popup_anchor(&self) -> Option<PopupAnchor> {
        self.active().and_then(|a| a.anchor)
    }
}
