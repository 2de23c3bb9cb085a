mod state;
pub(crate) use state::*;

use emoji_core::candidates::{Suggestion, DEFAULT_MAX_SUGGESTIONS};
use emoji_core::keymap::{Keymap, NamedKey};
use emoji_core::settings::Settings;
use emoji_core::splice::TextEdit;
use emoji_core::unicode::OffsetEncoding;

/// Key presses the session reacts to. Printable input is not a key event
/// here; the host reports it through `on_text_changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    ArrowUp,
    ArrowDown,
    Tab,
    Enter,
    Escape,
    /// Anything else. Always passes through.
    Other,
}

impl KeyEvent {
    pub fn named(self) -> Option<NamedKey> {
        match self {
            Self::ArrowUp => Some(NamedKey::ArrowUp),
            Self::ArrowDown => Some(NamedKey::ArrowDown),
            Self::Tab => Some(NamedKey::Tab),
            Self::Enter => Some(NamedKey::Enter),
            Self::Escape => Some(NamedKey::Escape),
            Self::Other => None,
        }
    }
}

impl From<NamedKey> for KeyEvent {
    fn from(key: NamedKey) -> Self {
        match key {
            NamedKey::ArrowUp => Self::ArrowUp,
            NamedKey::ArrowDown => Self::ArrowDown,
            NamedKey::Tab => Self::Tab,
            NamedKey::Enter => Self::Enter,
            NamedKey::Escape => Self::Escape,
        }
    }
}

/// Surface-relative pixel position of the popup's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupAnchor {
    pub top: f64,
    pub left: f64,
}

/// Host capability: pixel coordinates of a caret offset.
pub trait CoordinateProvider {
    fn coordinates_for_offset(&self, caret: usize) -> PopupAnchor;
}

impl<F> CoordinateProvider for F
where
    F: Fn(usize) -> PopupAnchor,
{
    fn coordinates_for_offset(&self, caret: usize) -> PopupAnchor {
        self(caret)
    }
}

/// Popup action — exactly one of three states.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    /// Leave the popup as-is.
    Keep,
    /// Show or update the popup.
    Show {
        suggestions: Vec<Suggestion>,
        highlighted: usize,
        anchor: Option<PopupAnchor>,
    },
    /// Hide the popup.
    Hide,
}

/// Orthogonal side-effects that accompany a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// Give input focus back to the text surface (a popup click may have taken it).
    pub restore_focus: bool,
}

/// Response from every session operation, returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    /// The host must suppress the key's default behaviour.
    pub consumed: bool,
    /// Replacement to apply to the text surface.
    pub edit: Option<TextEdit>,
    pub popup: PopupAction,
    pub side_effects: SideEffects,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            edit: None,
            popup: PopupAction::Keep,
            side_effects: SideEffects::default(),
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }

    pub(crate) fn hide() -> Self {
        Self {
            popup: PopupAction::Hide,
            ..Self::not_consumed()
        }
    }
}

/// Construction-time configuration of a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub sentinel: char,
    pub max_suggestions: usize,
    /// Splice the keyword instead of the value on commit.
    pub use_keyword_as_value: bool,
    pub popup_top_offset: f64,
    pub offset_encoding: OffsetEncoding,
    pub keymap: Keymap,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sentinel: ':',
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            use_keyword_as_value: false,
            popup_top_offset: 20.0,
            offset_encoding: OffsetEncoding::default(),
            keymap: Keymap::default(),
        }
    }
}

impl From<&Settings> for SessionConfig {
    fn from(s: &Settings) -> Self {
        Self {
            sentinel: s.sentinel(),
            max_suggestions: s.suggestions.max_results,
            use_keyword_as_value: s.suggestions.use_keyword_as_value,
            popup_top_offset: s.popup.top_offset,
            offset_encoding: s.offsets.encoding,
            keymap: s.keymap().clone(),
        }
    }
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}
