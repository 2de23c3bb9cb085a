use emoji_core::candidates::Suggestion;
use emoji_session::{KeyResponse, PopupAction, PopupAnchor};

/// Event-driven response from every `EmojiInput` operation.
#[derive(Debug, Clone, PartialEq)]
pub struct InputResponse {
    pub consumed: bool,
    pub events: Vec<InputEvent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The buffer was rewritten by a commit.
    TextReplaced { text: String, caret: usize },
    ShowPopup {
        suggestions: Vec<Suggestion>,
        highlighted: usize,
        anchor: Option<PopupAnchor>,
    },
    HidePopup,
    RestoreFocus,
}

impl InputResponse {
    pub(crate) fn idle() -> Self {
        Self {
            consumed: false,
            events: Vec::new(),
        }
    }
}

/// `replaced` is the buffer and caret after the response's edit was applied.
pub(crate) fn convert_to_events(resp: KeyResponse, replaced: Option<(String, usize)>) -> InputResponse {
    let mut events = Vec::new();

    // 1. Text
    if let Some((text, caret)) = replaced {
        events.push(InputEvent::TextReplaced { text, caret });
    }

    // 2. Popup
    match resp.popup {
        PopupAction::Show {
            suggestions,
            highlighted,
            anchor,
        } => events.push(InputEvent::ShowPopup {
            suggestions,
            highlighted,
            anchor,
        }),
        PopupAction::Hide => events.push(InputEvent::HidePopup),
        PopupAction::Keep => {}
    }

    // 3. Side effects
    if resp.side_effects.restore_focus {
        events.push(InputEvent::RestoreFocus);
    }

    InputResponse {
        consumed: resp.consumed,
        events,
    }
}
