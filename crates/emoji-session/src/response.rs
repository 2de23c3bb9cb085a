use super::types::{KeyResponse, PopupAction, SessionState};

/// Show the current suggestions, or hide the popup when idle.
pub(super) fn build_popup_response(state: &SessionState, consumed: bool) -> KeyResponse {
    let mut resp = if consumed {
        KeyResponse::consumed()
    } else {
        KeyResponse::not_consumed()
    };
    resp.popup = match state {
        SessionState::Active(a) => match a.suggestions.highlighted() {
            Some(highlighted) => PopupAction::Show {
                suggestions: a.suggestions.items().to_vec(),
                highlighted,
                anchor: a.anchor,
            },
            None => PopupAction::Keep,
        },
        SessionState::Idle => PopupAction::Hide,
    };
    resp
}
