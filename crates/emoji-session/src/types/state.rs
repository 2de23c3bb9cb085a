use emoji_core::fragment::Fragment;

use super::PopupAnchor;
use crate::navigator::SuggestionList;

pub(crate) enum SessionState {
    Idle,
    Active(ActiveSession),
}

/// Everything that exists only while a suggestion popup is open.
pub(crate) struct ActiveSession {
    pub(crate) fragment: Fragment,
    pub(crate) suggestions: SuggestionList,
    /// `None` when no coordinate provider is attached.
    pub(crate) anchor: Option<PopupAnchor>,
}
