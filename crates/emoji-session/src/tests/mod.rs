
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use emoji_core::dict::{SymbolDictionary, SymbolEntry};

use super::{AutocompleteSession, PopupAnchor, SessionConfig};

pub(super) fn make_test_dict() -> Arc<SymbolDictionary> {
    let entries = vec![
        SymbolEntry::new("smile", "😄"),
        SymbolEntry::new("smiley", "😃"),
        SymbolEntry::new("sweat_smile", "😅"),
        SymbolEntry::new("heart", "❤️"),
        SymbolEntry::new("heart_eyes", "😍"),
        SymbolEntry::new("broken_heart", "💔"),
        SymbolEntry::new("rocket", "🚀"),
        SymbolEntry::new("tada", "🎉"),
        SymbolEntry::new("+1", "👍"),
    ];
    Arc::new(SymbolDictionary::from_entries(entries))
}

pub(super) fn make_session() -> AutocompleteSession {
    AutocompleteSession::new(make_test_dict(), SessionConfig::default())
}

pub(super) fn make_session_with(config: SessionConfig) -> AutocompleteSession {
    AutocompleteSession::new(make_test_dict(), config)
}

/// Session with a coordinate provider that reports `(caret * 10, caret)`
/// and counts how often it was queried.
pub(super) fn make_session_with_coords() -> (AutocompleteSession, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let mut session = make_session();
    session.set_coordinate_provider(move |caret: usize| {
        counter.set(counter.get() + 1);
        PopupAnchor {
            top: caret as f64 * 10.0,
            left: caret as f64,
        }
    });
    (session, calls)
}

/// Feed `text` one character at a time as if typed at the end of the buffer.
pub(super) fn type_string(session: &mut AutocompleteSession, buffer: &mut String, text: &str) {
    for ch in text.chars() {
        buffer.push(ch);
        let caret = session.config().offset_encoding.len_of(buffer);
        session.on_text_changed(buffer, caret);
    }
}
