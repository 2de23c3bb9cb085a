//! Inline emoji autocomplete for plain-text fields.
//!
//! Typing a sentinel (`:` by default) followed by part of a keyword opens a
//! suggestion popup; arrow keys move the highlight and Tab/Enter splice the
//! chosen symbol into the text. [`EmojiInput`] is a headless field that wires
//! the pieces together; hosts with their own text surface can drive
//! [`AutocompleteSession`] directly.

mod editor;
mod error;
mod events;
pub mod trace_init;

pub use editor::EmojiInput;
pub use error::InputError;
pub use events::{InputEvent, InputResponse};

pub use emoji_core::candidates::Suggestion;
pub use emoji_core::dict::{Dictionary, SymbolDictionary, SymbolEntry};
pub use emoji_core::settings::Settings;
pub use emoji_core::unicode::OffsetEncoding;
pub use emoji_session::{AutocompleteSession, KeyEvent, PopupAnchor, SessionConfig};
