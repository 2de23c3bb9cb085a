use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use emoji_core::dict::{Dictionary, SymbolDictionary};
use emoji_core::settings::{parse_settings_toml, Settings};
use emoji_core::unicode::OffsetEncoding;
use emoji_session::{
    AutocompleteSession, CoordinateProvider, KeyEvent, KeyResponse, SessionConfig,
};

use crate::error::InputError;
use crate::events::{convert_to_events, InputResponse};


/// A plain-text field with emoji autocomplete attached.
///
/// Owns the buffer, the caret and the session, and applies commits to the
/// buffer itself. Carets are in the session's offset encoding.
pub struct EmojiInput {
    text: String,
    caret: usize,
    focused: bool,
    session: AutocompleteSession,
}

impl EmojiInput {
    pub fn new(dict: Arc<dyn Dictionary>, config: SessionConfig) -> Self {
        Self {
            text: String::new(),
            caret: 0,
            focused: true,
            session: AutocompleteSession::new(dict, config),
        }
    }

    /// Built-in emoji set with default settings.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(SymbolDictionary::default_emoji()),
            SessionConfig::default(),
        )
    }

    /// Load settings and a dictionary from disk. Either may be omitted to
    /// fall back to the embedded defaults.
    pub fn from_files(
        settings_path: Option<&Path>,
        dict_path: Option<&Path>,
    ) -> Result<Self, InputError> {
        let settings = match settings_path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|source| InputError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                parse_settings_toml(&content)?
            }
            None => Settings::default(),
        };
        let dict = match dict_path {
            Some(path) => SymbolDictionary::from_path(path)?,
            None => SymbolDictionary::default_emoji(),
        };
        debug!(entries = dict.len(), "input loaded");
        Ok(Self::new(Arc::new(dict), SessionConfig::from(&settings)))
    }

    pub fn set_coordinate_provider(&mut self, provider: impl CoordinateProvider + 'static) {
        self.session.set_coordinate_provider(provider);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn session(&self) -> &AutocompleteSession {
        &self.session
    }

    fn encoding(&self) -> OffsetEncoding {
        self.session.config().offset_encoding
    }

    /// Replace the whole buffer, as a paste or programmatic edit would.
    pub fn set_text(&mut self, text: &str, caret: usize) -> InputResponse {
        self.text = text.to_string();
        self.caret = self.encoding().resolve(&self.text, caret).1;
        self.notify_text_changed()
    }

    /// Type `s` at the caret.
    pub fn insert_str(&mut self, s: &str) -> InputResponse {
        let encoding = self.encoding();
        let (byte, caret) = encoding.resolve(&self.text, self.caret);
        self.text.insert_str(byte, s);
        self.caret = caret + encoding.len_of(s);
        self.notify_text_changed()
    }

    /// Delete the character left of the caret.
    pub fn backspace(&mut self) -> InputResponse {
        let encoding = self.encoding();
        let (byte, caret) = encoding.resolve(&self.text, self.caret);
        let Some(removed) = self.text[..byte].chars().next_back() else {
            return InputResponse::idle();
        };
        let from = byte - removed.len_utf8();
        self.caret = caret - encoding.len_of(&self.text[from..byte]);
        self.text.replace_range(from..byte, "");
        self.notify_text_changed()
    }

    /// Move the caret with the pointer.
    pub fn click(&mut self, offset: usize) -> InputResponse {
        self.focused = true;
        self.caret = self.encoding().resolve(&self.text, offset).1;
        let resp = self.session.on_caret_moved_by_pointer();
        self.finish(resp)
    }

    /// Press a key. Keys the session leaves unconsumed get the field's default
    /// behaviour: Enter and Tab insert their character, the rest do nothing.
    pub fn key(&mut self, key: KeyEvent) -> InputResponse {
        let resp = self.session.handle_key(key);
        if resp.consumed {
            return self.finish(resp);
        }
        let fallback = match key {
            KeyEvent::Enter => Some("\n"),
            KeyEvent::Tab => Some("\t"),
            _ => None,
        };
        let mut out = self.finish(resp);
        if let Some(s) = fallback {
            let typed = self.insert_str(s);
            out.events.extend(typed.events);
        }
        out
    }

    /// Click the popup row at `index`. A successful commit hands focus back
    /// to the field.
    pub fn choose_suggestion(&mut self, index: usize) -> InputResponse {
        let resp = self.session.pick(index);
        self.finish(resp)
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    fn notify_text_changed(&mut self) -> InputResponse {
        let resp = self.session.on_text_changed(&self.text, self.caret);
        self.finish(resp)
    }

    fn finish(&mut self, resp: KeyResponse) -> InputResponse {
        let replaced = resp.edit.as_ref().map(|edit| {
            let spliced = edit.apply(&self.text);
            self.text = spliced.buffer;
            self.caret = spliced.caret;
            (self.text.clone(), self.caret)
        });
        if resp.side_effects.restore_focus {
            self.focused = true;
        }
        convert_to_events(resp, replaced)
    }
}
