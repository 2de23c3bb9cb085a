//! Settings loaded from TOML.
//!
//! - `parse_settings_toml(toml_content)` parses and validates a settings file
//! - `Settings::default()` parses the embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;

use serde::Deserialize;

use crate::keymap::{KeyIntent, Keymap, NamedKey};
use crate::unicode::OffsetEncoding;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub trigger: TriggerSettings,
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub popup: PopupSettings,
    #[serde(default)]
    pub offsets: OffsetSettings,
    #[serde(default)]
    keymap: Option<HashMap<String, Vec<String>>>,
    #[serde(skip)]
    keymap_parsed: Keymap,
}

impl Settings {
    /// The sentinel as a `char`. Validation guarantees exactly one character.
    pub fn sentinel(&self) -> char {
        self.trigger.sentinel.chars().next().unwrap_or(':')
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap_parsed
    }
}

impl Default for Settings {
    fn default() -> Self {
        // build.rs validates the embedded file.
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TriggerSettings {
    pub sentinel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub max_results: usize,
    #[serde(default)]
    pub use_keyword_as_value: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PopupSettings {
    /// Vertical gap between the caret coordinates and the popup.
    pub top_offset: f64,
}

impl Default for PopupSettings {
    fn default() -> Self {
        Self { top_offset: 20.0 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OffsetSettings {
    pub encoding: OffsetEncoding,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.keymap_parsed = match &s.keymap {
        Some(raw) => parse_keymap(raw)?,
        None => Keymap::default(),
    };
    Ok(s)
}

fn parse_keymap(raw: &HashMap<String, Vec<String>>) -> Result<Keymap, SettingsError> {
    let mut map = Keymap::empty();
    // Iterate intents in a fixed order so duplicate-binding errors are stable.
    for intent in KeyIntent::ALL {
        let Some(names) = raw.get(intent.name()) else {
            continue;
        };
        for name in names {
            let key: NamedKey = name.parse().map_err(|reason| SettingsError::InvalidValue {
                field: format!("keymap.{}", intent.name()),
                reason,
            })?;
            if let Some(previous) = map.bind(key, intent) {
                return Err(SettingsError::InvalidValue {
                    field: format!("keymap.{}", intent.name()),
                    reason: format!("{key} is already bound to {}", previous.name()),
                });
            }
        }
    }
    if let Some(unknown) = raw.keys().find(|k| KeyIntent::from_name(k).is_none()) {
        return Err(SettingsError::InvalidValue {
            field: format!("keymap.{unknown}"),
            reason: "expected one of next, previous, commit, cancel".to_string(),
        });
    }
    Ok(map)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    let mut chars = s.trigger.sentinel.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !crate::unicode::is_word_boundary(c) => {}
        (Some(_), None) => {
            return Err(SettingsError::InvalidValue {
                field: "trigger.sentinel".to_string(),
                reason: "must not be whitespace".to_string(),
            });
        }
        _ => {
            return Err(SettingsError::InvalidValue {
                field: "trigger.sentinel".to_string(),
                reason: "must be exactly one character".to_string(),
            });
        }
    }

    if s.suggestions.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    if !s.popup.top_offset.is_finite() {
        return Err(SettingsError::InvalidValue {
            field: "popup.top_offset".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.sentinel(), ':');
        assert_eq!(s.suggestions.max_results, 5);
        assert!(!s.suggestions.use_keyword_as_value);
        assert!((s.popup.top_offset - 20.0).abs() < f64::EPSILON);
        assert_eq!(s.offsets.encoding, OffsetEncoding::Utf16);
        assert_eq!(s.keymap(), &Keymap::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[trigger]
sentinel = ";"

[suggestions]
max_results = 8
use_keyword_as_value = true

[popup]
top_offset = 14.5

[offsets]
encoding = "utf-32"

[keymap]
next = ["Tab"]
previous = ["ArrowUp"]
commit = ["Enter"]
cancel = ["Escape"]
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.sentinel(), ';');
        assert_eq!(s.suggestions.max_results, 8);
        assert!(s.suggestions.use_keyword_as_value);
        assert_eq!(s.offsets.encoding, OffsetEncoding::Utf32);
        assert_eq!(s.keymap().intent(NamedKey::Tab), Some(KeyIntent::Next));
        assert_eq!(s.keymap().intent(NamedKey::ArrowDown), None);
    }

    #[test]
    fn optional_sections_default() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 5
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!((s.popup.top_offset - 20.0).abs() < f64::EPSILON);
        assert_eq!(s.offsets.encoding, OffsetEncoding::Utf16);
        assert!(!s.suggestions.use_keyword_as_value);
        assert_eq!(s.keymap(), &Keymap::default());
    }

    #[test]
    fn error_multi_char_sentinel() {
        let toml = r#"
[trigger]
sentinel = "::"

[suggestions]
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("trigger.sentinel"));
    }

    #[test]
    fn error_whitespace_sentinel() {
        let toml = r#"
[trigger]
sentinel = " "

[suggestions]
max_results = 5
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn error_zero_max_results() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 0
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("suggestions.max_results"));
    }

    #[test]
    fn error_keymap_unknown_key() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 5

[keymap]
commit = ["F13"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("keymap.commit"));
        assert!(err.to_string().contains("F13"));
    }

    #[test]
    fn error_keymap_unknown_intent() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 5

[keymap]
jump = ["Tab"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("keymap.jump"));
    }

    #[test]
    fn error_keymap_double_binding() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 5

[keymap]
next = ["Tab"]
commit = ["Tab"]
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("keymap.commit"));
        assert!(err.to_string().contains("already bound to next"));
    }

    #[test]
    fn error_unknown_encoding() {
        let toml = r#"
[trigger]
sentinel = ":"

[suggestions]
max_results = 5

[offsets]
encoding = "ucs-2"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[trigger]
sentinel = ":"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
