//! Named keys and the logical intents they are bound to.

use std::fmt;
use std::str::FromStr;

/// Keys a keymap can bind. Printable input never reaches the keymap; it
/// arrives as a text change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowUp,
    ArrowDown,
    Tab,
    Enter,
    Escape,
}

impl NamedKey {
    pub const ALL: [NamedKey; 5] = [
        NamedKey::ArrowUp,
        NamedKey::ArrowDown,
        NamedKey::Tab,
        NamedKey::Enter,
        NamedKey::Escape,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::Tab => "Tab",
            Self::Enter => "Enter",
            Self::Escape => "Escape",
        }
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown key name '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    Next,
    Previous,
    Commit,
    Cancel,
}

impl KeyIntent {
    pub const ALL: [KeyIntent; 4] = [
        KeyIntent::Next,
        KeyIntent::Previous,
        KeyIntent::Commit,
        KeyIntent::Cancel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Commit => "commit",
            Self::Cancel => "cancel",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.name() == s)
    }
}

/// Key → intent bindings. A key maps to at most one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<(NamedKey, KeyIntent)>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `key` to `intent`. Returns the intent it was previously bound to.
    pub fn bind(&mut self, key: NamedKey, intent: KeyIntent) -> Option<KeyIntent> {
        if let Some(slot) = self.bindings.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, intent));
        }
        self.bindings.push((key, intent));
        None
    }

    pub fn intent(&self, key: NamedKey) -> Option<KeyIntent> {
        self.bindings
            .iter()
            .find_map(|&(k, i)| (k == key).then_some(i))
    }

    pub fn keys_for(&self, intent: KeyIntent) -> impl Iterator<Item = NamedKey> + '_ {
        self.bindings
            .iter()
            .filter(move |&&(_, i)| i == intent)
            .map(|&(k, _)| k)
    }
}

impl Default for Keymap {
    /// Arrow keys navigate, Tab and Enter commit, Escape cancels.
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(NamedKey::ArrowDown, KeyIntent::Next);
        map.bind(NamedKey::ArrowUp, KeyIntent::Previous);
        map.bind(NamedKey::Tab, KeyIntent::Commit);
        map.bind(NamedKey::Enter, KeyIntent::Commit);
        map.bind(NamedKey::Escape, KeyIntent::Cancel);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = Keymap::default();
        assert_eq!(map.intent(NamedKey::ArrowDown), Some(KeyIntent::Next));
        assert_eq!(map.intent(NamedKey::ArrowUp), Some(KeyIntent::Previous));
        assert_eq!(map.intent(NamedKey::Tab), Some(KeyIntent::Commit));
        assert_eq!(map.intent(NamedKey::Enter), Some(KeyIntent::Commit));
        assert_eq!(map.intent(NamedKey::Escape), Some(KeyIntent::Cancel));
        let commit: Vec<_> = map.keys_for(KeyIntent::Commit).collect();
        assert_eq!(commit, vec![NamedKey::Tab, NamedKey::Enter]);
    }

    #[test]
    fn test_rebind_returns_previous() {
        let mut map = Keymap::default();
        assert_eq!(
            map.bind(NamedKey::Tab, KeyIntent::Next),
            Some(KeyIntent::Commit)
        );
        assert_eq!(map.intent(NamedKey::Tab), Some(KeyIntent::Next));
    }

    #[test]
    fn test_key_names() {
        assert_eq!("arrowdown".parse::<NamedKey>(), Ok(NamedKey::ArrowDown));
        assert_eq!("Enter".parse::<NamedKey>(), Ok(NamedKey::Enter));
        assert!("F13".parse::<NamedKey>().is_err());
        assert_eq!(KeyIntent::from_name("cancel"), Some(KeyIntent::Cancel));
        assert_eq!(KeyIntent::from_name("Cancel"), None);
    }
}
