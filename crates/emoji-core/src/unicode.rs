//! Character classification and caret-offset arithmetic.
//!
//! Hosts report caret positions in whatever unit their text surface uses.
//! Browser-style surfaces count UTF-16 code units, native ones often count
//! bytes or scalar values. `OffsetEncoding` translates between those units
//! and the byte indices Rust string slicing needs.

use serde::Deserialize;

/// Unit in which caret offsets and text lengths are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OffsetEncoding {
    /// UTF-16 code units (JavaScript `String.length`, DOM selection offsets).
    #[default]
    #[serde(rename = "utf-16")]
    Utf16,
    /// UTF-8 bytes.
    #[serde(rename = "utf-8")]
    Utf8,
    /// Unicode scalar values (`char`s).
    #[serde(rename = "utf-32")]
    Utf32,
}

impl OffsetEncoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf16 => "utf-16",
            Self::Utf8 => "utf-8",
            Self::Utf32 => "utf-32",
        }
    }

    fn char_len(self, c: char) -> usize {
        match self {
            Self::Utf16 => c.len_utf16(),
            Self::Utf8 => c.len_utf8(),
            Self::Utf32 => 1,
        }
    }

    /// Length of `s` in this encoding.
    pub fn len_of(self, s: &str) -> usize {
        match self {
            Self::Utf16 => s.encode_utf16().count(),
            Self::Utf8 => s.len(),
            Self::Utf32 => s.chars().count(),
        }
    }

    /// Resolve an offset against `s`, returning `(byte_index, offset)` where
    /// `offset` is the normalized input.
    ///
    /// Offsets past the end clamp to the end. An offset that falls inside a
    /// multi-unit character (a lone surrogate position, a continuation byte)
    /// is floored to the start of that character.
    pub fn resolve(self, s: &str, offset: usize) -> (usize, usize) {
        if self == Self::Utf8 {
            let mut byte = offset.min(s.len());
            while !s.is_char_boundary(byte) {
                byte -= 1;
            }
            return (byte, byte);
        }
        let mut units = 0;
        for (idx, c) in s.char_indices() {
            let next = units + self.char_len(c);
            if next > offset {
                return (idx, units);
            }
            units = next;
        }
        (s.len(), units)
    }
}

/// Characters that end a fragment when scanning left from the caret.
///
/// Unicode `White_Space` plus U+FEFF, which text surfaces treat as
/// whitespace even though Unicode does not.
pub fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_of() {
        assert_eq!(OffsetEncoding::Utf16.len_of("a😄"), 3);
        assert_eq!(OffsetEncoding::Utf8.len_of("a😄"), 5);
        assert_eq!(OffsetEncoding::Utf32.len_of("a😄"), 2);
        assert_eq!(OffsetEncoding::Utf16.len_of(""), 0);
    }

    #[test]
    fn test_resolve_ascii_is_identity() {
        for enc in [
            OffsetEncoding::Utf16,
            OffsetEncoding::Utf8,
            OffsetEncoding::Utf32,
        ] {
            assert_eq!(enc.resolve("hello", 0), (0, 0));
            assert_eq!(enc.resolve("hello", 3), (3, 3));
            assert_eq!(enc.resolve("hello", 5), (5, 5));
        }
    }

    #[test]
    fn test_resolve_clamps_past_end() {
        assert_eq!(OffsetEncoding::Utf16.resolve("abc", 99), (3, 3));
        assert_eq!(OffsetEncoding::Utf8.resolve("abc", 99), (3, 3));
        assert_eq!(OffsetEncoding::Utf32.resolve("a😄", 99), (5, 2));
    }

    #[test]
    fn test_resolve_utf16_surrogates() {
        let s = "a😄b";
        assert_eq!(OffsetEncoding::Utf16.resolve(s, 1), (1, 1));
        // Between the two surrogates: floored to the emoji start.
        assert_eq!(OffsetEncoding::Utf16.resolve(s, 2), (1, 1));
        assert_eq!(OffsetEncoding::Utf16.resolve(s, 3), (5, 3));
        assert_eq!(OffsetEncoding::Utf16.resolve(s, 4), (6, 4));
    }

    #[test]
    fn test_resolve_utf8_mid_char() {
        let s = "é!";
        assert_eq!(OffsetEncoding::Utf8.resolve(s, 1), (0, 0));
        assert_eq!(OffsetEncoding::Utf8.resolve(s, 2), (2, 2));
    }

    #[test]
    fn test_word_boundary() {
        assert!(is_word_boundary(' '));
        assert!(is_word_boundary('\n'));
        assert!(is_word_boundary('\t'));
        assert!(is_word_boundary('\u{3000}'));
        assert!(is_word_boundary('\u{FEFF}'));
        assert!(!is_word_boundary(':'));
        assert!(!is_word_boundary('a'));
    }

    #[test]
    fn test_deserialize_names() {
        #[derive(Deserialize)]
        struct Wrap {
            encoding: OffsetEncoding,
        }
        let w: Wrap = toml::from_str(r#"encoding = "utf-8""#).unwrap();
        assert_eq!(w.encoding, OffsetEncoding::Utf8);
        let w: Wrap = toml::from_str(r#"encoding = "utf-16""#).unwrap();
        assert_eq!(w.encoding, OffsetEncoding::Utf16);
        assert!(toml::from_str::<Wrap>(r#"encoding = "latin1""#).is_err());
    }
}
