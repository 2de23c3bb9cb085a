//! Fragment extraction: the word-like run immediately left of the caret.

use crate::unicode::{is_word_boundary, OffsetEncoding};

/// Substring of the buffer between the left word boundary and the caret.
///
/// `start` and `end` are offsets in the encoding the fragment was extracted
/// with, and always satisfy `start <= end <= len(buffer)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Search term if this fragment opens a suggestion session.
    ///
    /// A fragment triggers when it starts with `sentinel` and has at least one
    /// more character after it; the term is everything after the sentinel.
    pub fn trigger_term(&self, sentinel: char) -> Option<&str> {
        let term = self.text.strip_prefix(sentinel)?;
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

/// Extract the fragment ending at `caret`.
///
/// Scans backward from the caret to the nearest whitespace or the buffer
/// start, so the cost is bounded by the word length rather than the buffer.
/// Out-of-range carets are clamped (see [`OffsetEncoding::resolve`]).
pub fn extract(buffer: &str, caret: usize, encoding: OffsetEncoding) -> Fragment {
    let (caret_byte, end) = encoding.resolve(buffer, caret);
    let head = &buffer[..caret_byte];
    let boundary = head
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_boundary(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let text = &head[boundary..];
    Fragment {
        text: text.to_string(),
        start: end - encoding.len_of(text),
        end,
    }
}
