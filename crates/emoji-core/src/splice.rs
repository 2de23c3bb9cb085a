//! Replacing a fragment with a chosen value.

use crate::fragment::Fragment;
use crate::unicode::OffsetEncoding;

/// Result of a splice: the rewritten buffer and where the caret goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    pub buffer: String,
    pub caret: usize,
}

/// Replace `fragment` in `buffer` with `chosen` followed by one space.
///
/// The space is always inserted, even at the end of the buffer, and the caret
/// lands right after it. Offsets are interpreted in `encoding`; a fragment
/// that no longer fits the buffer is clamped rather than rejected.
pub fn splice(buffer: &str, fragment: &Fragment, chosen: &str, encoding: OffsetEncoding) -> Spliced {
    let (start_byte, start) = encoding.resolve(buffer, fragment.start);
    let (end_byte, _) = encoding.resolve(buffer, fragment.end);
    let end_byte = end_byte.max(start_byte);

    let mut out = String::with_capacity(buffer.len() - (end_byte - start_byte) + chosen.len() + 1);
    out.push_str(&buffer[..start_byte]);
    out.push_str(chosen);
    out.push(' ');
    out.push_str(&buffer[end_byte..]);

    Spliced {
        buffer: out,
        caret: start + encoding.len_of(chosen) + 1,
    }
}

/// A pending replacement the host applies to its text surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub fragment: Fragment,
    pub text: String,
    pub encoding: OffsetEncoding,
}

impl TextEdit {
    pub fn apply(&self, buffer: &str) -> Spliced {
        splice(buffer, &self.fragment, &self.text, self.encoding)
    }

    /// Caret position after the edit is applied to the buffer it was made for.
    pub fn caret(&self) -> usize {
        self.fragment.start + self.encoding.len_of(&self.text) + 1
    }
}
