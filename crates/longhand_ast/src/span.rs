//! Source span type for error reporting.
//!
//! Byte offsets into the cleaned-up input string the tokenizer saw.

/// Source location span (byte offsets).
///
/// Represents a range `[start, end)` in the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single character starting at `start`.
    pub fn char_at(start: usize, c: char) -> Self {
        Self::new(start, start + c.len_utf8())
    }

    /// Slice `source` with this span, or `""` when out of range.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}
