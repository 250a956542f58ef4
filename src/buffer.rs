//! Text buffer traits and implementations for token scanning.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over different buffer backends (String for small inputs, Rope for large
//! documents). All offsets are character offsets, never byte offsets.

use ropey::Rope;
use std::ops::Range;

/// Read-only, char-indexed view into a text buffer.
///
/// The tokenizer and router only ever read through this trait, so any host
/// storage can be scanned without copying it into a `String` first.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get character at offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Characters from `offset` towards the end of the buffer
    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_;

    /// Characters before `offset`, nearest first
    fn chars_before(&self, offset: usize) -> impl Iterator<Item = char> + '_;

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert single character at character offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    /// Clear all content
    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

/// Convert char offset to byte offset, clamping to the end of `text`
pub(crate) fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

// =============================================================================
// str - borrowed text handed over by the host
// =============================================================================

impl TextBuffer for str {
    fn len_chars(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars().nth(offset)
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self[char_to_byte(self, offset)..].chars()
    }

    fn chars_before(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self[..char_to_byte(self, offset)].chars().rev()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = char_to_byte(self, range.start);
        let end = char_to_byte(self, range.end.max(range.start));
        self[start..end].to_string()
    }

    fn content(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// StringBuffer - for single-line inputs (composer boxes, chat fields)
// =============================================================================

/// TextBuffer implementation wrapping String. Used for short inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        char_to_byte(&self.text, char_offset)
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.text[self.char_to_byte(offset)..].chars()
    }

    fn chars_before(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.text[..self.char_to_byte(offset)].chars().rev()
    }

    fn slice(&self, range: Range<usize>) -> String {
        self.text.as_str().slice(range)
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }
}

// =============================================================================
// RopeBuffer - for long multi-line posts
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Char access and offset conversion stay logarithmic on large documents.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        if offset >= self.rope.len_chars() {
            return None;
        }
        Some(self.rope.char(offset))
    }

    fn chars_from(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.rope.chars_at(offset.min(self.rope.len_chars()))
    }

    fn chars_before(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        let mut chars = self.rope.chars_at(offset.min(self.rope.len_chars()));
        std::iter::from_fn(move || chars.prev())
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert_char(clamped, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}
