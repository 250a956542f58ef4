//! Text with style spans attached to char ranges.
//!
//! Styles are opaque here: the crate never renders them, it only has to carry
//! them through [`SocialTokenizer::terminate_token`](crate::SocialTokenizer::terminate_token)
//! without losing or duplicating any.

use std::ops::Range;

use crate::buffer::{char_to_byte, TextBuffer};

/// A style attached to a char range of a [`StyledText`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan<S> {
    pub range: Range<usize>,
    pub style: S,
}

/// Owned text plus the style spans laid over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<S> {
    text: String,
    spans: Vec<StyleSpan<S>>,
}

impl<S: Clone> StyledText<S> {
    /// Unstyled text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Attach `style` over `range` (char offsets)
    ///
    /// # Panics
    ///
    /// If `range` does not lie within the text.
    pub fn with_span(mut self, range: Range<usize>, style: S) -> Self {
        self.push_span(range, style);
        self
    }

    /// Attach `style` over `range` (char offsets)
    pub fn push_span(&mut self, range: Range<usize>, style: S) {
        let len = self.text.len_chars();
        assert!(
            range.start <= range.end && range.end <= len,
            "span {:?} out of range for text of {} chars",
            range,
            len
        );
        self.spans.push(StyleSpan { range, style });
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[StyleSpan<S>] {
        &self.spans
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Copy every span intersecting `source` onto `dest`, shifted so that
    /// `source.start` lands on `dest_offset`. Spans are clipped to `source`.
    pub fn copy_spans_into(&self, source: Range<usize>, dest: &mut StyledText<S>, dest_offset: usize) {
        for span in &self.spans {
            let start = span.range.start.max(source.start);
            let end = span.range.end.min(source.end);
            if start > end || (start == end && !span.range.is_empty()) {
                continue;
            }
            dest.push_span(
                start - source.start + dest_offset..end - source.start + dest_offset,
                span.style.clone(),
            );
        }
    }
}

impl<S> TextBuffer for StyledText<S> {
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
        self.text[char_to_byte(&self.text, offset)..].chars()
    }

    fn chars_before(&self, offset: usize) -> impl Iterator<Item = char> + '_ {
        self.text[..char_to_byte(&self.text, offset)].chars().rev()
    }

    fn slice(&self, range: Range<usize>) -> String {
        self.text.as_str().slice(range)
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl<S: Clone> From<&str> for StyledText<S> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
