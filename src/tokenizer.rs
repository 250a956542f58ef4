//! Token boundary resolution for hashtag and mention tokens.
//!
//! A token is the run of text between a trigger symbol (or the buffer start)
//! and the next trigger symbol (or the buffer end). The tokenizer answers two
//! questions for the host: where does the token under the cursor start and
//! end, and what text should replace it when a suggestion is accepted.
//!
//! Cursors are char offsets. Passing a cursor past the end of the buffer is a
//! caller bug and panics.

use std::ops::Range;

use crate::buffer::TextBuffer;
use crate::styled::StyledText;
use crate::trigger::{Trigger, TriggerSet};

/// Char range of the token under the cursor. Never stored, recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenBounds {
    pub start: usize,
    pub end: usize,
}

impl TokenBounds {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds token boundaries and terminates accepted tokens.
#[derive(Debug, Clone, Default)]
pub struct SocialTokenizer {
    triggers: TriggerSet,
}

impl SocialTokenizer {
    pub fn new(triggers: TriggerSet) -> Self {
        Self { triggers }
    }

    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    /// Start of the token ending at `cursor`.
    ///
    /// Walks back to just after the nearest trigger symbol (or to 0), then
    /// skips leading spaces without passing `cursor`.
    pub fn find_token_start<B: TextBuffer + ?Sized>(&self, text: &B, cursor: usize) -> usize {
        check_cursor(text, cursor);

        let walked = text
            .chars_before(cursor)
            .take_while(|&ch| !self.triggers.contains_symbol(ch))
            .count();
        let start = cursor - walked;

        let spaces = text
            .chars_from(start)
            .take(cursor - start)
            .take_while(|&ch| ch == ' ')
            .count();
        start + spaces
    }

    /// End of the token starting at `cursor`: the next trigger symbol or the buffer end.
    pub fn find_token_end<B: TextBuffer + ?Sized>(&self, text: &B, cursor: usize) -> usize {
        check_cursor(text, cursor);

        let run = text
            .chars_from(cursor)
            .take_while(|&ch| !self.triggers.contains_symbol(ch))
            .count();
        cursor + run
    }

    pub fn token_bounds<B: TextBuffer + ?Sized>(&self, text: &B, cursor: usize) -> TokenBounds {
        TokenBounds {
            start: self.find_token_start(text, cursor),
            end: self.find_token_end(text, cursor),
        }
    }

    /// Text the host filters suggestions against: `text[start..cursor]`
    pub fn token_query<B: TextBuffer + ?Sized>(&self, text: &B, cursor: usize) -> String {
        let start = self.find_token_start(text, cursor);
        text.slice(start..cursor)
    }

    /// The trigger whose symbol opens the token under the cursor, None when
    /// the token runs back to the buffer start.
    pub fn token_trigger<B: TextBuffer + ?Sized>(&self, text: &B, cursor: usize) -> Option<Trigger> {
        check_cursor(text, cursor);

        text.chars_before(cursor)
            .find(|&ch| self.triggers.contains_symbol(ch))
            .and_then(|ch| self.triggers.trigger_for(ch))
    }

    /// Prepare an accepted token for insertion, keeping its style spans.
    ///
    /// A bare trigger (`"#"`, `"@  "`) is returned unchanged. Text that already
    /// ends in a space is returned unchanged. Anything else gets one space
    /// appended, with the original spans copied over the original char range.
    pub fn terminate_token<S: Clone>(&self, text: &StyledText<S>) -> StyledText<S> {
        if !self.needs_terminator(text) {
            return text.clone();
        }

        let len = text.len_chars();
        let mut terminated = StyledText::new(format!("{} ", text.as_str()));
        text.copy_spans_into(0..len, &mut terminated, 0);
        terminated
    }

    /// [`terminate_token`](Self::terminate_token) for plain text
    pub fn terminate_token_str(&self, text: &str) -> String {
        if self.needs_terminator(text) {
            format!("{} ", text)
        } else {
            text.to_string()
        }
    }

    fn needs_terminator<B: TextBuffer + ?Sized>(&self, text: &B) -> bool {
        let mut before_spaces = text.chars_before(text.len_chars()).skip_while(|&ch| ch == ' ');
        let trailing_space = text.chars_before(text.len_chars()).next() == Some(' ');

        match before_spaces.next() {
            Some(ch) if self.triggers.contains_symbol(ch) => false,
            _ => !trailing_space,
        }
    }
}

fn check_cursor<B: TextBuffer + ?Sized>(text: &B, cursor: usize) {
    let len = text.len_chars();
    assert!(
        cursor <= len,
        "cursor {} out of range for buffer of {} chars",
        cursor,
        len
    );
}
