//! Composer - a text input that wires the tokenizer and router to a buffer.
//!
//! This is the host side of the two components: it owns the buffer and the
//! cursor, reports every edit to the router, and uses the tokenizer to find
//! and replace the in-progress token when a suggestion is accepted.

use crate::buffer::{StringBuffer, TextBuffer, TextBufferMut};
use crate::config::TriggerConfig;
use crate::router::{ActiveSource, ProviderSwap, TriggerRouter};
use crate::suggest::{Suggestion, SuggestionSource};
use crate::tokenizer::{SocialTokenizer, TokenBounds};
use crate::trigger::{Trigger, TriggerSet};

/// Editable text with hashtag/mention suggestion routing.
///
/// Generic over the buffer type B (StringBuffer for short inputs, RopeBuffer for long posts).
pub struct Composer<B: TextBufferMut = StringBuffer> {
    buffer: B,
    /// Char offset, `0 <= cursor <= buffer.len_chars()`
    cursor: usize,
    tokenizer: SocialTokenizer,
    router: TriggerRouter<Box<dyn SuggestionSource>>,
    threshold: usize,
    max_suggestions: usize,
}

impl<B: TextBufferMut> Composer<B> {
    /// Wrap `buffer` with the cursor at its end
    pub fn new(buffer: B, config: &TriggerConfig) -> Self {
        let triggers = TriggerSet::from_config(config);
        let cursor = buffer.len_chars();
        Self {
            buffer,
            cursor,
            tokenizer: SocialTokenizer::new(triggers.clone()),
            router: TriggerRouter::new(triggers),
            threshold: config.threshold,
            max_suggestions: config.max_suggestions,
        }
    }

    /// Swap in a new configuration. The tokenizer and router always receive
    /// the same trigger set.
    pub fn apply_config(&mut self, config: &TriggerConfig) {
        let triggers = TriggerSet::from_config(config);
        self.tokenizer = SocialTokenizer::new(triggers.clone());
        self.router.set_triggers(triggers);
        self.threshold = config.threshold;
        self.max_suggestions = config.max_suggestions;
    }

    /// Register the suggestion source for `trigger`
    pub fn set_source(&mut self, trigger: Trigger, source: impl SuggestionSource + 'static) {
        self.router.set_provider(trigger, Box::new(source));
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// # Panics
    ///
    /// If `offset` is past the end of the buffer.
    pub fn set_cursor(&mut self, offset: usize) {
        let len = self.buffer.len_chars();
        assert!(
            offset <= len,
            "cursor {} out of range for buffer of {} chars",
            offset,
            len
        );
        self.cursor = offset;
    }

    pub fn tokenizer(&self) -> &SocialTokenizer {
        &self.tokenizer
    }

    pub fn active(&self) -> ActiveSource {
        self.router.active()
    }

    /// Host cancelled the suggestion session (e.g. popup dismissed)
    pub fn dismiss(&mut self) {
        self.router.reset();
    }

    /// Type one character at the cursor
    pub fn insert_char(&mut self, ch: char) -> Option<ProviderSwap> {
        let at = self.cursor;
        self.buffer.insert_char(at, ch);
        self.cursor += 1;
        self.router.on_text_inserted(&self.buffer, at, 1)
    }

    /// Insert `text` at the cursor as a single edit (a paste when longer than one char)
    pub fn insert_str(&mut self, text: &str) -> Option<ProviderSwap> {
        let at = self.cursor;
        let inserted = text.chars().count();
        self.buffer.insert(at, text);
        self.cursor += inserted;
        self.router.on_text_inserted(&self.buffer, at, inserted)
    }

    /// Bounds of the token under the cursor
    pub fn token_bounds(&self) -> TokenBounds {
        self.tokenizer.token_bounds(&self.buffer, self.cursor)
    }

    /// The in-progress token text to filter suggestions with.
    ///
    /// None while no source is active, when the token is not opened by a
    /// trigger symbol, or while it is shorter than the configured threshold.
    pub fn query(&self) -> Option<String> {
        if !self.router.active().is_active() {
            return None;
        }
        self.tokenizer.token_trigger(&self.buffer, self.cursor)?;

        let start = self.tokenizer.find_token_start(&self.buffer, self.cursor);
        if self.cursor - start < self.threshold {
            return None;
        }
        Some(self.buffer.slice(start..self.cursor))
    }

    /// Suggestions from the active source for the current query
    pub fn suggestions(&self) -> Vec<Suggestion> {
        let Some(query) = self.query() else {
            return Vec::new();
        };
        match self.router.active_provider() {
            Some(source) => source.suggestions(&query, self.max_suggestions),
            None => Vec::new(),
        }
    }

    /// Replace the in-progress token with `replacement`, terminated.
    ///
    /// The trigger symbol itself stays in the buffer; only the text between it
    /// and the cursor is replaced. Returns the inserted text.
    pub fn commit(&mut self, replacement: &str) -> String {
        let start = self.tokenizer.find_token_start(&self.buffer, self.cursor);
        let committed = self.tokenizer.terminate_token_str(replacement);
        self.buffer.replace(start..self.cursor, &committed);
        self.cursor = start + committed.chars().count();
        tracing::debug!(start, committed = %committed, "token committed");
        committed
    }
}

impl Composer<StringBuffer> {
    /// Single-line composer with the cursor at the end of `text`
    pub fn from_text(text: &str, config: &TriggerConfig) -> Self {
        Self::new(StringBuffer::from_text(text), config)
    }
}
