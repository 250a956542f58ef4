//! Suggestion source routing driven by single-character insertions.
//!
//! The router is a small state machine over [`ActiveSource`]. Typing an
//! enabled trigger symbol selects that trigger's suggestion source; any other
//! edit leaves the selection alone, so a suggestion session outlives ordinary
//! typing until the host calls [`TriggerRouter::reset`].

use std::collections::HashMap;

use serde::Serialize;

use crate::buffer::TextBuffer;
use crate::trigger::{Trigger, TriggerSet};

/// Which suggestion source the host should currently query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveSource {
    /// No trigger typed yet
    #[default]
    Inactive,
    Active(Trigger),
}

impl ActiveSource {
    pub fn trigger(self) -> Option<Trigger> {
        match self {
            ActiveSource::Inactive => None,
            ActiveSource::Active(trigger) => Some(trigger),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, ActiveSource::Active(_))
    }
}

/// Emitted once per change of the active source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderSwap {
    pub previous: ActiveSource,
    pub source: Trigger,
}

/// Tracks the active suggestion source and the provider registered per trigger.
///
/// `P` is whatever the host uses as a suggestion provider handle.
#[derive(Debug)]
pub struct TriggerRouter<P> {
    triggers: TriggerSet,
    active: ActiveSource,
    providers: HashMap<Trigger, P>,
}

impl<P> TriggerRouter<P> {
    pub fn new(triggers: TriggerSet) -> Self {
        Self {
            triggers,
            active: ActiveSource::Inactive,
            providers: HashMap::new(),
        }
    }

    pub fn triggers(&self) -> &TriggerSet {
        &self.triggers
    }

    /// Replace the enabled trigger set. An active source whose trigger is no
    /// longer enabled falls back to `Inactive`.
    pub fn set_triggers(&mut self, triggers: TriggerSet) {
        if let Some(trigger) = self.active.trigger() {
            if !triggers.is_enabled(trigger) {
                tracing::debug!(%trigger, "active trigger disabled, deactivating");
                self.active = ActiveSource::Inactive;
            }
        }
        self.triggers = triggers;
    }

    pub fn active(&self) -> ActiveSource {
        self.active
    }

    /// Register the provider for `trigger`, returning the one it replaces
    pub fn set_provider(&mut self, trigger: Trigger, provider: P) -> Option<P> {
        self.providers.insert(trigger, provider)
    }

    pub fn remove_provider(&mut self, trigger: Trigger) -> Option<P> {
        self.providers.remove(&trigger)
    }

    pub fn provider(&self, trigger: Trigger) -> Option<&P> {
        self.providers.get(&trigger)
    }

    /// Provider for the active trigger, if one is active and registered
    pub fn active_provider(&self) -> Option<&P> {
        self.active.trigger().and_then(|t| self.providers.get(&t))
    }

    /// Host cancelled the suggestion session
    pub fn reset(&mut self) {
        self.active = ActiveSource::Inactive;
    }

    /// Feed one edit: `inserted_len` chars were inserted at `insertion_start`
    /// of `text` (the buffer after the edit).
    ///
    /// Only single-char insertions can switch the source; pastes, deletions and
    /// replacements of any other length are ignored.
    ///
    /// # Panics
    ///
    /// If the inserted range lies outside `text`.
    pub fn on_text_inserted<B: TextBuffer + ?Sized>(
        &mut self,
        text: &B,
        insertion_start: usize,
        inserted_len: usize,
    ) -> Option<ProviderSwap> {
        let len = text.len_chars();
        assert!(
            insertion_start + inserted_len <= len,
            "insertion {}..{} out of range for buffer of {} chars",
            insertion_start,
            insertion_start + inserted_len,
            len
        );

        if inserted_len != 1 {
            tracing::trace!(inserted_len, "ignoring multi-char edit");
            return None;
        }

        let ch = text.char_at(insertion_start)?;
        self.on_char_inserted(ch)
    }

    /// Route a single typed character
    pub fn on_char_inserted(&mut self, ch: char) -> Option<ProviderSwap> {
        let trigger = self.triggers.trigger_for(ch)?;
        if self.active == ActiveSource::Active(trigger) {
            return None;
        }

        let previous = std::mem::replace(&mut self.active, ActiveSource::Active(trigger));
        tracing::debug!(?previous, source = %trigger, "suggestion source swapped");
        Some(ProviderSwap {
            previous,
            source: trigger,
        })
    }
}
