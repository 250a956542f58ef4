//! Trigger kinds and the enabled trigger-symbol set.
//!
//! A [`TriggerSet`] is the single piece of configuration shared by the
//! tokenizer and the router. Both receive the same value, so they always agree
//! on which characters open a token.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::TriggerConfig;

/// Identity of an inline trigger kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// `#tag`
    Hashtag,
    /// `@user`
    Mention,
}

impl Trigger {
    /// All trigger kinds, in routing priority order
    pub const ALL: [Trigger; 2] = [Trigger::Hashtag, Trigger::Mention];

    pub fn name(self) -> &'static str {
        match self {
            Trigger::Hashtag => "hashtag",
            Trigger::Mention => "mention",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The enabled triggers and the symbol each one is bound to.
///
/// Order matters: when two enabled triggers share a symbol, the first one
/// registered wins. [`TriggerSet::from_config`] registers hashtag first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSet {
    symbols: Vec<(Trigger, char)>,
}

impl TriggerSet {
    /// An empty set: no character opens a token
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set of enabled triggers from configuration
    pub fn from_config(config: &TriggerConfig) -> Self {
        let mut set = Self::new();
        if config.hashtag_enabled {
            set = set.with(Trigger::Hashtag, config.hashtag_symbol);
        }
        if config.mention_enabled {
            set = set.with(Trigger::Mention, config.mention_symbol);
        }
        set
    }

    /// Enable `trigger` bound to `symbol`, replacing any previous binding
    pub fn with(mut self, trigger: Trigger, symbol: char) -> Self {
        if let Some(entry) = self.symbols.iter_mut().find(|(t, _)| *t == trigger) {
            entry.1 = symbol;
        } else {
            self.symbols.push((trigger, symbol));
        }
        self
    }

    /// Disable `trigger`
    pub fn without(mut self, trigger: Trigger) -> Self {
        self.symbols.retain(|(t, _)| *t != trigger);
        self
    }

    /// Check if `ch` opens a token
    pub fn contains_symbol(&self, ch: char) -> bool {
        self.symbols.iter().any(|&(_, s)| s == ch)
    }

    /// The enabled trigger bound to `ch`, if any
    pub fn trigger_for(&self, ch: char) -> Option<Trigger> {
        self.symbols
            .iter()
            .find(|&&(_, s)| s == ch)
            .map(|&(t, _)| t)
    }

    /// The symbol bound to `trigger`, None if it is disabled
    pub fn symbol_for(&self, trigger: Trigger) -> Option<char> {
        self.symbols
            .iter()
            .find(|&&(t, _)| t == trigger)
            .map(|&(_, s)| s)
    }

    pub fn is_enabled(&self, trigger: Trigger) -> bool {
        self.symbol_for(trigger).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trigger, char)> + '_ {
        self.symbols.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_enables_both() {
        let set = TriggerSet::from_config(&TriggerConfig::default());
        assert_eq!(set.trigger_for('#'), Some(Trigger::Hashtag));
        assert_eq!(set.trigger_for('@'), Some(Trigger::Mention));
        assert_eq!(set.trigger_for('a'), None);
    }

    #[test]
    fn test_disabled_trigger_is_not_a_symbol() {
        let config = TriggerConfig {
            mention_enabled: false,
            ..TriggerConfig::default()
        };
        let set = TriggerSet::from_config(&config);
        assert!(set.contains_symbol('#'));
        assert!(!set.contains_symbol('@'));
        assert!(!set.is_enabled(Trigger::Mention));
    }

    #[test]
    fn test_with_rebinds_existing_trigger() {
        let set = TriggerSet::new()
            .with(Trigger::Hashtag, '#')
            .with(Trigger::Hashtag, '$');
        assert_eq!(set.iter().count(), 1);
        assert_eq!(set.symbol_for(Trigger::Hashtag), Some('$'));
        assert!(!set.contains_symbol('#'));
    }

    #[test]
    fn test_shared_symbol_prefers_first_registered() {
        let set = TriggerSet::new()
            .with(Trigger::Hashtag, '#')
            .with(Trigger::Mention, '#');
        assert_eq!(set.trigger_for('#'), Some(Trigger::Hashtag));
        let set = set.without(Trigger::Hashtag);
        assert_eq!(set.trigger_for('#'), Some(Trigger::Mention));
    }

    #[test]
    fn test_trigger_serializes_lowercase() {
        let json = serde_json::to_string(&Trigger::Mention).unwrap();
        assert_eq!(json, "\"mention\"");
        assert_eq!(Trigger::Hashtag.to_string(), "hashtag");
    }
}
