//! Extract the hashtags and mentions present in a finished text.

use std::collections::HashSet;

use crate::trigger::{Trigger, TriggerSet};

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Names following each occurrence of `trigger`'s symbol, in order of first
/// appearance and without duplicates. Empty names (`"# "`) are skipped.
/// A disabled trigger yields nothing.
pub fn extract(text: &str, triggers: &TriggerSet, trigger: Trigger) -> Vec<String> {
    let Some(symbol) = triggers.symbol_for(trigger) else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut seen = HashSet::new();

    for (i, _) in text.match_indices(symbol) {
        let name: String = text[i + symbol.len_utf8()..]
            .chars()
            .take_while(|&ch| is_name_char(ch))
            .collect();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    names
}

pub fn hashtags(text: &str, triggers: &TriggerSet) -> Vec<String> {
    extract(text, triggers, Trigger::Hashtag)
}

pub fn mentions(text: &str, triggers: &TriggerSet) -> Vec<String> {
    extract(text, triggers, Trigger::Mention)
}
