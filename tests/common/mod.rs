//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use socialtext::{
    Composer, ProviderSwap, SocialTokenizer, StaticSource, Trigger, TriggerConfig, TriggerRouter,
    TriggerSet,
};

/// Trigger set with both `#` and `@` enabled
pub fn default_triggers() -> TriggerSet {
    TriggerSet::from_config(&TriggerConfig::default())
}

pub fn test_tokenizer() -> SocialTokenizer {
    SocialTokenizer::new(default_triggers())
}

/// Router with string provider handles named after each trigger
pub fn test_router(config: &TriggerConfig) -> TriggerRouter<&'static str> {
    let mut router = TriggerRouter::new(TriggerSet::from_config(config));
    router.set_provider(Trigger::Hashtag, "hashtag-adapter");
    router.set_provider(Trigger::Mention, "mention-adapter");
    router
}

/// Empty composer with small hashtag and mention sources
pub fn test_composer(config: &TriggerConfig) -> Composer {
    let mut composer = Composer::from_text("", config);
    composer.set_source(
        Trigger::Hashtag,
        StaticSource::new(["rust", "rustlang", "ruby", "android"]),
    );
    composer.set_source(
        Trigger::Mention,
        StaticSource::new(["alice", "alex", "bob"]),
    );
    composer
}

/// Type `text` one char at a time, collecting every provider swap
pub fn type_text(composer: &mut Composer, text: &str) -> Vec<ProviderSwap> {
    text.chars()
        .filter_map(|ch| composer.insert_char(ch))
        .collect()
}

/// Texts used for exhaustive cursor sweeps
pub const SAMPLE_TEXTS: &[&str] = &[
    "",
    " ",
    "#",
    "@",
    "plain text without triggers",
    "#rust",
    "hello #rust and @alice",
    "#  spaced   @  out  ",
    "##@@",
    "trailing #",
    "café #thé @zoë",
    "line one #tag\nline two @who",
];
