//! Benchmarks for token boundary scans and trigger routing
//!
//! Run with: cargo bench token_bounds

use socialtext::{
    RopeBuffer, SocialTokenizer, StringBuffer, TriggerConfig, TriggerRouter, TriggerSet,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn tokenizer() -> SocialTokenizer {
    SocialTokenizer::new(TriggerSet::from_config(&TriggerConfig::default()))
}

/// Worst case: no trigger anywhere, so the start scan walks the whole prefix
fn plain_text(words: usize) -> String {
    "lorem ipsum dolor sit amet ".repeat(words / 5)
}

/// Typical post: a trigger every few words
fn social_text(words: usize) -> String {
    "check out #rust with @ferris today ".repeat(words / 6)
}

// ============================================================================
// Boundary scans
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn bounds_string_no_trigger(bencher: divan::Bencher, words: usize) {
    let t = tokenizer();
    let buffer = StringBuffer::from_text(&plain_text(words));
    let cursor = buffer.as_str().chars().count();
    bencher.bench(|| t.token_bounds(divan::black_box(&buffer), cursor));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn bounds_rope_no_trigger(bencher: divan::Bencher, words: usize) {
    let t = tokenizer();
    let buffer = RopeBuffer::from_text(&plain_text(words));
    let cursor = buffer.rope().len_chars();
    bencher.bench(|| t.token_bounds(divan::black_box(&buffer), cursor));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn bounds_rope_social(bencher: divan::Bencher, words: usize) {
    let t = tokenizer();
    let buffer = RopeBuffer::from_text(&social_text(words));
    let cursor = buffer.rope().len_chars() / 2;
    bencher.bench(|| t.token_bounds(divan::black_box(&buffer), cursor));
}

#[divan::bench]
fn terminate_token() -> String {
    tokenizer().terminate_token_str(divan::black_box("#rustlang"))
}

// ============================================================================
// Routing
// ============================================================================

#[divan::bench(args = [100, 1_000])]
fn route_typed_text(words: usize) -> usize {
    let text = social_text(words);
    let mut router: TriggerRouter<()> =
        TriggerRouter::new(TriggerSet::from_config(&TriggerConfig::default()));
    text.chars()
        .filter_map(|ch| router.on_char_inserted(ch))
        .count()
}
