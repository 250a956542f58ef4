use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use socialtext::extract::{hashtags, mentions};
use socialtext::{
    ActiveSource, Composer, ProviderSwap, SocialTokenizer, TextBuffer, TokenBounds, TriggerConfig,
    TriggerSet,
};

mod cli;

use cli::{CliArgs, Command};

#[derive(Debug, Serialize)]
struct BoundsReport {
    cursor: usize,
    start: usize,
    end: usize,
    token: String,
    query: String,
}

#[derive(Debug, Serialize)]
struct SwapReport {
    /// Char offset of the typed trigger symbol
    offset: usize,
    #[serde(flatten)]
    swap: ProviderSwap,
}

#[derive(Debug, Serialize)]
struct ExtractReport {
    hashtags: Vec<String>,
    mentions: Vec<String>,
}

fn bounds(config: &TriggerConfig, text: &str, cursor: Option<usize>, json: bool) -> Result<()> {
    let len = text.len_chars();
    let cursor = cursor.unwrap_or(len);
    if cursor > len {
        bail!("cursor {} is past the end of the text ({} chars)", cursor, len);
    }

    let tokenizer = SocialTokenizer::new(TriggerSet::from_config(config));
    let TokenBounds { start, end } = tokenizer.token_bounds(text, cursor);
    let report = BoundsReport {
        cursor,
        start,
        end,
        token: text.slice(start..end),
        query: tokenizer.token_query(text, cursor),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}..{} token={:?} query={:?}",
            report.start, report.end, report.token, report.query
        );
    }
    Ok(())
}

fn terminate(config: &TriggerConfig, token: &str, json: bool) -> Result<()> {
    let tokenizer = SocialTokenizer::new(TriggerSet::from_config(config));
    let committed = tokenizer.terminate_token_str(token);
    if json {
        println!("{}", serde_json::to_string(&committed)?);
    } else {
        println!("{:?}", committed);
    }
    Ok(())
}

fn replay(config: &TriggerConfig, text: &str, json: bool) -> Result<()> {
    let mut composer = Composer::from_text("", config);
    let mut swaps = Vec::new();
    for ch in text.chars() {
        let offset = composer.cursor();
        if let Some(swap) = composer.insert_char(ch) {
            swaps.push(SwapReport { offset, swap });
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&swaps)?);
        return Ok(());
    }

    for report in &swaps {
        let previous = match report.swap.previous {
            ActiveSource::Inactive => "none".to_string(),
            ActiveSource::Active(trigger) => trigger.to_string(),
        };
        println!("{}: {} -> {}", report.offset, previous, report.swap.source);
    }
    if swaps.is_empty() {
        println!("no source swaps");
    }
    Ok(())
}

fn extract(config: &TriggerConfig, text: &str, json: bool) -> Result<()> {
    let triggers = TriggerSet::from_config(config);
    let report = ExtractReport {
        hashtags: hashtags(text, &triggers),
        mentions: mentions(text, &triggers),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("hashtags: {}", report.hashtags.join(", "));
        println!("mentions: {}", report.mentions.join(", "));
    }
    Ok(())
}

fn main() -> Result<()> {
    socialtext::logging::init();

    let args = CliArgs::parse();
    let config = args.load_config()?;
    tracing::debug!(?config, "configuration loaded");

    match &args.command {
        Command::Bounds { text, cursor } => bounds(&config, text, *cursor, args.json),
        Command::Terminate { token } => terminate(&config, token, args.json),
        Command::Replay { text } => replay(&config, text, args.json),
        Command::Extract { text } => extract(&config, text, args.json),
    }
}
