//! Command-line argument parsing for the `socialtext` tool
//!
//! Supports:
//! - Token boundaries at a cursor
//! - Terminating an accepted token
//! - Replaying typed text through the trigger router
//! - Listing hashtags and mentions

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use socialtext::TriggerConfig;

/// Hashtag and mention token tools
#[derive(Parser, Debug)]
#[command(name = "socialtext", version, about = "Hashtag and mention token tools")]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/socialtext/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the bounds of the token under the cursor
    Bounds {
        text: String,

        /// Cursor as a char offset (defaults to the end of TEXT)
        #[arg(long, value_name = "N")]
        cursor: Option<usize>,
    },

    /// Show the text committed for an accepted token
    Terminate { token: String },

    /// Type TEXT one char at a time and print every suggestion source swap
    Replay { text: String },

    /// List the hashtags and mentions in TEXT
    Extract { text: String },
}

impl CliArgs {
    /// Explicit `--config` must load; the default location falls back to defaults
    pub fn load_config(&self) -> Result<TriggerConfig> {
        match &self.config {
            Some(path) => TriggerConfig::load_from(path),
            None => Ok(TriggerConfig::load()),
        }
    }
}
