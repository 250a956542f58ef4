//! Trigger configuration persistence
//!
//! Stores trigger preferences in `~/.config/socialtext/config.yaml`

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Which trigger symbols are recognized and how suggestions are filtered.
///
/// Every field has a serde default, so a partial YAML file only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_true")]
    pub hashtag_enabled: bool,

    #[serde(default = "default_true")]
    pub mention_enabled: bool,

    #[serde(default = "default_hashtag_symbol")]
    pub hashtag_symbol: char,

    #[serde(default = "default_mention_symbol")]
    pub mention_symbol: char,

    /// Minimum token length (in chars) before suggestions are queried
    #[serde(default = "default_threshold")]
    pub threshold: usize,

    /// Upper bound on suggestions returned per query
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_true() -> bool {
    true
}

fn default_hashtag_symbol() -> char {
    '#'
}

fn default_mention_symbol() -> char {
    '@'
}

fn default_threshold() -> usize {
    1
}

fn default_max_suggestions() -> usize {
    10
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            hashtag_enabled: default_true(),
            mention_enabled: default_true(),
            hashtag_symbol: default_hashtag_symbol(),
            mention_symbol: default_mention_symbol(),
            threshold: default_threshold(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl TriggerConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path =
            crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Reject symbol bindings the tokenizer cannot work with
    pub fn validate(&self) -> Result<()> {
        for symbol in [self.hashtag_symbol, self.mention_symbol] {
            if symbol.is_whitespace() {
                bail!("Trigger symbol {:?} must not be whitespace", symbol);
            }
        }
        if self.hashtag_symbol == self.mention_symbol {
            bail!(
                "Hashtag and mention triggers share the symbol {:?}",
                self.hashtag_symbol
            );
        }
        Ok(())
    }
}
