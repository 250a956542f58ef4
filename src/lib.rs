//! socialtext - hashtag and mention tokens for text inputs
//!
//! This crate provides the token-boundary and suggestion-routing logic behind
//! a text input that autocompletes `#hashtags` and `@mentions`:
//!
//! - [`SocialTokenizer`] finds the token under the cursor and terminates
//!   accepted tokens
//! - [`TriggerRouter`] picks the active suggestion source as characters are typed
//! - [`Composer`] wires both to an editable buffer
//!
//! # Example
//!
//! ```
//! use socialtext::{Composer, StaticSource, Trigger, TriggerConfig};
//!
//! let mut composer = Composer::from_text("", &TriggerConfig::default());
//! composer.set_source(Trigger::Hashtag, StaticSource::new(["rust", "ruby"]));
//!
//! for ch in "learning #ru".chars() {
//!     composer.insert_char(ch);
//! }
//! assert_eq!(composer.query().as_deref(), Some("ru"));
//!
//! composer.commit("rust");
//! assert_eq!(composer.text(), "learning #rust ");
//! ```

pub mod buffer;
pub mod composer;
pub mod config;
pub mod config_paths;
pub mod extract;
pub mod logging;
pub mod router;
pub mod styled;
pub mod suggest;
pub mod tokenizer;
pub mod trigger;

// Re-export commonly used types
pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use composer::Composer;
pub use config::TriggerConfig;
pub use router::{ActiveSource, ProviderSwap, TriggerRouter};
pub use styled::{StyleSpan, StyledText};
pub use suggest::{StaticSource, Suggestion, SuggestionSource};
pub use tokenizer::{SocialTokenizer, TokenBounds};
pub use trigger::{Trigger, TriggerSet};
