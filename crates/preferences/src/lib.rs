//! # Preferences Crate
//!
//! Everything that turns chat text into per-user preference signals.
//!
//! ## Components
//!
//! - **types**: `PreferenceState`, the per-user record, and
//!   `PreferenceUpdate`, the only way to mutate it
//! - **lexicon**: canonical genre tags and their surface synonyms
//! - **patterns**: the six named recognition patterns, compiled from a lexicon
//! - **extractor**: applies the patterns to one message
//!
//! ## Example Usage
//!
//! ```ignore
//! use preferences::{Extractor, PreferenceState};
//! use catalog::Catalog;
//! use std::sync::Arc;
//!
//! let extractor = Extractor::with_default_lexicon(Arc::new(Catalog::sample()?))?;
//! let mut state = PreferenceState::new();
//! extractor.extract("I love action movies from 2000 to 2010", &mut state);
//! assert!(state.liked_genres().contains("action"));
//! ```

pub mod error;
pub mod extractor;
pub mod lexicon;
pub mod patterns;
pub mod types;

pub use error::PatternError;
pub use extractor::{DEFAULT_CLASSIC_WINDOW, DEFAULT_RECENT_WINDOW, Extractor};
pub use lexicon::GenreLexicon;
pub use patterns::{PatternKind, PatternSet};
pub use types::{PreferenceState, PreferenceUpdate, Sentiment, YearRange};
