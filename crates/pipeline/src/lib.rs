//! Scoring and ranking of catalog movies against a user's preferences.
//!
//! This crate provides:
//! - Signal trait and implementations for the additive score terms
//! - Scorer for composing signals
//! - Recommender for cold-start and scored top-k selection
//!
//! ## Architecture
//! A recommendation request runs in stages:
//! 1. Cold-start check: no positive signal means popularity ranking
//! 2. Each signal contributes a signed term per movie; the Scorer sums them
//! 3. The Recommender sorts, takes the top k, and records them on the state
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Recommender, ScoringWeights};
//!
//! let recommender = Recommender::with_weights(catalog.clone(), &ScoringWeights::default());
//! let movies = recommender.recommend(&mut state, 5);
//! ```

pub mod ranker;
pub mod scorer;
pub mod signals;
pub mod traits;
pub mod weights;

// Re-export main types
pub use ranker::{DEFAULT_TOP_K, Recommender, ScoredMovie};
pub use scorer::Scorer;
pub use traits::Signal;
pub use weights::ScoringWeights;
