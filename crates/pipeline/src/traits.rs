//! Core traits for the scoring pipeline.
//!
//! This module defines the Signal trait: one independent, signed
//! contribution to a movie's score.

use catalog::Movie;
use preferences::PreferenceState;

/// One additive scoring criterion.
///
/// All signals must implement this trait to be used in the Scorer.
///
/// ## Design Note
/// - `Send + Sync` lets the scorer evaluate the catalog in parallel
/// - Signals only read the state; the ranker owns the single mutation
///   (`last_recommendations`) after scoring finishes
pub trait Signal: Send + Sync {
    /// Returns the name of this signal (for logging/debugging)
    fn name(&self) -> &str;

    /// This signal's contribution to `movie`'s score, 0.0 when it doesn't apply
    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64;
}
