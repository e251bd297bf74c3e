//! The Scorer sums independent signals into one score per movie.
//!
//! This module provides the main Scorer struct that chains signals together
//! using the builder pattern.

use crate::signals::{
    DislikedMovieSignal, GenreAffinitySignal, LikedMovieSimilaritySignal, RepeatPenaltySignal,
    YearRangeSignal,
};
use crate::traits::Signal;
use crate::weights::ScoringWeights;
use catalog::{Catalog, Movie};
use preferences::PreferenceState;
use std::sync::Arc;

/// Chains multiple signals together into one additive score.
///
/// ## Usage
/// ```ignore
/// let scorer = Scorer::new()
///     .add_signal(GenreAffinitySignal::new(2.0, -3.0))
///     .add_signal(RepeatPenaltySignal::new(-5.0));
///
/// let score = scorer.score(movie, &state);
/// ```
pub struct Scorer {
    signals: Vec<Box<dyn Signal>>,
}

impl Scorer {
    /// Create a new empty Scorer. Every movie scores 0.0.
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    /// The five standard signals with the given weights
    pub fn standard(catalog: Arc<Catalog>, weights: &ScoringWeights) -> Self {
        Scorer::new()
            .add_signal(GenreAffinitySignal::new(
                weights.liked_genre,
                weights.disliked_genre,
            ))
            .add_signal(YearRangeSignal::new(weights.year_match, weights.year_miss))
            .add_signal(LikedMovieSimilaritySignal::new(catalog, weights.shared_genre))
            .add_signal(DislikedMovieSignal::new(weights.disliked_movie))
            .add_signal(RepeatPenaltySignal::new(weights.repeat))
    }

    /// Add a signal to the scorer (builder pattern).
    pub fn add_signal(mut self, signal: impl Signal + 'static) -> Self {
        self.signals.push(Box::new(signal));
        self
    }

    /// Names of the configured signals, in evaluation order
    pub fn signal_names(&self) -> Vec<&str> {
        self.signals.iter().map(|s| s.name()).collect()
    }

    /// Sum of every signal's contribution, starting from 0.0
    pub fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        self.signals
            .iter()
            .map(|signal| signal.score(movie, state))
            .sum()
    }

    /// Per-signal breakdown of a movie's score
    pub fn explain(&self, movie: &Movie, state: &PreferenceState) -> Vec<(&str, f64)> {
        self.signals
            .iter()
            .map(|signal| {
                let contribution = signal.score(movie, state);
                tracing::trace!("{} -> {} for movie {}", signal.name(), contribution, movie.id);
                (signal.name(), contribution)
            })
            .collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preferences::YearRange;

    fn matrix() -> Movie {
        Movie::new(7, "The Matrix", 1999, "action|sci-fi", 8.7)
    }

    #[test]
    fn test_empty_scorer() {
        let scorer = Scorer::new();
        let mut state = PreferenceState::new();
        state.like_genre("action");
        assert_eq!(scorer.score(&matrix(), &state), 0.0);
    }

    #[test]
    fn test_single_signal() {
        let scorer = Scorer::new().add_signal(RepeatPenaltySignal::new(-5.0));
        let mut state = PreferenceState::new();
        state.set_last_recommendations(vec![7]);
        assert_eq!(scorer.score(&matrix(), &state), -5.0);
    }

    #[test]
    fn test_standard_scorer_sums_every_term() {
        let catalog = Arc::new(Catalog::sample().unwrap());
        let scorer = Scorer::standard(catalog, &ScoringWeights::default());
        assert_eq!(scorer.signal_names().len(), 5);

        let mut state = PreferenceState::new();
        state.like_genre("action"); // +2
        state.dislike_genre("sci-fi"); // -3
        state.set_year_range(YearRange::new(2015, 2025)); // -0.5
        state.like_movie(9); // Inception shares action+sci-fi: +1.0
        state.dislike_movie(7); // -10
        state.set_last_recommendations(vec![7]); // -5

        assert_eq!(scorer.score(&matrix(), &state), -15.5);

        let breakdown = scorer.explain(&matrix(), &state);
        let total: f64 = breakdown.iter().map(|(_, v)| v).sum();
        assert_eq!(total, -15.5);
        assert_eq!(breakdown[0], ("GenreAffinitySignal", -1.0));
    }
}
