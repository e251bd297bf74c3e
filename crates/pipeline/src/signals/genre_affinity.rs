//! Rewards liked genres and penalizes disliked ones.

use crate::traits::Signal;
use catalog::Movie;
use preferences::PreferenceState;

/// Adds `liked_weight` per liked genre the movie carries and
/// `disliked_weight` per disliked genre.
pub struct GenreAffinitySignal {
    liked_weight: f64,
    disliked_weight: f64,
}

impl GenreAffinitySignal {
    pub fn new(liked_weight: f64, disliked_weight: f64) -> Self {
        Self {
            liked_weight,
            disliked_weight,
        }
    }
}

impl Signal for GenreAffinitySignal {
    fn name(&self) -> &str {
        "GenreAffinitySignal"
    }

    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        let liked = state
            .liked_genres()
            .iter()
            .filter(|g| movie.has_genre(g))
            .count();
        let disliked = state
            .disliked_genres()
            .iter()
            .filter(|g| movie.has_genre(g))
            .count();

        liked as f64 * self.liked_weight + disliked as f64 * self.disliked_weight
    }
}
