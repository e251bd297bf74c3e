//! Flat penalty for movies the user disliked.

use crate::traits::Signal;
use catalog::Movie;
use preferences::PreferenceState;

pub struct DislikedMovieSignal {
    penalty: f64,
}

impl DislikedMovieSignal {
    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }
}

impl Signal for DislikedMovieSignal {
    fn name(&self) -> &str {
        "DislikedMovieSignal"
    }

    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        if state.disliked_movies().contains(&movie.id) {
            self.penalty
        } else {
            0.0
        }
    }
}
