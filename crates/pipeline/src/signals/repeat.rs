//! Discourages recommending the same movies twice in a row.

use crate::traits::Signal;
use catalog::Movie;
use preferences::PreferenceState;

/// Flat penalty for movies in the previous recommendation list. Stacks with
/// `DislikedMovieSignal`.
pub struct RepeatPenaltySignal {
    penalty: f64,
}

impl RepeatPenaltySignal {
    pub fn new(penalty: f64) -> Self {
        Self { penalty }
    }
}

impl Signal for RepeatPenaltySignal {
    fn name(&self) -> &str {
        "RepeatPenaltySignal"
    }

    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        if state.was_recently_recommended(movie.id) {
            self.penalty
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_penalty() {
        let signal = RepeatPenaltySignal::new(-5.0);
        let shown = Movie::new(1, "Jaws", 1975, "adventure|thriller", 8.0);
        let fresh = Movie::new(2, "Halloween", 1978, "horror|thriller", 7.8);

        let mut state = PreferenceState::new();
        state.set_last_recommendations(vec![1]);

        assert_eq!(signal.score(&shown, &state), -5.0);
        assert_eq!(signal.score(&fresh, &state), 0.0);
    }
}
