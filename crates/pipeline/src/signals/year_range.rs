//! Rewards movies inside the requested release window.

use crate::traits::Signal;
use catalog::Movie;
use preferences::PreferenceState;

/// With a year window set: `match_weight` when the movie's year falls inside
/// it (inclusive), `miss_weight` otherwise. No window, no contribution.
pub struct YearRangeSignal {
    match_weight: f64,
    miss_weight: f64,
}

impl YearRangeSignal {
    pub fn new(match_weight: f64, miss_weight: f64) -> Self {
        Self {
            match_weight,
            miss_weight,
        }
    }
}

impl Signal for YearRangeSignal {
    fn name(&self) -> &str {
        "YearRangeSignal"
    }

    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        match state.year_range() {
            Some(range) if range.contains(movie.year) => self.match_weight,
            Some(_) => self.miss_weight,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preferences::YearRange;

    #[test]
    fn test_year_range_bounds_are_inclusive() {
        let signal = YearRangeSignal::new(1.0, -0.5);
        let mut state = PreferenceState::new();
        state.set_year_range(YearRange::new(2015, 2025));

        let at_min = Movie::new(30, "Inside Out", 2015, "animation", 8.2);
        let at_max = Movie::new(60, "Future Film", 2025, "drama", 7.0);
        let before = Movie::new(29, "Toy Story", 1995, "animation", 8.3);

        assert_eq!(signal.score(&at_min, &state), 1.0);
        assert_eq!(signal.score(&at_max, &state), 1.0);
        assert_eq!(signal.score(&before, &state), -0.5);
    }

    #[test]
    fn test_no_range_no_contribution() {
        let signal = YearRangeSignal::new(1.0, -0.5);
        let movie = Movie::new(29, "Toy Story", 1995, "animation", 8.3);
        assert_eq!(signal.score(&movie, &PreferenceState::new()), 0.0);
    }
}
