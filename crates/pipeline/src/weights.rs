//! Scoring weights.

/// Signed weight of every scoring criterion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Per liked genre the movie carries
    pub liked_genre: f64,
    /// Per disliked genre the movie carries
    pub disliked_genre: f64,
    /// Movie year inside the requested window
    pub year_match: f64,
    /// Movie year outside the requested window
    pub year_miss: f64,
    /// Per genre shared with each liked movie
    pub shared_genre: f64,
    pub disliked_movie: f64,
    /// Movie was in the previous recommendation list
    pub repeat: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            liked_genre: 2.0,
            disliked_genre: -3.0,
            year_match: 1.0,
            year_miss: -0.5,
            shared_genre: 0.5,
            disliked_movie: -10.0,
            repeat: -5.0,
        }
    }
}
