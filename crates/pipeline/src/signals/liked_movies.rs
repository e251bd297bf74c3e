//! Rewards genre overlap with movies the user said they liked.

use crate::traits::Signal;
use catalog::{Catalog, Movie};
use preferences::PreferenceState;
use std::sync::Arc;

/// For every liked movie other than the one being scored, adds
/// `per_shared_genre` times the number of genres the two share.
///
/// ## Algorithm
/// 1. Skip the liked id if it is the movie itself
/// 2. Skip liked ids missing from the catalog
/// 3. Count distinct shared genre tags
pub struct LikedMovieSimilaritySignal {
    catalog: Arc<Catalog>,
    per_shared_genre: f64,
}

impl LikedMovieSimilaritySignal {
    /// Create a new LikedMovieSimilaritySignal.
    ///
    /// # Arguments
    /// * `catalog` - Shared catalog for resolving liked ids
    /// * `per_shared_genre` - Weight per shared genre (typically 0.5)
    pub fn new(catalog: Arc<Catalog>, per_shared_genre: f64) -> Self {
        Self {
            catalog,
            per_shared_genre,
        }
    }
}

impl Signal for LikedMovieSimilaritySignal {
    fn name(&self) -> &str {
        "LikedMovieSimilaritySignal"
    }

    fn score(&self, movie: &Movie, state: &PreferenceState) -> f64 {
        let shared: usize = state
            .liked_movies()
            .iter()
            .filter(|&&liked_id| liked_id != movie.id)
            .filter_map(|&liked_id| self.catalog.get_movie(liked_id))
            .map(|liked| movie.shared_genres(liked))
            .sum();

        shared as f64 * self.per_shared_genre
    }
}
