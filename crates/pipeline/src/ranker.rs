//! # Ranker
//!
//! Turns a scored catalog into the top-k recommendation list.
//!
//! ## Algorithm
//! 1. Cold start (no liked genre, no liked movie): rank by popularity
//! 2. Otherwise score every movie with the Scorer (in parallel)
//! 3. Stable sort by descending score, so ties keep catalog order
//! 4. Take the first k and resolve them by catalog position, in that order
//! 5. Scored lists only: replace the state's `last_recommendations` with
//!    the chosen ids

use crate::scorer::Scorer;
use crate::weights::ScoringWeights;
use catalog::{Catalog, Movie, MovieId};
use preferences::PreferenceState;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const DEFAULT_TOP_K: usize = 5;

/// One catalog entry with its computed score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMovie {
    pub movie_id: MovieId,
    /// Index into the catalog arena
    pub position: usize,
    pub score: f64,
}

/// Scores the catalog against a user's preferences and picks the top k
pub struct Recommender {
    catalog: Arc<Catalog>,
    scorer: Scorer,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, scorer: Scorer) -> Self {
        Self { catalog, scorer }
    }

    /// Recommender using the standard signals with the given weights
    pub fn with_weights(catalog: Arc<Catalog>, weights: &ScoringWeights) -> Self {
        let scorer = Scorer::standard(catalog.clone(), weights);
        Self::new(catalog, scorer)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Top-k movies for `state`, best first.
    ///
    /// A scored list replaces `state.last_recommendations` with the returned
    /// ids. A cold-start list leaves it untouched.
    #[instrument(skip(self, state))]
    pub fn recommend(&self, state: &mut PreferenceState, k: usize) -> Vec<Movie> {
        if state.is_cold_start() {
            debug!("Cold start, ranking by popularity");
            return self.popular(k).into_iter().cloned().collect();
        }

        let mut ranked = self.rank(state);
        ranked.truncate(k);
        debug!(
            "Top scores: {:?}",
            ranked.iter().map(|s| (s.movie_id, s.score)).collect::<Vec<_>>()
        );

        // Resolve through the ordered position list, never a membership filter
        let recommendations: Vec<Movie> = ranked
            .into_iter()
            .filter_map(|s| self.catalog.at(s.position).cloned())
            .collect();

        state.set_last_recommendations(recommendations.iter().map(|m| m.id).collect());
        recommendations
    }

    /// Every catalog movie scored against `state`, highest score first.
    /// Equal scores keep catalog order.
    pub fn rank(&self, state: &PreferenceState) -> Vec<ScoredMovie> {
        let mut scored: Vec<ScoredMovie> = self
            .catalog
            .movies()
            .par_iter()
            .enumerate()
            .map(|(position, movie)| ScoredMovie {
                movie_id: movie.id,
                position,
                // -0.0 must tie with 0.0 under total_cmp
                score: self.scorer.score(movie, state) + 0.0,
            })
            .collect();

        // Stable sort: ties stay in catalog order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// The k most popular movies, ties in catalog order
    pub fn popular(&self, k: usize) -> Vec<&Movie> {
        self.popular_positions(k)
            .into_iter()
            .filter_map(|pos| self.catalog.at(pos))
            .collect()
    }

    fn popular_positions(&self, k: usize) -> Vec<usize> {
        let movies = self.catalog.movies();
        let mut positions: Vec<usize> = (0..movies.len()).collect();
        positions.sort_by(|&a, &b| movies[b].popularity.total_cmp(&movies[a].popularity));
        positions.truncate(k);
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Signal;

    fn create_test_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_movies(vec![
                Movie::new(10, "Quiet Drama", 1990, "drama", 9.0),
                Movie::new(20, "Laughs", 2001, "comedy", 7.0),
                Movie::new(30, "Space Battle", 2012, "action|sci-fi", 6.0),
                Movie::new(40, "Car Chase", 2016, "action", 9.0),
                Movie::new(50, "Robots", 2018, "sci-fi", 5.0),
            ])
            .unwrap(),
        )
    }

    fn recommender() -> Recommender {
        Recommender::with_weights(create_test_catalog(), &ScoringWeights::default())
    }

    fn ids(movies: &[Movie]) -> Vec<MovieId> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_cold_start_by_popularity_stable() {
        let rec = recommender();
        let mut state = PreferenceState::new();

        // 10 and 40 tie at 9.0; catalog order keeps 10 first
        let movies = rec.recommend(&mut state, 3);
        assert_eq!(ids(&movies), vec![10, 40, 20]);
    }

    #[test]
    fn test_cold_start_keeps_last_recommendations() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        rec.recommend(&mut state, 3);
        assert!(state.last_recommendations().is_empty());

        state.set_last_recommendations(vec![50]);
        rec.recommend(&mut state, 3);
        assert_eq!(state.last_recommendations(), &[50]);

        // the first scored list carries no repeat penalty from the cold start
        state.set_last_recommendations(Vec::new());
        rec.recommend(&mut state, 3);
        state.like_genre("drama");
        let movies = rec.recommend(&mut state, 1);
        assert_eq!(ids(&movies), vec![10]);
        assert_eq!(state.last_recommendations(), &[10]);
    }

    #[test]
    fn test_cold_start_ignores_other_signals() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        state.dislike_genre("drama");
        state.dislike_movie(10);
        state.set_year_range(preferences::YearRange::new(2015, 2025));

        let movies = rec.recommend(&mut state, 2);
        assert_eq!(ids(&movies), vec![10, 40]);
    }

    #[test]
    fn test_output_follows_score_not_catalog_order() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        state.like_genre("action");
        state.like_genre("sci-fi");

        // scores: 10:0, 20:0, 30:4, 40:2, 50:2
        let movies = rec.recommend(&mut state, 4);
        assert_eq!(ids(&movies), vec![30, 40, 50, 10]);
        assert_eq!(state.last_recommendations(), &[30, 40, 50, 10]);
    }

    #[test]
    fn test_rank_is_complete_and_sorted() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        state.like_genre("comedy");

        let ranked = rec.rank(&state);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].movie_id, 20);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        // remaining zero scores keep catalog order
        let tail: Vec<MovieId> = ranked[1..].iter().map(|s| s.movie_id).collect();
        assert_eq!(tail, vec![10, 30, 40, 50]);
    }

    #[test]
    fn test_k_larger_than_catalog() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        state.like_genre("drama");
        assert_eq!(rec.recommend(&mut state, 50).len(), 5);
    }

    #[test]
    fn test_k_zero_clears_last_recommendations() {
        let rec = recommender();
        let mut state = PreferenceState::new();
        state.like_genre("comedy");
        state.set_last_recommendations(vec![10]);
        assert!(rec.recommend(&mut state, 0).is_empty());
        assert!(state.last_recommendations().is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let rec = Recommender::with_weights(Arc::new(Catalog::new()), &ScoringWeights::default());
        let mut state = PreferenceState::new();
        state.like_genre("action");
        assert!(rec.recommend(&mut state, 5).is_empty());
        assert!(rec.popular(5).is_empty());
    }

    #[test]
    fn test_nan_scores_do_not_panic() {
        let movies: Vec<Movie> = (1..=40)
            .map(|id| {
                let genres = if id % 3 == 0 { "horror" } else { "drama" };
                Movie::new(id, format!("Film {}", id), 2000, genres, 5.0)
            })
            .collect();
        let catalog = Arc::new(Catalog::from_movies(movies).unwrap());
        let weights = ScoringWeights {
            disliked_genre: f64::NAN,
            ..ScoringWeights::default()
        };
        let rec = Recommender::with_weights(catalog, &weights);

        let mut state = PreferenceState::new();
        state.like_genre("drama");
        state.dislike_genre("horror");
        assert_eq!(rec.recommend(&mut state, 5).len(), 5);
        assert_eq!(rec.rank(&state).len(), 40);
    }

    /// Signed zero for odd ids, plain zero for even ones
    struct SignedZero;

    impl Signal for SignedZero {
        fn name(&self) -> &str {
            "SignedZero"
        }

        fn score(&self, movie: &Movie, _state: &PreferenceState) -> f64 {
            if movie.id % 20 == 10 { -0.0 } else { 0.0 }
        }
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let rec = Recommender::new(create_test_catalog(), Scorer::new().add_signal(SignedZero));
        let mut state = PreferenceState::new();
        state.like_genre("comedy");

        let order: Vec<MovieId> = rec.rank(&state).iter().map(|s| s.movie_id).collect();
        assert_eq!(order, vec![10, 20, 30, 40, 50]);
    }
}
