//! Per-user preference state and the updates that mutate it.

use catalog::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Inclusive release-year window. Bounds are always stored ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: u16,
    pub max: u16,
}

impl YearRange {
    /// Build a range from two years in either order
    pub fn new(a: u16, b: u16) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, year: u16) -> bool {
        self.min <= year && year <= self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Like,
    Dislike,
}

/// One instruction produced by the extractor.
///
/// Each variant carries a single sentiment, so "liked and disliked at once"
/// cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceUpdate {
    Genre { genre: String, sentiment: Sentiment },
    Movie { movie_id: MovieId, sentiment: Sentiment },
    YearRange(YearRange),
}

/// Accumulated preference signals for one user.
///
/// Created empty on first contact and mutated in place by every turn. Genre
/// and movie sets are mutually exclusive: liking something removes it from
/// the disliked set and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceState {
    liked_genres: BTreeSet<String>,
    disliked_genres: BTreeSet<String>,
    liked_movies: BTreeSet<MovieId>,
    disliked_movies: BTreeSet<MovieId>,
    year_range: Option<YearRange>,
    conversation_history: Vec<String>,
    /// Ids from the most recent `recommend` call, in ranked order
    last_recommendations: Vec<MovieId>,
}

impl PreferenceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one update, preserving the like/dislike exclusivity
    pub fn apply(&mut self, update: PreferenceUpdate) {
        match update {
            PreferenceUpdate::Genre { genre, sentiment } => match sentiment {
                Sentiment::Like => self.like_genre(genre),
                Sentiment::Dislike => self.dislike_genre(genre),
            },
            PreferenceUpdate::Movie { movie_id, sentiment } => match sentiment {
                Sentiment::Like => self.like_movie(movie_id),
                Sentiment::Dislike => self.dislike_movie(movie_id),
            },
            PreferenceUpdate::YearRange(range) => self.set_year_range(range),
        }
    }

    pub fn like_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        self.disliked_genres.remove(&genre);
        self.liked_genres.insert(genre);
    }

    pub fn dislike_genre(&mut self, genre: impl Into<String>) {
        let genre = genre.into();
        self.liked_genres.remove(&genre);
        self.disliked_genres.insert(genre);
    }

    pub fn like_movie(&mut self, movie_id: MovieId) {
        self.disliked_movies.remove(&movie_id);
        self.liked_movies.insert(movie_id);
    }

    pub fn dislike_movie(&mut self, movie_id: MovieId) {
        self.liked_movies.remove(&movie_id);
        self.disliked_movies.insert(movie_id);
    }

    /// Replace the year window. Ranges are never merged.
    pub fn set_year_range(&mut self, range: YearRange) {
        self.year_range = Some(range);
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        self.conversation_history.push(message.into());
    }

    pub fn set_last_recommendations(&mut self, ids: Vec<MovieId>) {
        self.last_recommendations = ids;
    }

    /// Reset to a fresh, empty state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Getters

    pub fn liked_genres(&self) -> &BTreeSet<String> {
        &self.liked_genres
    }

    pub fn disliked_genres(&self) -> &BTreeSet<String> {
        &self.disliked_genres
    }

    pub fn liked_movies(&self) -> &BTreeSet<MovieId> {
        &self.liked_movies
    }

    pub fn disliked_movies(&self) -> &BTreeSet<MovieId> {
        &self.disliked_movies
    }

    pub fn year_range(&self) -> Option<YearRange> {
        self.year_range
    }

    pub fn conversation_history(&self) -> &[String] {
        &self.conversation_history
    }

    pub fn history_len(&self) -> usize {
        self.conversation_history.len()
    }

    pub fn last_recommendations(&self) -> &[MovieId] {
        &self.last_recommendations
    }

    pub fn was_recently_recommended(&self, movie_id: MovieId) -> bool {
        self.last_recommendations.contains(&movie_id)
    }

    /// No liked genre and no liked movie: recommendations fall back to popularity
    pub fn is_cold_start(&self) -> bool {
        self.liked_genres.is_empty() && self.liked_movies.is_empty()
    }
}
