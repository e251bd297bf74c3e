//! Core domain types for the movie catalog.
//!
//! The catalog is an arena: movies live in a `Vec` in catalog order and a
//! `HashMap` maps each id to its position. Everything downstream (scoring,
//! ranking, title lookup) relies on that order being stable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{CatalogError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, stable for the lifetime of a catalog
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// A single catalog row.
///
/// Genre tags are stored lower-case; the serialized form joins them with `|`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub genres: Vec<String>,
    /// Only used as the cold-start ranking signal
    pub popularity: f32,
}

impl Movie {
    /// Build a movie from a pipe-delimited genre list, e.g. `"action|sci-fi"`
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        year: u16,
        genres: &str,
        popularity: f32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genres: split_genres(genres),
            popularity,
        }
    }

    /// Whether this movie carries the given (lower-case) genre tag
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Number of distinct genre tags this movie shares with another
    pub fn shared_genres(&self, other: &Movie) -> usize {
        let mut shared: Vec<&str> = self
            .genres
            .iter()
            .filter(|g| other.has_genre(g))
            .map(String::as_str)
            .collect();
        shared.sort_unstable();
        shared.dedup();
        shared.len()
    }

    /// Genres in their serialized pipe-delimited form
    pub fn genre_list(&self) -> String {
        self.genres.join("|")
    }
}

/// Split a pipe-delimited genre list into normalized tags
pub fn split_genres(s: &str) -> Vec<String> {
    s.split('|')
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect()
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable, ordered table of recommendable movies.
///
/// Shared across users as `Arc<Catalog>`; nothing mutates it after loading.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    positions: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from movies in catalog order
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Result<Self> {
        let mut catalog = Self::new();
        for movie in movies {
            catalog.insert_movie(movie)?;
        }
        Ok(catalog)
    }

    /// Append a movie, enforcing unique ids, finite popularity, and
    /// non-empty genres
    pub fn insert_movie(&mut self, mut movie: Movie) -> Result<()> {
        if self.positions.contains_key(&movie.id) {
            return Err(CatalogError::DuplicateId(movie.id));
        }
        if !movie.popularity.is_finite() {
            return Err(CatalogError::InvalidPopularity {
                id: movie.id,
                value: movie.popularity,
            });
        }
        // -0.0 would sort below 0.0 under a total order
        movie.popularity += 0.0;
        movie.genres = movie
            .genres
            .iter()
            .map(|g| g.trim().to_lowercase())
            .filter(|g| !g.is_empty())
            .collect();
        if movie.genres.is_empty() {
            return Err(CatalogError::EmptyGenres {
                id: movie.id,
                title: movie.title,
            });
        }
        self.positions.insert(movie.id, self.movies.len());
        self.movies.push(movie);
        Ok(())
    }

    /// Get a movie by ID
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.positions.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Catalog position of a movie id
    pub fn position(&self, id: MovieId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Movie at a catalog position
    pub fn at(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// First movie whose title contains `query`, ignoring case.
    ///
    /// Ties resolve to catalog order, so a short query like "up" returns the
    /// earliest title containing those letters.
    pub fn search_title(&self, query: &str) -> Option<&Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .find(|m| m.title.to_lowercase().contains(&needle))
    }

    /// Every movie whose title contains `query`, ignoring case, in catalog order
    pub fn find_titles(&self, query: &str) -> Vec<&Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Every distinct genre tag in the catalog, in first-seen order
    pub fn genres(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for movie in &self.movies {
            for genre in &movie.genres {
                if !seen.contains(&genre.as_str()) {
                    seen.push(genre);
                }
            }
        }
        seen
    }
}
