//! Signal implementations for the scoring pipeline.
//!
//! Each signal is one additive term of a movie's score. The standard
//! pipeline uses all five; `Scorer::new().add_signal(..)` composes others.

pub mod disliked_movie;
pub mod genre_affinity;
pub mod liked_movies;
pub mod repeat;
pub mod year_range;

// Re-export for convenience
pub use disliked_movie::DislikedMovieSignal;
pub use genre_affinity::GenreAffinitySignal;
pub use liked_movies::LikedMovieSimilaritySignal;
pub use repeat::RepeatPenaltySignal;
pub use year_range::YearRangeSignal;
