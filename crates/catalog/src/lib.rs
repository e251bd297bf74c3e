//! # Catalog Crate
//!
//! The fixed, read-only table of recommendable movies.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and the ordered `Catalog` arena
//! - **parser**: CSV parsing and rendering
//! - **index**: loading from disk, the built-in sample, CSV export
//! - **sample**: the built-in 50-movie dataset
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movies.csv"))?;
//! let movie = catalog.search_title("dark knight").unwrap();
//! println!("{} ({}) - {}", movie.title, movie.year, movie.genre_list());
//! ```

pub mod error;
pub mod index;
pub mod parser;
pub mod sample;
pub mod types;

pub use error::{CatalogError, Result};
pub use types::{Catalog, Movie, MovieId};
