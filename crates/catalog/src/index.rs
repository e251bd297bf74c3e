//! Catalog loading and export.
//!
//! Entry points for building a `Catalog` from disk (or from the built-in
//! sample) and writing it back out.

use crate::error::Result;
use crate::parser;
use crate::sample;
use crate::types::{Catalog, Movie};
use std::fs;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a catalog from a CSV file
    ///
    /// Steps:
    /// 1. Parse every row in file order
    /// 2. Insert rows, rejecting duplicate ids and empty genre lists
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let movies = parser::parse_movies(path)?;
        let catalog = Catalog::from_movies(movies)?;

        info!("Loaded {} movies", catalog.len());
        Ok(catalog)
    }

    /// The built-in 50-movie catalog, ids 1 through 50
    pub fn sample() -> Result<Self> {
        let movies = (1..)
            .zip(sample::SAMPLE_MOVIES.iter())
            .map(|(id, &(title, year, genres, popularity))| {
                Movie::new(id, title, year, genres, popularity)
            });
        Catalog::from_movies(movies)
    }

    /// Write the catalog as CSV, creating parent directories as needed
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, parser::to_csv(self))?;
        info!("Wrote {} movies to {:?}", self.len(), path);
        Ok(())
    }
}
