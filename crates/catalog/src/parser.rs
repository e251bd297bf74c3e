//! Parser for catalog CSV files.
//!
//! Format (header row required):
//! ```text
//! movie_id,title,year,genres,popularity
//! 4,The Dark Knight,2008,action|crime|drama,9.0
//! 50,"Won't You Be My Neighbor?",2018,documentary|biography,8.4
//! ```
//!
//! Fields may be double-quoted; a doubled quote inside a quoted field is a
//! literal quote. Genres are pipe-separated.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, Movie, split_genres};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const HEADER: &str = "movie_id,title,year,genres,popularity";
const FIELD_COUNT: usize = 5;

/// Parse a catalog file into movies, in file order
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path)?;
    let file = path.display().to_string();
    parse_movies_str(&content, &file)
}

/// Parse catalog CSV content. `file` is only used in error messages.
pub fn parse_movies_str(content: &str, file: &str) -> Result<Vec<Movie>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }
        if line_no == 1 && line_trimmed.starts_with("movie_id") {
            continue;
        }

        let fields = split_fields(line_trimmed).ok_or_else(|| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Unterminated quoted field".to_string(),
        })?;
        if fields.len() != FIELD_COUNT {
            return Err(CatalogError::FieldCountMismatch {
                expected: FIELD_COUNT,
                found: fields.len(),
                line: line_no,
            });
        }

        let parse_err = |field: &str, e: &dyn std::fmt::Display| CatalogError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: format!("Invalid {}: {}", field, e),
        };

        let movie = Movie {
            id: fields[0].trim().parse().map_err(|e| parse_err("movie_id", &e))?,
            title: fields[1].trim().to_string(),
            year: fields[2].trim().parse().map_err(|e| parse_err("year", &e))?,
            genres: split_genres(&fields[3]),
            popularity: fields[4]
                .trim()
                .parse()
                .map_err(|e| parse_err("popularity", &e))?,
        };
        movies.push(movie);
    }

    debug!("Parsed {} movies from {}", movies.len(), file);
    Ok(movies)
}

/// Render a catalog as CSV, header included
pub fn to_csv(catalog: &Catalog) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for movie in catalog.movies() {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            movie.id,
            quote_field(&movie.title),
            movie.year,
            quote_field(&movie.genre_list()),
            movie.popularity
        ));
    }
    out
}

/// Split one CSV line. Returns `None` when a quoted field never closes.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if in_quotes {
        return None;
    }
    fields.push(current);
    Some(fields)
}

fn quote_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
