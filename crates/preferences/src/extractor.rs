//! Rule-based preference extraction.
//!
//! Scans one chat message against the pattern table and turns every hit into
//! a `PreferenceUpdate`. Patterns are independent: a single message can like
//! a genre, set a year window, and like a quoted movie at once.
//!
//! ## Algorithm
//! 1. like-genre / dislike-genre run on the lower-cased message; each
//!    captured keyword is classified back to canonical genres
//! 2. year-range takes the first match only; the two years are sorted
//! 3. recent / classic shortcuts replace the window with a fixed era
//! 4. movie-mention resolves each quoted title to the first catalog entry
//!    containing it
//!
//! Updates are applied in that order. The year window is last-write-wins,
//! so "classic" beats "recent" beats an explicit range in the same message.

use crate::error::Result;
use crate::lexicon::GenreLexicon;
use crate::patterns::{PatternKind, PatternSet};
use crate::types::{PreferenceState, PreferenceUpdate, Sentiment, YearRange};
use catalog::Catalog;
use std::sync::Arc;
use tracing::{debug, instrument};

pub const DEFAULT_RECENT_WINDOW: YearRange = YearRange { min: 2015, max: 2025 };
pub const DEFAULT_CLASSIC_WINDOW: YearRange = YearRange { min: 1950, max: 1990 };

/// Stateless interpreter from raw text to preference updates
#[derive(Debug, Clone)]
pub struct Extractor {
    catalog: Arc<Catalog>,
    lexicon: GenreLexicon,
    patterns: PatternSet,
    recent_window: YearRange,
    classic_window: YearRange,
}

impl Extractor {
    /// Compile the pattern table for `lexicon`. Movie mentions resolve
    /// against `catalog`.
    pub fn new(catalog: Arc<Catalog>, lexicon: GenreLexicon) -> Result<Self> {
        let patterns = PatternSet::compile(&lexicon)?;
        Ok(Self {
            catalog,
            lexicon,
            patterns,
            recent_window: DEFAULT_RECENT_WINDOW,
            classic_window: DEFAULT_CLASSIC_WINDOW,
        })
    }

    /// Extractor with the default genre lexicon
    pub fn with_default_lexicon(catalog: Arc<Catalog>) -> Result<Self> {
        Self::new(catalog, GenreLexicon::default())
    }

    /// Configure the window the "recent" shortcut selects (default: 2015-2025)
    pub fn with_recent_window(mut self, window: YearRange) -> Self {
        self.recent_window = window;
        self
    }

    /// Configure the window the "classic" shortcut selects (default: 1950-1990)
    pub fn with_classic_window(mut self, window: YearRange) -> Self {
        self.classic_window = window;
        self
    }

    pub fn lexicon(&self) -> &GenreLexicon {
        &self.lexicon
    }

    /// Apply every update found in `message` to `state`. Never fails.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub fn extract(&self, message: &str, state: &mut PreferenceState) {
        let updates = self.interpret(message);
        debug!("Extracted {} preference updates", updates.len());
        for update in updates {
            state.apply(update);
        }
    }

    /// The updates `message` produces, in application order
    pub fn interpret(&self, message: &str) -> Vec<PreferenceUpdate> {
        let mut updates = Vec::new();
        let lowered = message.to_lowercase();

        for kind in PatternKind::ALL {
            match kind {
                PatternKind::LikeGenre => {
                    self.genre_updates(kind, &lowered, Sentiment::Like, &mut updates)
                }
                PatternKind::DislikeGenre => {
                    self.genre_updates(kind, &lowered, Sentiment::Dislike, &mut updates)
                }
                PatternKind::YearRange => {
                    if let Some(range) = self.explicit_year_range(message) {
                        updates.push(PreferenceUpdate::YearRange(range));
                    }
                }
                PatternKind::Recent => {
                    if self.patterns.is_match(kind, message) {
                        updates.push(PreferenceUpdate::YearRange(self.recent_window));
                    }
                }
                PatternKind::Classic => {
                    if self.patterns.is_match(kind, message) {
                        updates.push(PreferenceUpdate::YearRange(self.classic_window));
                    }
                }
                PatternKind::MovieMention => self.movie_updates(message, &mut updates),
            }
        }

        updates
    }

    fn genre_updates(
        &self,
        kind: PatternKind,
        lowered: &str,
        sentiment: Sentiment,
        updates: &mut Vec<PreferenceUpdate>,
    ) {
        for keyword in self.patterns.captures(kind, lowered) {
            for genre in self.lexicon.classify(keyword) {
                debug!("{} matched '{}' -> {}", kind.name(), keyword, genre);
                updates.push(PreferenceUpdate::Genre {
                    genre: genre.to_string(),
                    sentiment,
                });
            }
        }
    }

    fn explicit_year_range(&self, message: &str) -> Option<YearRange> {
        let (first, second) = self.patterns.year_pair(message)?;
        // four ASCII digits always fit a u16
        Some(YearRange::new(first.parse().ok()?, second.parse().ok()?))
    }

    fn movie_updates(&self, message: &str, updates: &mut Vec<PreferenceUpdate>) {
        for title in self.patterns.captures(PatternKind::MovieMention, message) {
            match self.catalog.search_title(title) {
                Some(movie) => {
                    debug!("Mention '{}' resolved to movie {}", title, movie.id);
                    updates.push(PreferenceUpdate::Movie {
                        movie_id: movie.id,
                        sentiment: Sentiment::Like,
                    });
                }
                None => debug!("Mention '{}' matched no catalog title", title),
            }
        }
    }
}
