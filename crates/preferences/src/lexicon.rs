//! Genre keyword dictionary.
//!
//! Maps each canonical genre tag to the surface words that signal it. The
//! same table builds the genre alternation in the recognition patterns and
//! classifies matched text back to canonical tags.

/// Default lexicon: (canonical tag, synonyms)
const DEFAULT_GENRES: &[(&str, &[&str])] = &[
    ("action", &["action", "exciting", "fast", "adventure", "explosive", "thrill"]),
    ("comedy", &["comedy", "funny", "laugh", "humor", "hilarious", "comedic"]),
    ("drama", &["drama", "emotional", "powerful", "intense", "serious", "dramatic"]),
    ("horror", &["horror", "scary", "frightening", "terror", "creepy", "spooky"]),
    ("sci-fi", &["sci-fi", "science fiction", "space", "future", "technology", "alien"]),
    ("romance", &["romance", "love", "relationship", "romantic", "dating"]),
    ("thriller", &["thriller", "suspense", "tension", "suspenseful", "mystery"]),
    ("fantasy", &["fantasy", "magical", "supernatural", "myth", "dragon", "wizard"]),
    ("animation", &["animation", "animated", "cartoon", "pixar", "disney"]),
    ("documentary", &["documentary", "real", "true story", "historical", "educational"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    pub genre: String,
    pub synonyms: Vec<String>,
}

/// Ordered genre → synonyms table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreLexicon {
    entries: Vec<GenreEntry>,
}

impl GenreLexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a genre and its synonyms (builder pattern). Everything is stored
    /// lower-case.
    pub fn with_genre<S: AsRef<str>>(mut self, genre: &str, synonyms: &[S]) -> Self {
        self.entries.push(GenreEntry {
            genre: genre.to_lowercase(),
            synonyms: synonyms.iter().map(|s| s.as_ref().to_lowercase()).collect(),
        });
        self
    }

    pub fn entries(&self) -> &[GenreEntry] {
        &self.entries
    }

    /// Every synonym across all genres, in table order (duplicates kept)
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.synonyms.iter().map(String::as_str))
    }

    /// Canonical genres with at least one synonym contained in `text`.
    ///
    /// Substring containment, not equality: "spaceship" classifies as
    /// sci-fi because it contains "space".
    pub fn classify(&self, text: &str) -> Vec<&str> {
        let text = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.synonyms.iter().any(|s| text.contains(s.as_str())))
            .map(|e| e.genre.as_str())
            .collect()
    }
}

impl Default for GenreLexicon {
    fn default() -> Self {
        DEFAULT_GENRES
            .iter()
            .fold(GenreLexicon::new(), |lexicon, &(genre, synonyms)| {
                lexicon.with_genre(genre, synonyms)
            })
    }
}
