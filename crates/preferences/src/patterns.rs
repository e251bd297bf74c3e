//! Named recognition patterns.
//!
//! Six independent patterns, compiled once from a `GenreLexicon`. Every
//! pattern stops at sentence punctuation (`.`, `!`, `?`), so a cue in one
//! sentence never pairs with a keyword in the next.

use crate::error::{PatternError, Result};
use crate::lexicon::GenreLexicon;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    LikeGenre,
    DislikeGenre,
    YearRange,
    Recent,
    Classic,
    MovieMention,
}

impl PatternKind {
    /// Order in which the extractor evaluates and applies patterns
    pub const ALL: [PatternKind; 6] = [
        PatternKind::LikeGenre,
        PatternKind::DislikeGenre,
        PatternKind::YearRange,
        PatternKind::Recent,
        PatternKind::Classic,
        PatternKind::MovieMention,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::LikeGenre => "like_genre",
            PatternKind::DislikeGenre => "dislike_genre",
            PatternKind::YearRange => "year_range",
            PatternKind::Recent => "recent",
            PatternKind::Classic => "classic",
            PatternKind::MovieMention => "movie_mention",
        }
    }
}

const LIKE_CUE: &str = r"i (?:like|love|enjoy|prefer)";
const DISLIKE_CUE: &str = r"i (?:dislike|hate|don't like|do not like)";
const GENRE_FILLER: &str = r"[^.!?]*(?:genre|type|category)?[^.!?]*";
/// Years are ASCII digits only
const YEAR_RANGE: &str = r"(?i)(?:from|between|after|before)?[^.!?]*(?:year|made in|from)[^.!?]*([0-9]{4})[^.!?]*(?:to|and|-)[^.!?]*([0-9]{4})";
const RECENT: &str = r"(?i)recent|new|latest|modern|current";
const CLASSIC: &str = r"(?i)classic|old|older|vintage|retro";
const MOVIE_MENTION: &str = r#"(?i)(?:like|love|enjoy|recommend|watch)[^.!?]*["'](.*?)["']"#;

/// The compiled pattern table
#[derive(Debug, Clone)]
pub struct PatternSet {
    like_genre: Regex,
    dislike_genre: Regex,
    year_range: Regex,
    recent: Regex,
    classic: Regex,
    movie_mention: Regex,
}

impl PatternSet {
    /// Compile all six patterns, splicing the lexicon's synonyms into the
    /// genre alternation.
    pub fn compile(lexicon: &GenreLexicon) -> Result<Self> {
        let alternation = genre_alternation(lexicon)?;

        Ok(Self {
            like_genre: compile(
                PatternKind::LikeGenre,
                &format!("(?i){}{}({})", LIKE_CUE, GENRE_FILLER, alternation),
            )?,
            dislike_genre: compile(
                PatternKind::DislikeGenre,
                &format!("(?i){}{}({})", DISLIKE_CUE, GENRE_FILLER, alternation),
            )?,
            year_range: compile(PatternKind::YearRange, YEAR_RANGE)?,
            recent: compile(PatternKind::Recent, RECENT)?,
            classic: compile(PatternKind::Classic, CLASSIC)?,
            movie_mention: compile(PatternKind::MovieMention, MOVIE_MENTION)?,
        })
    }

    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::LikeGenre => &self.like_genre,
            PatternKind::DislikeGenre => &self.dislike_genre,
            PatternKind::YearRange => &self.year_range,
            PatternKind::Recent => &self.recent,
            PatternKind::Classic => &self.classic,
            PatternKind::MovieMention => &self.movie_mention,
        }
    }

    /// First capture group of every non-overlapping match
    pub fn captures<'t>(&self, kind: PatternKind, text: &'t str) -> Vec<&'t str> {
        self.get(kind)
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Both year captures of the first year-range match
    pub fn year_pair<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.year_range.captures(text)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    pub fn is_match(&self, kind: PatternKind, text: &str) -> bool {
        self.get(kind).is_match(text)
    }
}

fn compile(kind: PatternKind, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| PatternError::Compile {
        pattern: kind.name(),
        source,
    })
}

fn genre_alternation(lexicon: &GenreLexicon) -> Result<String> {
    let synonyms: Vec<String> = lexicon.all_synonyms().map(regex::escape).collect();
    if synonyms.is_empty() {
        return Err(PatternError::EmptyLexicon);
    }
    Ok(synonyms.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::compile(&GenreLexicon::default()).unwrap()
    }

    #[test]
    fn test_like_genre_captures_last_keyword_in_sentence() {
        let p = patterns();
        assert_eq!(p.captures(PatternKind::LikeGenre, "i love action movies"), vec!["action"]);
        // the filler is greedy, so the last genre word in the sentence wins
        assert_eq!(
            p.captures(PatternKind::LikeGenre, "i like funny and scary films"),
            vec!["scary"]
        );
    }

    #[test]
    fn test_like_genre_one_match_per_sentence() {
        let p = patterns();
        let caps = p.captures(
            PatternKind::LikeGenre,
            "i like comedy. i also enjoy horror. i prefer the drama genre!",
        );
        // "i also enjoy" is not an "i enjoy" cue
        assert_eq!(caps, vec!["comedy", "drama"]);
    }

    #[test]
    fn test_dislike_genre_cues() {
        let p = patterns();
        assert_eq!(p.captures(PatternKind::DislikeGenre, "i hate horror"), vec!["horror"]);
        assert_eq!(
            p.captures(PatternKind::DislikeGenre, "i don't like romantic stuff"),
            vec!["romantic"]
        );
        assert_eq!(
            p.captures(PatternKind::DislikeGenre, "i do not like cartoons"),
            vec!["cartoon"]
        );
        assert!(p.captures(PatternKind::LikeGenre, "i don't like horror").is_empty());
    }

    #[test]
    fn test_year_pair() {
        let p = patterns();
        assert_eq!(p.year_pair("Movies from 1990 to 2000"), Some(("1990", "2000")));
        assert_eq!(p.year_pair("made in 2010 - 2005 please"), Some(("2010", "2005")));
        assert_eq!(p.year_pair("year 1999"), None);
        assert_eq!(p.year_pair("from 1990. to 2000"), None);
        assert_eq!(p.year_pair("from ١٩٩٠ to ٢٠٠٠"), None);
    }

    #[test]
    fn test_shortcuts_are_unanchored() {
        let p = patterns();
        assert!(p.is_match(PatternKind::Recent, "Something NEW"));
        assert!(p.is_match(PatternKind::Recent, "any news?"));
        assert!(p.is_match(PatternKind::Classic, "a Vintage feel"));
        assert!(!p.is_match(PatternKind::Classic, "fresh releases"));
    }

    #[test]
    fn test_movie_mention_quotes() {
        let p = patterns();
        assert_eq!(
            p.captures(PatternKind::MovieMention, r#"I really liked "The Matrix""#),
            vec!["The Matrix"]
        );
        assert_eq!(
            p.captures(PatternKind::MovieMention, "Can you recommend something like 'Alien'"),
            vec!["Alien"]
        );
        assert!(p.captures(PatternKind::MovieMention, "'Alien' was great").is_empty());
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let result = PatternSet::compile(&GenreLexicon::new());
        assert!(matches!(result, Err(PatternError::EmptyLexicon)));
    }
}
