//! Templated chat replies.
//!
//! Builds the text that accompanies each recommendation list from the
//! message, the updated preference state, and the ranked movies.

use catalog::Movie;
use preferences::PreferenceState;

const INTRO: &str = "Hello! I'm your movie recommendation assistant. ";
const GREETING_PROMPT: &str =
    "How can I help you find a movie today? Tell me what kinds of movies you enjoy.";
const NO_RECOMMENDATIONS: &str =
    "I don't have specific recommendations yet. Could you tell me more about what movies you enjoy?";
const ASK_PREFERENCES: &str = "\n\nIs there a specific genre or time period you're interested in?";
const ASK_FEEDBACK: &str =
    "\n\nWhat do you think of these recommendations? Or would you like to explore something different?";

const GREETING_WORDS: [&str; 4] = ["hi", "hello", "hey", "start"];

/// Movies listed in the reply, regardless of how many were recommended
pub const MAX_LISTED: usize = 5;

/// Turns (including the current one) before the follow-up asks for feedback
const FEEDBACK_AFTER: usize = 3;

/// Whether any greeting word appears anywhere in the message, ignoring
/// case. Plain substring test: "something" counts because it contains "hi".
pub fn is_greeting(message: &str) -> bool {
    let lowered = message.to_lowercase();
    GREETING_WORDS.iter().any(|word| lowered.contains(word))
}

/// "a", "a and b", "a, b and c"
pub fn join_genres<S: AsRef<str>>(genres: &[S]) -> String {
    match genres {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!(
            "{} and {}",
            init.iter().map(|g| g.as_ref()).collect::<Vec<_>>().join(", "),
            last.as_ref()
        ),
    }
}

/// One numbered recommendation line, e.g. `1. Alien (1979) - horror|sci-fi`
pub fn format_line(rank: usize, movie: &Movie) -> String {
    format!("{}. {} ({}) - {}\n", rank, movie.title, movie.year, movie.genre_list())
}

/// Compose the reply for one turn.
///
/// `first_contact` is whether the history was empty before this message.
/// `state` must already include the message and its extracted preferences.
pub fn compose(
    message: &str,
    state: &PreferenceState,
    recommendations: &[Movie],
    first_contact: bool,
) -> String {
    let mut response = String::new();
    if first_contact {
        response.push_str(INTRO);
    }

    // Greetings get a prompt even though recommendations were computed
    if is_greeting(message) {
        response.push_str(GREETING_PROMPT);
        return response;
    }

    let liked: Vec<&String> = state.liked_genres().iter().collect();
    if !liked.is_empty() {
        response.push_str(&format!("Based on your interest in {}, ", join_genres(&liked)));
    }
    if let Some(range) = state.year_range() {
        response.push_str(&format!("and your preference for movies from {}, ", range));
    }

    if recommendations.is_empty() {
        response.push_str(NO_RECOMMENDATIONS);
    } else {
        response.push_str("I recommend these movies:\n\n");
        for (i, movie) in recommendations.iter().take(MAX_LISTED).enumerate() {
            response.push_str(&format_line(i + 1, movie));
        }
    }

    if state.history_len() < FEEDBACK_AFTER {
        response.push_str(ASK_PREFERENCES);
    } else {
        response.push_str(ASK_FEEDBACK);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use preferences::YearRange;

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new(25, "Alien", 1979, "horror|sci-fi", 8.4),
            Movie::new(24, "The Shining", 1980, "drama|horror", 8.4),
        ]
    }

    fn state_with_history(n: usize) -> PreferenceState {
        let mut state = PreferenceState::new();
        for i in 0..n {
            state.push_message(format!("message {}", i));
        }
        state
    }

    #[test]
    fn test_is_greeting_matches_substrings() {
        assert!(is_greeting("Hi!"));
        assert!(is_greeting("hey there"));
        assert!(is_greeting("let's START over"));
        assert!(is_greeting("something with a chase"));
        assert!(is_greeting("I like thrillers"));
        assert!(is_greeting("restarting"));
        assert!(!is_greeting("I love action movies"));
        assert!(!is_greeting("more please"));
        assert!(!is_greeting(""));
    }

    #[test]
    fn test_join_genres() {
        assert_eq!(join_genres::<&str>(&[]), "");
        assert_eq!(join_genres(&["action"]), "action");
        assert_eq!(join_genres(&["action", "comedy"]), "action and comedy");
        assert_eq!(join_genres(&["action", "comedy", "drama"]), "action, comedy and drama");
    }

    #[test]
    fn test_greeting_short_circuits() {
        let state = state_with_history(1);
        let text = compose("hello", &state, &movies(), true);
        assert_eq!(
            text,
            "Hello! I'm your movie recommendation assistant. How can I help you find a movie today? Tell me what kinds of movies you enjoy."
        );

        let text = compose("hey", &state_with_history(2), &movies(), false);
        assert_eq!(text, GREETING_PROMPT);
    }

    #[test]
    fn test_full_reply() {
        let mut state = state_with_history(1);
        state.like_genre("sci-fi");
        state.like_genre("horror");
        state.set_year_range(YearRange::new(1970, 1985));

        let text = compose("I like scary sci-fi", &state, &movies(), false);
        assert_eq!(
            text,
            "Based on your interest in horror and sci-fi, \
             and your preference for movies from 1970 to 1985, \
             I recommend these movies:\n\n\
             1. Alien (1979) - horror|sci-fi\n\
             2. The Shining (1980) - drama|horror\n\
             \n\nIs there a specific genre or time period you're interested in?"
        );
    }

    #[test]
    fn test_empty_recommendations_prompt() {
        let text = compose("any ideas", &state_with_history(1), &[], false);
        assert!(text.starts_with(NO_RECOMMENDATIONS));
    }

    #[test]
    fn test_follow_up_switches_to_feedback() {
        let text = compose("more", &state_with_history(2), &movies(), false);
        assert!(text.ends_with(ASK_PREFERENCES));

        let text = compose("more", &state_with_history(3), &movies(), false);
        assert!(text.ends_with(ASK_FEEDBACK));
    }

    #[test]
    fn test_lists_at_most_five() {
        let many: Vec<Movie> = (1..=8)
            .map(|id| Movie::new(id, format!("Film {}", id), 2000, "drama", 5.0))
            .collect();
        let text = compose("more", &state_with_history(1), &many, false);
        assert!(text.contains("5. Film 5 (2000) - drama\n"));
        assert!(!text.contains("6. Film 6"));
    }
}
