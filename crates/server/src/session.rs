//! Per-user preference sessions.
//!
//! One `PreferenceState` per opaque user id, held in a sharded concurrent
//! map. Requests for different users never touch the same entry; requests
//! for the same user serialize on that entry's write guard.

use dashmap::DashMap;
use dashmap::mapref::one::RefMut;
use preferences::PreferenceState;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, PreferenceState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's state, created empty on first contact.
    ///
    /// The returned guard locks the entry's shard; drop it before touching
    /// the store again from the same thread.
    pub fn get_or_create(&self, user_id: &str) -> RefMut<'_, String, PreferenceState> {
        self.sessions
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!("New session for user {}", user_id);
                PreferenceState::new()
            })
    }

    /// Replace the user's state with a fresh one. Unknown ids get an empty
    /// state as well.
    pub fn reset(&self, user_id: &str) {
        debug!("Resetting session for user {}", user_id);
        self.sessions
            .insert(user_id.to_string(), PreferenceState::new());
    }

    /// Copy of the user's current state, if any
    pub fn snapshot(&self, user_id: &str) -> Option<PreferenceState> {
        self.sessions.get(user_id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, user_id: &str) -> Option<PreferenceState> {
        self.sessions.remove(user_id).map(|(_, state)| state)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_contact_creates_empty_state() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let state = store.get_or_create("alice");
        assert_eq!(*state, PreferenceState::new());
        drop(state);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_state_persists_between_lookups() {
        let store = SessionStore::new();
        store.get_or_create("alice").like_genre("comedy");

        let state = store.get_or_create("alice");
        assert!(state.liked_genres().contains("comedy"));
    }

    #[test]
    fn test_users_are_isolated() {
        let store = SessionStore::new();
        store.get_or_create("alice").like_genre("comedy");
        store.get_or_create("bob").dislike_genre("comedy");

        let alice = store.snapshot("alice").unwrap();
        let bob = store.snapshot("bob").unwrap();
        assert!(alice.liked_genres().contains("comedy"));
        assert!(alice.disliked_genres().is_empty());
        assert!(bob.disliked_genres().contains("comedy"));
        assert!(bob.liked_genres().is_empty());
    }

    #[test]
    fn test_reset() {
        let store = SessionStore::new();
        store.get_or_create("alice").like_movie(4);
        store.reset("alice");
        assert_eq!(store.snapshot("alice"), Some(PreferenceState::new()));

        // resetting an unknown user is first contact, not an error
        store.reset("carol");
        assert_eq!(store.snapshot("carol"), Some(PreferenceState::new()));
    }

    #[test]
    fn test_remove() {
        let store = SessionStore::new();
        store.get_or_create("alice");
        assert!(store.remove("alice").is_some());
        assert!(store.remove("alice").is_none());
        assert!(store.snapshot("alice").is_none());
    }
}
