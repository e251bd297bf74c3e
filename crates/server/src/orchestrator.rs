//! # Chat Orchestrator
//!
//! This module coordinates one conversational turn:
//! 1. Record whether this is the user's first message
//! 2. Append the message to the conversation history
//! 3. Extract preference updates into the user's state
//! 4. Rank the catalog against the updated state
//! 5. Compose the templated reply
//!
//! Each turn runs synchronously end-to-end. The orchestrator itself holds
//! only shared read-only components, so one instance serves every user.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument};

use catalog::{Catalog, Movie};
use pipeline::Recommender;
use preferences::{Extractor, PreferenceState};

use crate::config::EngineConfig;
use crate::response;
use crate::session::SessionStore;

/// Result of one chat turn
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub response: String,
    pub recommendations: Vec<Movie>,
}

/// Coordinates extraction, ranking, and reply composition
#[derive(Clone)]
pub struct ChatOrchestrator {
    extractor: Arc<Extractor>,
    recommender: Arc<Recommender>,
    config: EngineConfig,
}

impl ChatOrchestrator {
    /// Build the extractor and recommender over a shared catalog
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Result<Self> {
        let extractor = Extractor::with_default_lexicon(catalog.clone())
            .context("Failed to compile preference patterns")?
            .with_recent_window(config.recent_window)
            .with_classic_window(config.classic_window);
        let recommender = Recommender::with_weights(catalog, &config.weights);

        info!(
            "Orchestrator ready: {} movies, top_k={}",
            recommender.catalog().len(),
            config.top_k
        );

        Ok(Self {
            extractor: Arc::new(extractor),
            recommender: Arc::new(recommender),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.recommender.catalog()
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Run one turn against `state`. Never fails.
    #[instrument(skip_all, fields(history = state.history_len()))]
    pub fn handle(&self, message: &str, state: &mut PreferenceState) -> Turn {
        let start_time = Instant::now();

        let first_contact = state.history_len() == 0;
        state.push_message(message);

        self.extractor.extract(message, state);
        let recommendations = self.recommender.recommend(state, self.config.top_k);
        let response = response::compose(message, state, &recommendations, first_contact);

        info!(
            "Turn handled: {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );

        Turn {
            response,
            recommendations,
        }
    }

    /// Run one turn for `user_id`, creating the session on first contact.
    ///
    /// Concurrent turns for the same user serialize on the session entry.
    pub fn chat(&self, store: &SessionStore, user_id: &str, message: &str) -> Turn {
        let mut session = store.get_or_create(user_id);
        self.handle(message, session.value_mut())
    }

    /// Forget everything known about `user_id`
    pub fn reset(&self, store: &SessionStore, user_id: &str) {
        info!("Resetting preferences for user {}", user_id);
        store.reset(user_id);
    }
}
