//! Engine configuration.

use pipeline::{DEFAULT_TOP_K, ScoringWeights};
use preferences::{DEFAULT_CLASSIC_WINDOW, DEFAULT_RECENT_WINDOW, YearRange};

/// Tunables for one orchestrator instance
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Recommendations returned per turn
    pub top_k: usize,
    /// Window selected by "recent", "new", "latest", ...
    pub recent_window: YearRange,
    /// Window selected by "classic", "old", "vintage", ...
    pub classic_window: YearRange,
    pub weights: ScoringWeights,
}

impl EngineConfig {
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_recent_window(mut self, window: YearRange) -> Self {
        self.recent_window = window;
        self
    }

    pub fn with_classic_window(mut self, window: YearRange) -> Self {
        self.classic_window = window;
        self
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            recent_window: DEFAULT_RECENT_WINDOW,
            classic_window: DEFAULT_CLASSIC_WINDOW,
            weights: ScoringWeights::default(),
        }
    }
}
