//! Shared application state.

use prompteur_interface::{NarrationDriver, SlideStore};
use prompteur_narration::{DeckOrchestrator, StaticFallbackScripts};
use prompteur_rate_limit::UserRateLimiter;
use std::sync::Arc;

/// State shared by all route handlers.
pub struct AppState<D: NarrationDriver> {
    /// The slide store, shared with the orchestrator.
    pub store: Arc<dyn SlideStore>,
    /// The deck orchestrator driving narration generation.
    pub orchestrator: Arc<DeckOrchestrator<D>>,
    /// Per-user generation quota.
    pub limiter: Arc<UserRateLimiter>,
    /// Demo fallback content for catastrophic run failures.
    pub fallback: Arc<StaticFallbackScripts>,
}

impl<D: NarrationDriver> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            orchestrator: Arc::clone(&self.orchestrator),
            limiter: Arc::clone(&self.limiter),
            fallback: Arc::clone(&self.fallback),
        }
    }
}
