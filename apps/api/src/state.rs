use std::sync::Arc;
use std::time::Duration;

use crate::auth::Authenticator;
use crate::config::Config;
use crate::fixtures::Fixtures;
use crate::jobs::deck::JobDeck;
use crate::models::job::Job;
use crate::onboarding::models::OnboardingState;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable auth collaborator. HTTP backend or in-memory stub.
    pub auth: Arc<dyn Authenticator>,
    pub fixtures: Arc<Fixtures>,
    /// Job list loaded once at startup.
    pub jobs: Arc<[Job]>,
    pub onboarding: SessionStore<OnboardingState>,
    pub decks: SessionStore<JobDeck>,
}

impl AppState {
    pub fn new(
        config: Config,
        auth: Arc<dyn Authenticator>,
        fixtures: Fixtures,
        jobs: Vec<Job>,
    ) -> Self {
        Self {
            config,
            auth,
            fixtures: Arc::new(fixtures),
            jobs: jobs.into(),
            onboarding: SessionStore::default(),
            decks: SessionStore::default(),
        }
    }

    /// Discards onboarding drafts and decks idle for longer than `ttl`.
    pub async fn sweep_idle_sessions(&self, ttl: Duration) {
        let drafts = self.onboarding.sweep_idle(ttl).await;
        let decks = self.decks.sweep_idle(ttl).await;
        if drafts + decks > 0 {
            let drafts_left = self.onboarding.len().await;
            let decks_left = self.decks.len().await;
            tracing::info!(
                drafts,
                decks,
                drafts_left,
                decks_left,
                "Idle sessions discarded"
            );
        }
    }
}
