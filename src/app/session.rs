use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::{
        card::cards_for,
        state::{loading_message, SearchState},
    },
    error::AppError,
    models::SearchOptions,
    services::{locators::Locator, providers::GroundingClient, recommendations},
};

/// What happened to a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The search was still the latest and its outcome is now the session state
    Applied,
    /// A newer search or a reset replaced it; its outcome was dropped
    Superseded,
}

/// Drives searches and holds the state a view renders
///
/// Each search gets a fresh id. Only the latest search may write state, so a
/// slow search that finishes after a newer one started is discarded.
#[derive(Clone)]
pub struct SearchSession {
    locator: Arc<dyn Locator>,
    client: Arc<dyn GroundingClient>,
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    state: SearchState,
    current: Option<Uuid>,
}

impl SearchSession {
    pub fn new(locator: Arc<dyn Locator>, client: Arc<dyn GroundingClient>) -> Self {
        Self {
            locator,
            client,
            inner: Arc::new(RwLock::new(SessionInner {
                state: SearchState::Idle,
                current: None,
            })),
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> SearchState {
        self.inner.read().await.state.clone()
    }

    /// Back to the search form; any in-flight search is invalidated
    pub async fn reset(&self) {
        let mut inner = self.inner.write().await;
        inner.current = None;
        inner.state = SearchState::Idle;
    }

    /// Runs one full search: locate, query, render
    pub async fn search(&self, options: SearchOptions) -> Completion {
        let id = Uuid::new_v4();
        {
            let mut inner = self.inner.write().await;
            inner.current = Some(id);
            inner.state = SearchState::Locating;
        }

        let span = tracing::info_span!("search", search_id = %id);
        self.run(id, options).instrument(span).await
    }

    async fn run(&self, id: Uuid, options: SearchOptions) -> Completion {
        log_progress(&SearchState::Locating);

        let coords = match self.locator.acquire().await {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!(error = %e, locator = self.locator.name(), "Location lookup failed");
                return self.finish(id, Self::failed(&AppError::from(e))).await;
            }
        };

        {
            let mut inner = self.inner.write().await;
            if inner.current != Some(id) {
                tracing::info!("Search superseded before querying the model");
                return Completion::Superseded;
            }
            inner.state = SearchState::Loading {
                message: loading_message(&options),
            };
            log_progress(&inner.state);
        }

        let next = match recommendations::fetch_recommendations(
            self.client.as_ref(),
            coords,
            &options,
        )
        .await
        {
            Ok(result) => SearchState::Results(cards_for(&result.recommendations)),
            Err(e) => Self::failed(&e),
        };

        self.finish(id, next).await
    }

    fn failed(err: &AppError) -> SearchState {
        SearchState::Failed {
            message: err.user_message(),
        }
    }

    async fn finish(&self, id: Uuid, next: SearchState) -> Completion {
        let mut inner = self.inner.write().await;
        if inner.current != Some(id) {
            tracing::info!("Discarding result of superseded search");
            return Completion::Superseded;
        }
        inner.state = next;
        Completion::Applied
    }
}

fn log_progress(state: &SearchState) {
    if let Some(progress) = state.progress_message() {
        tracing::info!(progress, "Search in progress");
    }
}
