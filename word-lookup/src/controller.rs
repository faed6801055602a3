use std::sync::atomic::{AtomicU64, Ordering};

use dictionary::DefinitionProvider;
use tokio::sync::RwLock;

use crate::state::{LookupError, LookupState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The query was empty, nothing was requested
    Skipped,
    /// The response was written to the state
    Settled,
    /// A newer submit was issued while this one was in flight, its response was dropped
    Superseded,
}

/// Owns the query and the lookup state shown to the user.
///
/// Submissions may overlap. Every submit takes a generation ticket and only the
/// most recently issued ticket is allowed to write its response, so a slow
/// response can never overwrite a newer one.
pub struct LookupController<P> {
    provider: P,
    query: RwLock<String>,
    state: RwLock<LookupState>,
    generation: AtomicU64,
}

impl<P: DefinitionProvider> LookupController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            query: RwLock::new(String::new()),
            state: RwLock::new(LookupState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// Overwrites the query. The current state stays visible until the next submit.
    pub async fn set_query(&self, text: impl Into<String>) {
        *self.query.write().await = text.into();
    }

    pub async fn query(&self) -> String {
        self.query.read().await.clone()
    }

    pub async fn state(&self) -> LookupState {
        self.state.read().await.clone()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let word = self.query().await;
        if word.is_empty() {
            return SubmitOutcome::Skipped;
        }

        // Loading and the ticket are set under one lock, a newer result always lands after both
        let ticket = {
            let mut state = self.state.write().await;
            *state = LookupState::Loading;
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let next = match self.provider.define(&word).await {
            Ok(meanings) => LookupState::Success(meanings),
            Err(error) => {
                tracing::warn!(%word, %error, "lookup failed");
                LookupState::Failure(LookupError::from(&error))
            }
        };

        let mut state = self.state.write().await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(%word, ticket, "discarding stale lookup response");
            return SubmitOutcome::Superseded;
        }
        *state = next;
        SubmitOutcome::Settled
    }
}
