use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::ChainRecord;
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

pub mod http_fetcher;
pub mod presenter;
pub mod validator;

pub use http_fetcher::HttpChainFetcher;

use validator::ValidationOutcome;

/// Retrieval collaborator: given an accepted hadith URL, produces the
/// ordered chains recorded for that hadith. Transport, encoding, and
/// timeouts all live behind this seam.
#[async_trait]
pub trait ChainFetcher: Send + Sync {
    async fn fetch_chains(&self, url: &str) -> Result<Vec<ChainRecord>>;
}

/// Default collaborator used when no retrieval backend is wired in.
pub struct MissingChainFetcher;

#[async_trait]
impl ChainFetcher for MissingChainFetcher {
    async fn fetch_chains(&self, url: &str) -> Result<Vec<ChainRecord>> {
        Err(anyhow!("chain retrieval backend unavailable for {url}"))
    }
}

/// Terminal failure of one submission. `Display` is the user-facing message;
/// underlying retrieval causes are logged, never surfaced.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{reason}")]
    Rejected { reason: String },
    #[error("Failed to retrieve chains for the provided URL.")]
    Retrieval(#[source] anyhow::Error),
    #[error("No chains found for the provided URL.")]
    NoChains,
}

/// Lifecycle phase of the most recent submission. Terminal payloads live
/// inside the variants, so a success result and an error message cannot
/// coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success { chains: Vec<ChainRecord> },
    Error { message: String },
}

/// Observable state owned by the [`SubmissionController`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionState {
    pub phase: Phase,
    pub last_url: String,
}

impl SubmissionState {
    /// Chains of the current success result, empty in every other phase.
    pub fn chains(&self) -> &[ChainRecord] {
        match &self.phase {
            Phase::Success { chains } => chains,
            _ => &[],
        }
    }

    /// Error text of the current failure, `None` in every other phase.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }
}

#[derive(Debug, Clone)]
pub enum SubmissionEvent {
    StateChanged(SubmissionState),
}

struct ControllerInner {
    state: SubmissionState,
    /// Sequence number of the newest submission. Settlements carrying an
    /// older number are dropped.
    latest_submission: u64,
}

/// Drives the submission lifecycle: validate the URL, retrieve chains
/// through the [`ChainFetcher`] seam, and settle into `Success` or `Error`
/// for observers.
pub struct SubmissionController {
    fetcher: Arc<dyn ChainFetcher>,
    inner: Mutex<ControllerInner>,
    submission_seq: AtomicU64,
    events: broadcast::Sender<SubmissionEvent>,
}

impl SubmissionController {
    pub fn new() -> Arc<Self> {
        Self::with_fetcher(Arc::new(MissingChainFetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ChainFetcher>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            fetcher,
            inner: Mutex::new(ControllerInner {
                state: SubmissionState::default(),
                latest_submission: 0,
            }),
            submission_seq: AtomicU64::new(0),
            events,
        })
    }

    pub async fn snapshot(&self) -> SubmissionState {
        self.inner.lock().await.state.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SubmissionEvent> {
        self.events.subscribe()
    }

    /// Runs one submission to completion.
    ///
    /// The state always passes through `Loading` before settling. A newer
    /// `submit` does not cancel an in-flight one; both fetches run to
    /// completion, but only the newest submission may settle the visible
    /// state.
    pub async fn submit(&self, url: impl Into<String>) {
        let url = url.into();
        let seq = self.submission_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.inner.lock().await;
            if seq > guard.latest_submission {
                guard.latest_submission = seq;
                guard.state = SubmissionState {
                    phase: Phase::Loading,
                    last_url: url.clone(),
                };
                self.emit_state(&guard.state);
            }
        }
        info!(submission = seq, %url, "submission started");

        let accepted = match validator::validate(&url) {
            ValidationOutcome::Accepted(url) => url,
            ValidationOutcome::Rejected(reason) => {
                self.settle(seq, Err(SubmissionError::Rejected { reason }))
                    .await;
                return;
            }
        };

        let outcome = match self.fetcher.fetch_chains(&accepted).await {
            Ok(chains) if chains.is_empty() => Err(SubmissionError::NoChains),
            Ok(chains) => Ok(chains),
            Err(source) => Err(SubmissionError::Retrieval(source)),
        };
        self.settle(seq, outcome).await;
    }

    async fn settle(&self, seq: u64, outcome: Result<Vec<ChainRecord>, SubmissionError>) {
        let mut guard = self.inner.lock().await;
        if guard.latest_submission != seq {
            debug!(
                submission = seq,
                latest = guard.latest_submission,
                "dropping stale settlement"
            );
            return;
        }

        guard.state.phase = match outcome {
            Ok(chains) => {
                info!(submission = seq, chains = chains.len(), "submission succeeded");
                Phase::Success { chains }
            }
            Err(err) => {
                match &err {
                    SubmissionError::Rejected { reason } => {
                        info!(submission = seq, %reason, "submission rejected")
                    }
                    SubmissionError::Retrieval(source) => {
                        warn!(submission = seq, "chain retrieval failed: {source:#}")
                    }
                    SubmissionError::NoChains => {
                        info!(submission = seq, "retrieval returned no chains")
                    }
                }
                Phase::Error {
                    message: err.to_string(),
                }
            }
        };
        self.emit_state(&guard.state);
    }

    fn emit_state(&self, state: &SubmissionState) {
        let _ = self.events.send(SubmissionEvent::StateChanged(state.clone()));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
