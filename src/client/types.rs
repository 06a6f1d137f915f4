//! Turn-level types: cancellation, outcome, stats, and the observer seam.

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Cooperative cancellation handle for one generation turn.
///
/// Cloneable capability object: keep one clone, pass the other to the turn.
/// Once signaled it stays signaled; the driver consults it to classify any
/// failure of an active turn as aborted rather than failed.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent; there is no un-signal.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once cancellation has been requested.
    pub(crate) async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

/// Terminal outcome of one turn. Exactly one is produced per turn; a
/// cancelled turn is never reported as failed, even when the cancellation
/// surfaced as a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    Aborted,
    Failed(String),
}

impl TurnOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TurnOutcome::Completed)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, TurnOutcome::Aborted)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            TurnOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Per-turn statistics.
#[derive(Debug, Clone, Default)]
pub struct TurnStats {
    pub duration_ms: u64,
    /// Milliseconds until the first forwarded fragment, if any arrived.
    pub first_chunk_ms: Option<u64>,
    pub chunk_count: u64,
    /// Events actually applied to the session (unknown lines excluded).
    pub event_count: u64,
}

/// Observer for turn progress, the seam UI layers hang off of.
///
/// `on_chunk` fires zero or more times, strictly before exactly one of the
/// terminal callbacks. All methods default to no-ops so implementors
/// override only what they render.
#[async_trait]
pub trait TurnObserver: Send + Sync {
    /// A decoded text fragment was forwarded into the session.
    async fn on_chunk(&self, _text: &str) {}

    async fn on_complete(&self) {}

    async fn on_error(&self, _message: &str) {}

    async fn on_abort(&self) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

#[async_trait]
impl TurnObserver for NoopObserver {}

/// Returns a no-op observer.
pub fn noop_observer() -> Arc<dyn TurnObserver> {
    Arc::new(NoopObserver)
}
