//! Turn orchestration: mode selection, version tracking, serialized turns.

use tracing::info;
use uuid::Uuid;

use crate::client::core::SpecGenClient;
use crate::client::types::{CancelHandle, TurnObserver, TurnOutcome, TurnStats};
use crate::pipeline::{SessionState, StreamSession};
use crate::types::{GenerationMode, GenerationRequest, ImageAttachment};

/// Per-turn options. Everything defaults to the orchestrator's own choices.
#[derive(Debug, Clone, Default)]
pub struct TurnOptions {
    /// Override the mode the orchestrator would pick.
    pub mode: Option<GenerationMode>,
    /// Disable streaming for this turn (single complete JSON response).
    pub blocking: bool,
    pub images: Option<Vec<ImageAttachment>>,
    /// Cancellation handle for this turn. Keep a clone to cancel from
    /// another task; one handle is outstanding per turn.
    pub cancel: Option<CancelHandle>,
}

/// Report for one submitted turn.
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub version: u64,
    pub mode: GenerationMode,
    pub outcome: TurnOutcome,
    pub stats: TurnStats,
}

/// Drives a conversation of generation turns over one session.
///
/// Turns are serialized: `submit` holds `&mut self` until the turn reaches a
/// terminal state, so two turns can never feed one session concurrently.
/// The first turn generates a fresh document; once a turn has completed
/// with content, later turns default to chat mode and carry the current
/// document as revision context.
pub struct Orchestrator {
    client: SpecGenClient,
    session: StreamSession,
    session_id: String,
    version: u64,
    document: Option<String>,
}

impl Orchestrator {
    pub fn new(client: SpecGenClient) -> Self {
        Self {
            client,
            session: StreamSession::new(),
            session_id: Uuid::new_v4().to_string(),
            version: 0,
            document: None,
        }
    }

    /// Submit one turn and run it to a terminal state.
    ///
    /// The session is reset (state and line buffer together) before the
    /// request goes out; whatever a failed or aborted turn accumulated
    /// stays visible until the next submission.
    pub async fn submit(
        &mut self,
        description: impl Into<String>,
        options: TurnOptions,
        observer: &dyn TurnObserver,
    ) -> TurnReport {
        self.version += 1;
        let mode = options.mode.unwrap_or(if self.document.is_some() {
            GenerationMode::Chat
        } else {
            GenerationMode::Generate
        });

        let mut request = GenerationRequest::new(description)
            .mode(mode)
            .session_id(self.session_id.clone());
        if options.blocking {
            request = request.blocking();
        }
        if let Some(images) = options.images {
            request = request.images(images);
        }
        if mode == GenerationMode::Chat {
            if let Some(doc) = &self.document {
                request = request.current_prd(doc.clone());
            }
        }

        info!(
            version = self.version,
            mode = %mode,
            session_id = %self.session_id,
            stream = request.stream,
            "submitting generation turn"
        );

        self.session.reset();
        let cancel = options.cancel.unwrap_or_default();
        let (outcome, stats) = self
            .client
            .generate(&request, &mut self.session, observer, &cancel)
            .await;

        if outcome.is_completed() && !self.session.state().markdown_content().is_empty() {
            self.document = Some(self.session.state().markdown_content().to_string());
        }

        TurnReport {
            version: self.version,
            mode,
            outcome,
            stats,
        }
    }

    /// State accumulated by the most recent turn.
    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    /// The current document, from the last turn that completed with content.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Number of turns submitted so far.
    pub fn version(&self) -> u64 {
        self.version
    }
}
