use std::sync::Arc;

use crate::client::builder::SpecGenClientBuilder;
use crate::client::types::{CancelHandle, TurnObserver, TurnOutcome, TurnStats};
use crate::pipeline::StreamSession;
use crate::transport::HttpTransport;
use crate::types::GenerationRequest;
use crate::Result;

/// Client for the document-generation backend.
///
/// Cheap to clone; the HTTP transport (connection pool included) is shared.
/// One client may serve many [`Orchestrator`](crate::client::Orchestrator)s,
/// but a single session's turns must be serialized by their owner.
#[derive(Clone)]
pub struct SpecGenClient {
    transport: Arc<HttpTransport>,
}

impl SpecGenClient {
    pub fn builder() -> SpecGenClientBuilder {
        SpecGenClientBuilder::new()
    }

    /// Client with default configuration against `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        SpecGenClientBuilder::new().base_url(base_url).build()
    }

    pub(crate) fn from_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Run one generation turn against `session`, reporting progress to
    /// `observer`. See the driver docs for the lifecycle contract.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        session: &mut StreamSession,
        observer: &dyn TurnObserver,
        cancel: &CancelHandle,
    ) -> (TurnOutcome, TurnStats) {
        self.run_turn(request, session, observer, cancel).await
    }
}
