use std::sync::Arc;
use std::time::Duration;

use crate::client::core::SpecGenClient;
use crate::transport::{HttpTransport, DEFAULT_BASE_URL};
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface small and predictable: a base URL (builder argument,
/// then `SPECGEN_BASE_URL`, then the default) and an optional whole-request
/// timeout.
pub struct SpecGenClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl SpecGenClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Override the backend base URL (primarily for testing with mock
    /// servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whole-request deadline, including body streaming. Leave unset for
    /// long generations; prefer cancelling the turn externally when a
    /// deadline is needed.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<SpecGenClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("SPECGEN_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let transport = Arc::new(HttpTransport::new(&base_url, self.timeout)?);
        Ok(SpecGenClient::from_transport(transport))
    }
}

impl Default for SpecGenClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
