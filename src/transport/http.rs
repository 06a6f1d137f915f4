use std::env;
use std::time::Duration;

use crate::types::GenerationRequest;
use crate::Result;

/// Default backend endpoint (the development proxy of the reference
/// deployment). Override via the builder or `SPECGEN_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport for `base_url`.
    ///
    /// Minimal production-friendly defaults (env-overridable):
    /// - `SPECGEN_HTTP_CONNECT_TIMEOUT_SECS` (default 30)
    /// - `SPECGEN_HTTP_TIMEOUT_SECS` (whole-request deadline; unset by
    ///   default — a total deadline would cut long generations short, so a
    ///   caller that wants one cancels the turn externally instead)
    /// - `SPECGEN_HTTP_POOL_MAX_IDLE_PER_HOST` (default 8)
    pub fn new(base_url: &str, timeout_override: Option<Duration>) -> Result<Self> {
        // Fail fast on an unusable base URL rather than on the first turn.
        let parsed = url::Url::parse(base_url)
            .map_err(|e| crate::Error::configuration(format!("invalid base URL {base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(crate::Error::configuration(format!(
                "unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        let connect_timeout_secs = env::var("SPECGEN_HTTP_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .pool_max_idle_per_host(
                env::var("SPECGEN_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            );

        let timeout = timeout_override.or_else(|| {
            env::var("SPECGEN_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
        });
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST the generation request and return the raw response. Status
    /// handling and body reading belong to the driver.
    pub async fn post_generate(&self, request: &GenerationRequest) -> Result<reqwest::Response> {
        let url = format!("{}/generate", self.base_url);
        self.client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| crate::Error::Transport(TransportError::Http(e)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}
