//! 请求执行逻辑：单个生成回合的流式读取与终态分类。
//!
//! Stream transport driver (single turn).
//!
//! Lifecycle: `Idle → Requesting → Streaming → {Completed, Aborted,
//! Failed}`. The read-decode-forward loop is strictly sequential: chunk N is
//! fully forwarded through the framer/decoder/session before chunk N+1 is
//! requested, so event order is arrival order.

use futures::StreamExt;
use std::time::Instant;
use tracing::{debug, warn};

use crate::client::types::{CancelHandle, TurnObserver, TurnOutcome, TurnStats};
use crate::pipeline::StreamSession;
use crate::transport::TransportError;
use crate::types::{GenerationRequest, StreamEvent};
use crate::utils::Utf8StreamDecoder;
use crate::{Error, Result};

use super::core::SpecGenClient;

impl SpecGenClient {
    /// Run one generation turn to its terminal state.
    ///
    /// Exactly one of `on_complete` / `on_error` / `on_abort` fires, after
    /// zero or more `on_chunk` calls. On failure the partially accumulated
    /// session state is retained, not rolled back, so callers can show
    /// whatever streamed before the failure.
    pub(crate) async fn run_turn(
        &self,
        request: &GenerationRequest,
        session: &mut StreamSession,
        observer: &dyn TurnObserver,
        cancel: &CancelHandle,
    ) -> (TurnOutcome, TurnStats) {
        let started = Instant::now();
        let mut stats = TurnStats::default();

        let result = self
            .drive(request, session, observer, cancel, started, &mut stats)
            .await;
        stats.duration_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(()) => {
                if stats.event_count == 0 {
                    warn!(
                        mode = %request.mode,
                        "stream completed without any decodable events"
                    );
                }
                observer.on_complete().await;
                (TurnOutcome::Completed, stats)
            }
            // Cancellation wins over whatever error the teardown surfaced:
            // the transport cannot tell "user cancelled" from "connection
            // broke", so ask the handle instead of matching error identity.
            Err(_) if cancel.is_cancelled() => {
                debug!(duration_ms = stats.duration_ms, "turn aborted by caller");
                observer.on_abort().await;
                (TurnOutcome::Aborted, stats)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(error = %reason, duration_ms = stats.duration_ms, "generation turn failed");
                observer.on_error(&reason).await;
                (TurnOutcome::Failed(reason), stats)
            }
        }
    }

    async fn drive(
        &self,
        request: &GenerationRequest,
        session: &mut StreamSession,
        observer: &dyn TurnObserver,
        cancel: &CancelHandle,
        started: Instant,
        stats: &mut TurnStats,
    ) -> Result<()> {
        let resp = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            resp = self.transport().post_generate(request) => resp?,
        };

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Remote { status, message });
        }

        if !request.stream {
            return self
                .drive_blocking(resp, session, observer, started, stats)
                .await;
        }

        let mut body = Box::pin(resp.bytes_stream());
        let mut decoder = Utf8StreamDecoder::new();
        loop {
            // Biased: once cancellation is requested, stop issuing reads
            // even if more data is already available.
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                next = body.next() => next,
            };
            match next {
                Some(Ok(bytes)) => {
                    let text = decoder.decode(&bytes);
                    Self::forward(&text, session, observer, started, stats).await;
                }
                Some(Err(e)) => {
                    return Err(Error::Transport(TransportError::Http(e)));
                }
                None => {
                    // End of stream: flush the text decoder once so residual
                    // buffered bytes are forwarded as a final fragment.
                    let tail = decoder.flush();
                    Self::forward(&tail, session, observer, started, stats).await;
                    return Ok(());
                }
            }
        }
    }

    /// Non-streaming fallback: one complete JSON body, one synthesized
    /// content event. Bypasses the line framer entirely.
    async fn drive_blocking(
        &self,
        resp: reqwest::Response,
        session: &mut StreamSession,
        observer: &dyn TurnObserver,
        started: Instant,
        stats: &mut TurnStats,
    ) -> Result<()> {
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let body: serde_json::Value = serde_json::from_str(&text)?;

        if let Some(markdown) = body.get("markdown_content").and_then(|v| v.as_str()) {
            session.apply(StreamEvent::Content {
                content: markdown.to_string(),
            });
            stats.event_count += 1;
            stats.chunk_count += 1;
            stats.first_chunk_ms = Some(started.elapsed().as_millis() as u64);
            observer.on_chunk(markdown).await;
        }
        Ok(())
    }

    async fn forward(
        text: &str,
        session: &mut StreamSession,
        observer: &dyn TurnObserver,
        started: Instant,
        stats: &mut TurnStats,
    ) {
        if text.is_empty() {
            return;
        }
        stats.event_count += session.push_chunk(text) as u64;
        stats.chunk_count += 1;
        stats
            .first_chunk_ms
            .get_or_insert_with(|| started.elapsed().as_millis() as u64);
        observer.on_chunk(text).await;
    }
}
