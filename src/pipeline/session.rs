//! Session state and event dispatch for one generation turn.

use tracing::debug;

use crate::pipeline::{decode_line, LineFramer};
use crate::types::{StreamEvent, TokenUsage};

/// Inline marker appended to the document body when the server reports a
/// logical error mid-stream.
const ERROR_MARKER: &str = "\n\n❌ ";
/// Fallback text for an error event that carries no message.
const ERROR_FALLBACK: &str = "request failed";

/// Accumulated state for one generation turn.
///
/// Content fields only grow while a turn is running; the usage snapshot is
/// replaced wholesale on each `usage` event (last write wins, no merging of
/// partial updates).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    markdown_content: String,
    reasoning_content: String,
    token_usage: Option<TokenUsage>,
    is_full_prd: Option<bool>,
}

impl SessionState {
    /// Fold one decoded event into the state.
    pub fn apply(&mut self, event: StreamEvent) {
        match event {
            StreamEvent::Content { content } => {
                self.markdown_content.push_str(&content);
            }
            StreamEvent::Reasoning { content } => {
                self.reasoning_content.push_str(&content);
            }
            StreamEvent::Usage {
                input_tokens,
                output_tokens,
                total_tokens,
            } => {
                self.token_usage = Some(TokenUsage {
                    input_tokens,
                    output_tokens,
                    total_tokens,
                });
            }
            StreamEvent::Metadata { is_full_prd } => {
                if let Some(flag) = is_full_prd {
                    self.is_full_prd = Some(flag);
                }
            }
            StreamEvent::Error { message } => {
                // A server-side error is content, not a transport failure:
                // keep whatever already streamed and surface the failure
                // inline where the document stops.
                self.markdown_content.push_str(ERROR_MARKER);
                self.markdown_content
                    .push_str(message.as_deref().unwrap_or(ERROR_FALLBACK));
            }
            StreamEvent::Unknown => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn markdown_content(&self) -> &str {
        &self.markdown_content
    }

    pub fn reasoning_content(&self) -> &str {
        &self.reasoning_content
    }

    pub fn token_usage(&self) -> Option<TokenUsage> {
        self.token_usage
    }

    pub fn is_full_prd(&self) -> Option<bool> {
        self.is_full_prd
    }
}

/// Framer + state for one turn, owned by the driver.
///
/// All mutation goes through `&mut self`, so a feed can never race a reset;
/// the two sub-resets happen inside one call and are atomic as far as any
/// caller can observe.
#[derive(Debug, Default)]
pub struct StreamSession {
    framer: LineFramer,
    state: SessionState,
}

impl StreamSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one decoded text fragment through frame -> decode -> apply.
    ///
    /// Returns the number of events applied (unknown and blank lines do not
    /// count).
    pub fn push_chunk(&mut self, text: &str) -> usize {
        let mut applied = 0;
        for line in self.framer.feed(text) {
            if line.is_empty() {
                continue;
            }
            let event = decode_line(&line);
            if event == StreamEvent::Unknown {
                debug!("skipping unrecognized or malformed stream line");
                continue;
            }
            self.state.apply(event);
            applied += 1;
        }
        applied
    }

    /// Apply an event directly, bypassing the framer. Used by the
    /// non-streaming fallback path.
    pub fn apply(&mut self, event: StreamEvent) {
        self.state.apply(event);
    }

    /// Clear the accumulated state *and* the line buffer together. A reset
    /// mid-stream must not leak a dangling partial line into the next turn.
    pub fn reset(&mut self) {
        self.framer.clear();
        self.state.reset();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
