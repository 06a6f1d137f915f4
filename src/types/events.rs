//! Streaming events decoded from the generation wire protocol.

use serde::{Deserialize, Deserializer, Serialize};

/// One decoded line of the newline-delimited JSON stream.
///
/// The wire format is evolving; decoding is deliberately closed over the
/// known `type` values with [`StreamEvent::Unknown`] catching everything
/// else, so that new event types never break older clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Markdown delta, appended to the document body.
    Content { content: String },

    /// Reasoning delta, appended to the separate thinking transcript.
    Reasoning { content: String },

    /// Token usage snapshot. Replaces any earlier snapshot wholesale.
    Usage {
        #[serde(default, deserialize_with = "token_count")]
        input_tokens: u64,
        #[serde(default, deserialize_with = "token_count")]
        output_tokens: u64,
        #[serde(default, deserialize_with = "token_count")]
        total_tokens: u64,
    },

    /// Side information about the response's completeness.
    Metadata {
        #[serde(default)]
        is_full_prd: Option<bool>,
    },

    /// Server-reported failure. Rendered inline into the document body,
    /// not treated as a transport failure.
    Error {
        #[serde(default)]
        message: Option<String>,
    },

    /// Unrecognized `type` value. Ignored by the dispatcher.
    #[serde(other)]
    Unknown,
}

/// Token usage reported by the backend for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
}

/// Lenient counter decoding: absent or non-numeric values become 0 rather
/// than failing the whole event.
fn token_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<u64>().unwrap_or(0),
        _ => 0,
    })
}
