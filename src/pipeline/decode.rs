//! Event decoding (one complete line -> typed event).

use crate::types::StreamEvent;

/// Decode a single complete line as a stream event.
///
/// Any parse failure — invalid JSON, a non-object, a `content` field that is
/// not a string — yields [`StreamEvent::Unknown`]. Malformed lines never
/// reach consumers and never abort the stream; the wire format is evolving
/// and forward compatibility must not crash the client.
pub fn decode_line(line: &str) -> StreamEvent {
    serde_json::from_str(line).unwrap_or(StreamEvent::Unknown)
}
