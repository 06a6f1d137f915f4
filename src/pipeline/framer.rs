//! Line framing over arbitrarily chunked text fragments.

/// Accumulates text fragments and yields complete newline-terminated lines.
///
/// The internal buffer always holds exactly the suffix of all text fed so
/// far that follows the last newline. A trailing fragment that never sees a
/// terminating newline is never yielded, not even at end-of-stream — the
/// backend terminates every event line, and flushing the tail here could
/// double-emit against a backend that does. See [`feed`](Self::feed).
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: String,
}

impl LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `fragment` and drain every complete line it closes.
    ///
    /// Lines are trimmed of surrounding whitespace; lines that trim to empty
    /// are still yielded and must be skipped by the caller. A fragment with
    /// no newline only extends the buffer; one with several newlines yields
    /// several lines in order.
    pub fn feed(&mut self, fragment: &str) -> Vec<String> {
        self.buf.push_str(fragment);

        let mut lines = Vec::new();
        while let Some(idx) = self.buf.find('\n') {
            let line = self.buf[..idx].trim().to_string();
            self.buf.drain(..=idx);
            lines.push(line);
        }
        lines
    }

    /// Drop any buffered partial line. Must pair with the session reset so a
    /// cancelled turn cannot leak its tail into the next one.
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
