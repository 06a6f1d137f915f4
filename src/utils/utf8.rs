//! Incremental UTF-8 decoding across arbitrary chunk boundaries.

/// Decodes byte chunks to text, holding back an incomplete trailing
/// multi-byte sequence until the bytes that finish it arrive.
///
/// Invalid interior bytes become U+FFFD so one bad byte cannot poison the
/// rest of the stream. [`flush`](Self::flush) must be called exactly once at
/// end-of-stream to surface a dangling partial sequence.
#[derive(Debug, Default)]
pub struct Utf8StreamDecoder {
    // At most 3 bytes: the longest incomplete prefix of a 4-byte sequence.
    partial: Vec<u8>,
}

impl Utf8StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one chunk, joining it with any held-back bytes first.
    pub fn decode(&mut self, input: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.partial);
        bytes.extend_from_slice(input);

        let mut out = String::with_capacity(bytes.len());
        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match err.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        None => {
                            // Incomplete sequence at the end: hold it back
                            // for the next chunk.
                            self.partial = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Emit whatever remains buffered. A dangling partial sequence decodes
    /// to a single replacement character.
    pub fn flush(&mut self) -> String {
        if self.partial.is_empty() {
            String::new()
        } else {
            self.partial.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }
}
