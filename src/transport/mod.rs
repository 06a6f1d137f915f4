//! HTTP transport to the generation backend.

pub mod http;

pub use http::{HttpTransport, TransportError, DEFAULT_BASE_URL};
