use thiserror::Error;

/// Unified error type for the client.
///
/// This aggregates low-level failures into the categories a caller can act
/// on. Cancellation is represented here only so the driver can unwind the
/// read loop; it is reported to callers as an aborted turn, never as an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    /// Non-2xx response from the backend, with the body text as detail.
    #[error("API error: {status} - {message}")]
    Remote { status: u16, message: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The active turn's cancellation handle fired. Internal to the driver;
    /// classified as an aborted outcome before reaching callers.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
