use http::StatusCode;
use thiserror::Error;

/// Trait for domain errors that can be reported as an [`ErrorPayload`](crate::ErrorPayload)
///
/// Implemented by each feature's error type. Payload construction reads the
/// status and the client-safe message, keeping domain errors decoupled from
/// the wire formats.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

/// Errors reading an [`ErrorPayload`](crate::ErrorPayload) back from the wire
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The `error` field is not the reason phrase of the status code
    #[error("label {label:?} is not the reason phrase for status {status_code}")]
    LabelMismatch { status_code: u16, label: String },
}

/// Errors loading negotiation configuration
#[cfg(feature = "negotiation")]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed or has unknown keys
    #[error("failed to parse error format config: {0}")]
    Parse(#[from] toml::de::Error),
}
