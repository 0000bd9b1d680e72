use apierr_fmt::Arg;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{HttpError, PayloadError};
use crate::status::reason_phrase;

/// Error payload returned to API consumers
///
/// Holds the numeric status, its reason phrase, and a free-form message.
/// Values are immutable once built; render them with
/// [`to_text`](Self::to_text), [`to_json`](Self::to_json) or
/// [`to_xml`](Self::to_xml).
///
/// Deserializing checks that `error` is the reason phrase of `statusCode`,
/// so a parsed payload holds the same invariant as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(try_from = "WirePayload")]
#[error("{status_code} {error}: {message}")]
pub struct ErrorPayload {
    #[serde(rename = "statusCode")]
    status_code: u16,
    error: String,
    message: String,
}

/// JSON layout as received, before the label is checked
#[derive(Deserialize)]
struct WirePayload {
    #[serde(rename = "statusCode")]
    status_code: u16,
    error: String,
    message: String,
}

impl TryFrom<WirePayload> for ErrorPayload {
    type Error = PayloadError;

    fn try_from(wire: WirePayload) -> Result<Self, Self::Error> {
        if wire.error != reason_phrase(wire.status_code) {
            return Err(PayloadError::LabelMismatch {
                status_code: wire.status_code,
                label: wire.error,
            });
        }

        Ok(Self {
            status_code: wire.status_code,
            error: wire.error,
            message: wire.message,
        })
    }
}

impl ErrorPayload {
    /// Build a payload from a domain error
    ///
    /// The client message is taken verbatim, `%` included.
    pub fn from_http_error<E>(error: &E) -> Self
    where
        E: HttpError + ?Sized,
    {
        let status_code = error.status_code().as_u16();
        Self {
            status_code,
            error: reason_phrase(status_code).to_owned(),
            message: error.client_message(),
        }
    }

    /// Numeric HTTP status code
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Reason phrase for the status code, empty when unregistered
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Caller-supplied message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status as an `http` type, if the code is in the valid 100..=999 range
    pub fn http_status(&self) -> Option<http::StatusCode> {
        http::StatusCode::from_u16(self.status_code).ok()
    }
}

/// Create a payload for `status_code`, interpolating `args` into `template`
///
/// With no arguments the template is used as-is, so a literal `%` in a plain
/// message is never read as a directive. The status code is not validated;
/// unregistered codes get an empty reason phrase.
pub fn create(status_code: u16, template: &str, args: &[Arg]) -> ErrorPayload {
    let message = if args.is_empty() {
        template.to_owned()
    } else {
        let formatted = apierr_fmt::sprintf_checked(template, args);
        if !formatted.clean {
            tracing::debug!(status_code, template, "error message template did not match its arguments");
        }
        formatted.text
    };

    ErrorPayload {
        status_code,
        error: reason_phrase(status_code).to_owned(),
        message,
    }
}

impl<E> From<&E> for ErrorPayload
where
    E: HttpError,
{
    fn from(error: &E) -> Self {
        Self::from_http_error(error)
    }
}
