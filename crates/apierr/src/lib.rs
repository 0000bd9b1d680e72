//! Uniform error payloads for HTTP APIs
//!
//! An [`ErrorPayload`] carries a status code, its reason phrase and a
//! message, and renders as plain text, JSON, or XML:
//!
//! ```
//! let payload = apierr::not_found("user %s does not exist", &["ada".into()]);
//!
//! assert_eq!(payload.to_text(), b"404 Not Found: user ada does not exist");
//! assert_eq!(
//!     payload.to_json(),
//!     br#"{"statusCode":404,"error":"Not Found","message":"user ada does not exist"}"#
//! );
//! ```
//!
//! Messages are printf-style templates (see [`apierr_fmt`]); without
//! arguments the template is taken literally.
//!
//! The `negotiation` feature adds `negotiate`, which picks a format from a
//! request's `Accept` header, and a TOML-loadable `NegotiationConfig`.

#![allow(clippy::must_use_candidate, clippy::missing_panics_doc)]

#[cfg(feature = "negotiation")]
pub mod config;
pub mod error;
pub mod format;
#[cfg(feature = "negotiation")]
mod negotiation;
mod payload;
mod render;
pub mod shortcuts;
mod status;

pub use apierr_fmt::{Arg, sprintf};
#[cfg(feature = "negotiation")]
pub use config::NegotiationConfig;
#[cfg(feature = "negotiation")]
pub use error::ConfigError;
pub use error::{HttpError, PayloadError};
pub use format::Format;
#[cfg(feature = "negotiation")]
pub use negotiation::{Rendered, negotiate};
pub use payload::{ErrorPayload, create};
pub use render::XML_HEADER;
pub use shortcuts::*;
pub use status::reason_phrase;
