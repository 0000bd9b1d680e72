//! One constructor per common error status
//!
//! Each is [`create`] with the status code filled in.

use apierr_fmt::Arg;
use http::StatusCode;

use crate::payload::{ErrorPayload, create};

/// 400 Bad Request
pub fn bad_request(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::BAD_REQUEST.as_u16(), template, args)
}

/// 401 Unauthorized
pub fn unauthorized(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::UNAUTHORIZED.as_u16(), template, args)
}

/// 403 Forbidden
pub fn forbidden(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::FORBIDDEN.as_u16(), template, args)
}

/// 404 Not Found
pub fn not_found(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::NOT_FOUND.as_u16(), template, args)
}

/// 405 Method Not Allowed
pub fn method_not_allowed(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::METHOD_NOT_ALLOWED.as_u16(), template, args)
}

/// 406 Not Acceptable
pub fn not_acceptable(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::NOT_ACCEPTABLE.as_u16(), template, args)
}

/// 408 Request Timeout
pub fn client_timeout(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::REQUEST_TIMEOUT.as_u16(), template, args)
}

/// 409 Conflict
pub fn conflict(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::CONFLICT.as_u16(), template, args)
}

/// 410 Gone
pub fn gone(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::GONE.as_u16(), template, args)
}

/// 429 Too Many Requests
pub fn too_many_requests(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::TOO_MANY_REQUESTS.as_u16(), template, args)
}

/// 500 Internal Server Error
pub fn internal_error(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::INTERNAL_SERVER_ERROR.as_u16(), template, args)
}

/// 501 Not Implemented
pub fn not_implemented(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::NOT_IMPLEMENTED.as_u16(), template, args)
}

/// 502 Bad Gateway
pub fn bad_gateway(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::BAD_GATEWAY.as_u16(), template, args)
}

/// 503 Service Unavailable
pub fn unavailable(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::SERVICE_UNAVAILABLE.as_u16(), template, args)
}

/// 504 Gateway Timeout
pub fn gateway_timeout(template: &str, args: &[Arg]) -> ErrorPayload {
    create(StatusCode::GATEWAY_TIMEOUT.as_u16(), template, args)
}
