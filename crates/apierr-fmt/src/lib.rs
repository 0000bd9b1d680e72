//! printf-style interpolation for API error messages
//!
//! Templates use `%` directives (`%s`, `%d`, `%v`, `%q`, `%x`, `%.2f`, ...)
//! filled from a slice of [`Arg`] values. Interpolation never fails: a
//! directive without a matching argument, or an argument of the wrong kind,
//! shows up in the output as a `%!` token instead.
//!
//! ```
//! use apierr_fmt::sprintf;
//!
//! assert_eq!(sprintf("user %s not found (id %d)", &["ada".into(), 42.into()]), "user ada not found (id 42)");
//! assert_eq!(sprintf("id %d", &["abc".into()]), "id %!d(string=abc)");
//! ```

#![allow(clippy::must_use_candidate)]

mod arg;
mod float;
mod printf;
mod quote;
mod verb;

pub use arg::Arg;
pub use printf::{Formatted, sprintf, sprintf_checked};
