//! Choosing an error format from a request's `Accept` header

use http::HeaderMap;
use http::header::ACCEPT;

use crate::config::NegotiationConfig;
use crate::format::Format;
use crate::payload::ErrorPayload;
use crate::shortcuts::not_acceptable;

/// Payload rendered for a specific request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Status of the payload actually rendered
    pub status_code: u16,
    /// Format chosen for the body
    pub format: Format,
    /// Encoded body
    pub body: Vec<u8>,
}

impl Rendered {
    /// `Content-Type` header value for the body
    pub const fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// How one media range in `Accept` applies to the supported formats
#[derive(Debug, Clone, Copy)]
enum Range {
    Exact(Format),
    /// `text/*` or `application/*`
    Family(&'static str),
    Any,
    Unsupported,
}

impl Range {
    fn parse(media_type: &str) -> Self {
        let lower = media_type.to_ascii_lowercase();
        match lower.as_str() {
            "*/*" | "*" => Self::Any,
            "text/*" => Self::Family("text"),
            "application/*" => Self::Family("application"),
            _ => Format::from_media_type(&lower).map_or(Self::Unsupported, Self::Exact),
        }
    }

    const fn specificity(self) -> u8 {
        match self {
            Self::Exact(_) => 2,
            Self::Family(_) => 1,
            Self::Any | Self::Unsupported => 0,
        }
    }
}

/// Parse `q=` out of the parameters of one media range
///
/// Missing weights count as 1.0; malformed ones make the range unusable.
fn quality<'a>(params: impl Iterator<Item = &'a str>) -> Option<f32> {
    for param in params {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("q") {
            return value
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|q| (0.0..=1.0).contains(q));
        }
    }
    Some(1.0)
}

/// Pick the representation for a request from its `Accept` headers
///
/// The highest weighted range wins, then the most specific one, then the
/// earliest. Wildcards resolve to the configured default unless that format
/// was excluded with `q=0`. When nothing supported is acceptable the default
/// is used, or, in strict mode, a 406 payload is returned.
///
/// # Errors
///
/// In strict mode, returns a `Not Acceptable` payload when no supported
/// format matches the `Accept` header
pub fn negotiate(headers: &HeaderMap, config: &NegotiationConfig) -> Result<Format, ErrorPayload> {
    let accept = headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect::<Vec<_>>()
        .join(",");

    if accept.trim().is_empty() {
        return Ok(config.default_format);
    }

    let mut ranges = Vec::new();
    let mut excluded = Vec::new();
    for item in accept.split(',') {
        let mut parts = item.split(';');
        let media_type = parts.next().unwrap_or_default().trim();
        if media_type.is_empty() {
            continue;
        }
        let Some(q) = quality(parts) else {
            continue;
        };
        let range = Range::parse(media_type);
        if q <= 0.0 {
            if let Range::Exact(format) = range {
                excluded.push(format);
            }
            continue;
        }
        ranges.push((range, q));
    }

    let resolve = |range: Range| -> Option<Format> {
        let allowed = |format: &Format| !excluded.contains(format);
        match range {
            Range::Exact(format) => Some(format),
            Range::Family(family) => {
                let preferred = std::iter::once(config.default_format).chain(Format::ALL);
                preferred
                    .filter(allowed)
                    .find(|format| format.content_type().starts_with(family))
            }
            Range::Any => std::iter::once(config.default_format)
                .chain(Format::ALL)
                .find(allowed),
            Range::Unsupported => None,
        }
    };

    let mut best: Option<(Format, f32, u8)> = None;
    for (range, q) in ranges {
        let Some(format) = resolve(range) else {
            continue;
        };
        let specificity = range.specificity();
        let better = match best {
            None => true,
            Some((_, best_q, best_specificity)) => {
                q > best_q || ((q - best_q).abs() < f32::EPSILON && specificity > best_specificity)
            }
        };
        if better {
            best = Some((format, q, specificity));
        }
    }

    if let Some((format, _, _)) = best {
        return Ok(format);
    }

    if config.strict {
        return Err(not_acceptable(
            "none of the requested media types are available: %s",
            &[accept.into()],
        ));
    }

    tracing::debug!(accept = %accept, fallback = ?config.default_format, "no acceptable error format, using default");
    Ok(config.default_format)
}

impl ErrorPayload {
    /// Negotiate a format from `headers` and render into it
    ///
    /// A strict negotiation failure renders the resulting 406 payload in the
    /// default format instead.
    pub fn render_for(&self, headers: &HeaderMap, config: &NegotiationConfig) -> Rendered {
        match negotiate(headers, config) {
            Ok(format) => Rendered {
                status_code: self.status_code(),
                format,
                body: self.render(format),
            },
            Err(rejection) => Rendered {
                status_code: rejection.status_code(),
                format: config.default_format,
                body: rejection.render(config.default_format),
            },
        }
    }
}
