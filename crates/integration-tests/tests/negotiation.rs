use apierr::{ErrorPayload, Format, HttpError, NegotiationConfig, negotiate};
use http::header::{ACCEPT, HeaderValue};
use http::{HeaderMap, StatusCode};

#[derive(Debug)]
struct QuotaExceeded {
    retry_after: u64,
}

impl std::fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quota exceeded, retry after {}s", self.retry_after)
    }
}

impl std::error::Error for QuotaExceeded {}

impl HttpError for QuotaExceeded {
    fn status_code(&self) -> StatusCode {
        StatusCode::TOO_MANY_REQUESTS
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

fn accept(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(value));
    headers
}

#[test]
fn domain_error_rendered_for_xml_client() {
    let config = NegotiationConfig::from_toml("default_format = \"text\"").unwrap();
    let payload = ErrorPayload::from_http_error(&QuotaExceeded { retry_after: 30 });

    let rendered = payload.render_for(&accept("application/xml, */*;q=0.1"), &config);

    assert_eq!(rendered.status_code, 429);
    assert_eq!(rendered.content_type(), "application/xml");
    insta::assert_snapshot!(
        String::from_utf8(rendered.body).unwrap(),
        @r#"<?xml version="1.0" encoding="UTF-8"?><error><status_code>429</status_code><error>Too Many Requests</error><message>quota exceeded, retry after 30s</message></error>"#
    );
}

#[test]
fn wildcard_uses_configured_default() {
    let config = NegotiationConfig::from_toml("default_format = \"text\"").unwrap();
    assert_eq!(negotiate(&accept("*/*"), &config), Ok(Format::Text));
    assert_eq!(negotiate(&HeaderMap::new(), &config), Ok(Format::Text));
}

#[test]
fn strict_config_rejects_unsupported_media() {
    let config = NegotiationConfig::from_toml("strict = true").unwrap();
    let payload = apierr::not_found("no such page", &[]);

    let rendered = payload.render_for(&accept("text/html"), &config);

    assert_eq!(rendered.status_code, 406);
    assert_eq!(rendered.content_type(), "application/json");
    let body: serde_json::Value = serde_json::from_slice(&rendered.body).unwrap();
    assert_eq!(body["error"], "Not Acceptable");
}
