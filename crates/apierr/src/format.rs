use serde::{Deserialize, Serialize};

/// Wire encoding of an error payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// `<code> <label>: <message>`
    Text,
    /// `{"statusCode":…,"error":…,"message":…}`
    #[default]
    Json,
    /// `<?xml …?><error>…</error>`
    Xml,
}

impl Format {
    /// Every supported format, in the order used to break ties
    pub const ALL: [Self; 3] = [Self::Json, Self::Xml, Self::Text];

    /// `Content-Type` header value for this format
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    /// Format for a concrete media type such as `application/problem+json`
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let media_type = media_type.trim().to_ascii_lowercase();
        match media_type.as_str() {
            "text/plain" => Some(Self::Text),
            "application/json" => Some(Self::Json),
            "application/xml" | "text/xml" => Some(Self::Xml),
            other if other.ends_with("+json") => Some(Self::Json),
            other if other.ends_with("+xml") => Some(Self::Xml),
            _ => None,
        }
    }
}
