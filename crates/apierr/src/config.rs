use serde::Deserialize;

use crate::error::ConfigError;
use crate::format::Format;

/// How error formats are chosen for a request
///
/// ```toml
/// default_format = "xml"
/// strict = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NegotiationConfig {
    /// Format used when `Accept` is absent, a wildcard, or unsatisfiable
    #[serde(default)]
    pub default_format: Format,
    /// Reject unsatisfiable `Accept` headers with 406 instead of falling back
    #[serde(default)]
    pub strict: bool,
}

impl NegotiationConfig {
    /// Parse from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML, names an unknown
    /// format, or contains unknown keys
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = NegotiationConfig::from_toml("").unwrap();
        assert_eq!(config, NegotiationConfig::default());
        assert_eq!(config.default_format, Format::Json);
        assert!(!config.strict);
    }

    #[test]
    fn deserialize_full_config() {
        let config = NegotiationConfig::from_toml(indoc! {r#"
            default_format = "text"
            strict = true
        "#})
        .unwrap();

        assert_eq!(config.default_format, Format::Text);
        assert!(config.strict);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = NegotiationConfig::from_toml(r#"default_format = "yaml""#).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse error format config"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = NegotiationConfig::from_toml(indoc! {r#"
            default_format = "xml"
            pretty = true
        "#})
        .unwrap_err();
        assert!(err.to_string().contains("pretty"));
    }

    #[test]
    fn embeds_in_a_larger_config() {
        #[derive(Deserialize)]
        struct ServerConfig {
            errors: NegotiationConfig,
        }

        let config: ServerConfig = toml::from_str(indoc! {r#"
            [errors]
            default_format = "xml"
        "#})
        .unwrap();
        assert_eq!(config.errors.default_format, Format::Xml);
    }
}
