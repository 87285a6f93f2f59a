//! Configuration for the logo-search service.
//!
//! The original client shipped with the bearer token embedded in source. Here
//! the token is supplied at build time through the `LOGO_DEV_TOKEN` environment
//! variable; when it is absent every lookup short-circuits to the fallback
//! image and no request leaves the client.

/// Placeholder image rendered whenever a lookup fails or is not configured.
pub const FALLBACK_LOGO: &str = "/assets/placeholder-logo.svg";

const DEFAULT_ENDPOINT: &str = "https://api.logo.dev/search";

/// Settings for [`crate::search_logo`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoConfig {
    /// Search endpoint; the company name is passed as the `q` query parameter.
    pub endpoint: String,
    /// Bearer token for the service. `None` disables lookups entirely.
    pub token: Option<String>,
}

impl LogoConfig {
    /// Build a config from the `LOGO_DEV_TOKEN` compile-time env var.
    pub fn from_env() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: option_env!("LOGO_DEV_TOKEN").map(str::to_string),
        }
    }

    /// Config with an explicit token, mainly for tests.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: Some(token.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_without_token() {
        let cfg = LogoConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: None,
        };
        assert!(!cfg.is_configured());
    }

    #[test]
    fn test_with_token_is_configured() {
        assert!(LogoConfig::with_token("sk_test").is_configured());
    }
}
