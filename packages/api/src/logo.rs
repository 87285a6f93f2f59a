//! # Logo lookup — best-effort company logo search
//!
//! One outbound GET per rendered company name, keyed by the `q` query
//! parameter. The service answers with a JSON array of matches; the first
//! entry wins. There is no retry, no deduplication across concurrent requests
//! for the same name, and no cancellation — a failed lookup simply renders the
//! placeholder image via [`logo_or_fallback`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{LogoConfig, FALLBACK_LOGO};

/// One match from the logo-search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoEntry {
    pub domain: String,
    pub logo_url: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("no logo token configured")]
    NotConfigured,
    #[error("logo request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("logo service returned status {0}")]
    Status(u16),
    #[error("no logo found for query")]
    NoMatch,
    #[error("unexpected logo response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Look up the logo for a company name. Returns the first match.
pub async fn search_logo(
    client: &reqwest::Client,
    config: &LogoConfig,
    company: &str,
) -> Result<LogoEntry, LogoError> {
    let token = config.token.as_deref().ok_or(LogoError::NotConfigured)?;

    let response = client
        .get(&config.endpoint)
        .query(&[("q", company)])
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LogoError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    first_entry(&body)
}

/// Parse a response body and pick the first match.
fn first_entry(body: &str) -> Result<LogoEntry, LogoError> {
    let entries: Vec<LogoEntry> = serde_json::from_str(body)?;
    entries.into_iter().next().ok_or(LogoError::NoMatch)
}

/// The fallback rule: any failure renders the placeholder. The returned source
/// is never empty.
pub fn logo_or_fallback(result: Result<LogoEntry, LogoError>) -> String {
    match result {
        Ok(entry) => entry.logo_url,
        Err(err) => {
            tracing::debug!("logo lookup fell back: {err}");
            FALLBACK_LOGO.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_picks_head_of_array() {
        let body = r#"[
            {"domain": "adobe.com", "logo_url": "https://img.logo.dev/adobe.com", "name": "Adobe"},
            {"domain": "adobe.io", "logo_url": "https://img.logo.dev/adobe.io", "name": "Adobe IO"}
        ]"#;
        let entry = first_entry(body).unwrap();
        assert_eq!(entry.domain, "adobe.com");
        assert_eq!(entry.name, "Adobe");
    }

    #[test]
    fn test_first_entry_empty_array_is_no_match() {
        assert!(matches!(first_entry("[]"), Err(LogoError::NoMatch)));
    }

    #[test]
    fn test_first_entry_rejects_malformed_body() {
        assert!(matches!(
            first_entry("{\"unexpected\": true}"),
            Err(LogoError::Decode(_))
        ));
    }

    #[test]
    fn test_fallback_on_any_error() {
        for err in [LogoError::NotConfigured, LogoError::Status(500), LogoError::NoMatch] {
            let src = logo_or_fallback(Err(err));
            assert_eq!(src, FALLBACK_LOGO);
            assert!(!src.is_empty());
        }
    }

    #[test]
    fn test_success_uses_logo_url() {
        let entry = LogoEntry {
            domain: "netflix.com".to_string(),
            logo_url: "https://img.logo.dev/netflix.com".to_string(),
            name: "Netflix".to_string(),
        };
        assert_eq!(logo_or_fallback(Ok(entry)), "https://img.logo.dev/netflix.com");
    }

    #[tokio::test]
    async fn test_search_without_token_short_circuits() {
        let cfg = LogoConfig {
            endpoint: "https://api.logo.dev/search".to_string(),
            token: None,
        };
        let client = reqwest::Client::new();
        assert!(matches!(
            search_logo(&client, &cfg, "Adobe").await,
            Err(LogoError::NotConfigured)
        ));
    }
}
