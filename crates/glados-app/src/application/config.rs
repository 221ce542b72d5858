use std::path::PathBuf;

use glados_domain::DomainError;
use glados_infrastructure::http::{default_header_template, CHECKIN_PAYLOAD_TOKEN};
use reqwest::header::HeaderMap;
use serde_json::json;

pub const DEFAULT_CHECKIN_URL: &str = "https://glados.space/api/user/checkin";
pub const DEFAULT_STATUS_URL: &str = "https://glados.space/api/user/status";

/// Separator between account cookies in `COOKIES`
const COOKIE_SEPARATOR: char = '&';

/// Fixed part of every account request
#[derive(Debug, Clone)]
pub struct RequestTemplate {
    pub headers: HeaderMap,
    pub payload: serde_json::Value,
}

impl Default for RequestTemplate {
    fn default() -> Self {
        Self {
            headers: default_header_template(),
            payload: json!({ "token": CHECKIN_PAYLOAD_TOKEN }),
        }
    }
}

/// Settings for one batch run, read once at startup
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Push gateway token; empty disables notification
    pub send_key: String,
    /// One session cookie per account, in processing order
    pub cookies: Vec<String>,
    pub checkin_url: String,
    pub status_url: String,
    pub request: RequestTemplate,
    /// Directory for the JSON log file, if any
    pub log_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; missing or blank keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            send_key: non_blank("SENDKEY")
                .map(|key| key.trim().to_string())
                .unwrap_or_default(),
            cookies: non_blank("COOKIES")
                .map(|raw| parse_cookies(&raw))
                .unwrap_or_default(),
            checkin_url: non_blank("GLADOS_CHECKIN_URL")
                .unwrap_or_else(|| DEFAULT_CHECKIN_URL.to_string()),
            status_url: non_blank("GLADOS_STATUS_URL")
                .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string()),
            request: RequestTemplate::default(),
            log_dir: non_blank("LOG_DIR").map(PathBuf::from),
        }
    }

    /// Reject endpoint overrides that are not absolute URLs
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, value) in [
            ("GLADOS_CHECKIN_URL", &self.checkin_url),
            ("GLADOS_STATUS_URL", &self.status_url),
        ] {
            url::Url::parse(value).map_err(|e| {
                DomainError::Configuration(format!("{} is not a valid URL ({}): {}", name, value, e))
            })?;
        }
        Ok(())
    }

    pub fn notification_enabled(&self) -> bool {
        !self.send_key.is_empty()
    }
}

/// Split `COOKIES` on `&`, trimming entries and dropping blank ones
pub fn parse_cookies(raw: &str) -> Vec<String> {
    raw.split(COOKIE_SEPARATOR)
        .map(str::trim)
        .filter(|cookie| !cookie.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_parse_cookies_filters_blanks() {
        assert_eq!(
            parse_cookies(" a=1 & &b=2&&  "),
            vec!["a=1".to_string(), "b=2".to_string()]
        );
        assert!(parse_cookies("").is_empty());
        assert!(parse_cookies(" & ").is_empty());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = RunConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.send_key, "");
        assert!(config.cookies.is_empty());
        assert_eq!(config.checkin_url, DEFAULT_CHECKIN_URL);
        assert_eq!(config.status_url, DEFAULT_STATUS_URL);
        assert!(config.log_dir.is_none());
        assert!(!config.notification_enabled());
        assert_eq!(config.request.payload["token"], "glados.one");
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = RunConfig::from_lookup(lookup_from(&[
            ("SENDKEY", "key123"),
            ("COOKIES", "koa:sess=a&koa:sess=b"),
            ("GLADOS_CHECKIN_URL", "http://localhost:9000/checkin"),
            ("LOG_DIR", "/tmp/glados"),
        ]));

        assert_eq!(config.send_key, "key123");
        assert_eq!(config.cookies.len(), 2);
        assert_eq!(config.checkin_url, "http://localhost:9000/checkin");
        assert_eq!(config.status_url, DEFAULT_STATUS_URL);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/glados")));
        assert!(config.notification_enabled());
    }

    #[test]
    fn test_blank_send_key_disables_notification() {
        let config = RunConfig::from_lookup(lookup_from(&[("SENDKEY", "   ")]));
        assert!(!config.notification_enabled());
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let config = RunConfig::from_lookup(lookup_from(&[("GLADOS_STATUS_URL", "/api/status")]));
        let err = config.validate().unwrap_err();
        assert!(err.message().contains("GLADOS_STATUS_URL"));

        assert!(RunConfig::from_lookup(lookup_from(&[])).validate().is_ok());
    }
}
