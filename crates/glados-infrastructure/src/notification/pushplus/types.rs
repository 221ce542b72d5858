use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;

use crate::config::{RetryConfig, TimeoutConfig};

pub(super) const TEMPLATE: &str = "html";

pub const PRIMARY_URL: &str = "https://www.pushplus.plus/send";
pub const BACKUP_URLS: [&str; 2] = [
    "https://pushplus.hxtrip.com/send",
    "http://www.pushplus.plus/send",
];

/// Where and how notifications are delivered
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Primary gateway endpoint, tried with retries
    pub primary_url: String,
    /// Backup endpoints, tried once each in order
    pub backup_urls: Vec<String>,
    pub timeouts: TimeoutConfig,
    pub retry: RetryConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            primary_url: PRIMARY_URL.to_string(),
            backup_urls: BACKUP_URLS.iter().map(|u| u.to_string()).collect(),
            timeouts: TimeoutConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

/// Status, `Retry-After` hint and body of one gateway response
#[derive(Debug)]
pub(super) struct GatewayReply {
    pub status: StatusCode,
    pub retry_after: Option<Duration>,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub(super) enum DeliveryError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("gateway still answered {status} after {retries} status retries")]
    RetryExhausted { status: StatusCode, retries: u32 },
}

impl DeliveryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DeliveryError::Request(e) => FailureKind::of(e),
            DeliveryError::RetryExhausted { .. } => FailureKind::RetryExhausted,
        }
    }
}

/// Category of a failed delivery request, used for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FailureKind {
    Tls,
    Connection,
    Timeout,
    RetryExhausted,
    Other,
}

impl FailureKind {
    pub fn of(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            FailureKind::Timeout
        } else if is_tls_error(error) {
            FailureKind::Tls
        } else if error.is_connect() {
            FailureKind::Connection
        } else {
            FailureKind::Other
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Tls => "TLS error",
            FailureKind::Connection => "connection error",
            FailureKind::Timeout => "request timed out",
            FailureKind::RetryExhausted => "too many error responses",
            FailureKind::Other => "request error",
        };
        write!(f, "{}", label)
    }
}

/// Parse a `Retry-After` value given either in seconds or as an HTTP date.
/// Dates in the past mean no wait.
pub(super) fn parse_retry_after(value: &str) -> Option<Duration> {
    let value = value.trim();
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    let at = DateTime::parse_from_rfc2822(value).ok()?;
    let wait = at.with_timezone(&Utc) - Utc::now();
    Some(wait.to_std().unwrap_or(Duration::ZERO))
}

/// reqwest folds TLS failures into connect errors; look through the source chain
fn is_tls_error(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = std::error::Error::source(error);
    while let Some(err) = source {
        let text = err.to_string().to_lowercase();
        if text.contains("certificate") || text.contains("tls") || text.contains("ssl") {
            return true;
        }
        source = err.source();
    }
    false
}
