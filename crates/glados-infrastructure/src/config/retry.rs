use reqwest::StatusCode;
use std::time::Duration;

/// Retry policy for push notification delivery.
///
/// Two layers: a transparent status retry on every GET (like a retrying
/// connection adapter), and a number of outer attempts with their own
/// exponential backoff. Running out of status retries counts as a failed
/// outer attempt.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Outer delivery attempts against the primary endpoint (default: 3)
    pub attempts: u32,
    /// Base delay after a failed outer attempt, doubled each time (default: 1s)
    pub attempt_backoff: Duration,
    /// Extra requests made when the gateway answers a retryable status (default: 3)
    pub status_retries: u32,
    /// Backoff factor for status retries (default: 2s)
    pub status_backoff_factor: Duration,
    /// Status codes that trigger a status retry
    pub retry_statuses: Vec<StatusCode>,
    /// Statuses whose `Retry-After` header replaces the computed delay
    pub retry_after_statuses: Vec<StatusCode>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            attempt_backoff: Duration::from_secs(1),
            status_retries: 3,
            status_backoff_factor: Duration::from_secs(2),
            retry_statuses: vec![
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::BAD_GATEWAY,
                StatusCode::SERVICE_UNAVAILABLE,
                StatusCode::GATEWAY_TIMEOUT,
            ],
            retry_after_statuses: vec![
                StatusCode::PAYLOAD_TOO_LARGE,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::SERVICE_UNAVAILABLE,
            ],
        }
    }
}

impl RetryConfig {
    /// Policy with every delay set to zero
    pub fn immediate() -> Self {
        Self {
            attempt_backoff: Duration::ZERO,
            status_backoff_factor: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn is_retryable_status(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status)
    }

    pub fn honours_retry_after(&self, status: StatusCode) -> bool {
        self.retry_after_statuses.contains(&status)
    }

    /// Delay after the zero-based outer `attempt` failed: base * 2^attempt
    pub fn attempt_delay(&self, attempt: u32) -> Duration {
        self.attempt_backoff.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Delay before the one-based status `retry`.
    /// The first retry goes out immediately, then factor * 2^(retry - 1).
    pub fn status_delay(&self, retry: u32) -> Duration {
        if retry <= 1 {
            Duration::ZERO
        } else {
            self.status_backoff_factor
                .saturating_mul(2u32.saturating_pow(retry - 1))
        }
    }
}
