use std::time::Duration;

/// Configuration for the timeout and pause durations used during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Check-in POST timeout
    pub check_in: Duration,

    /// Account status GET timeout
    pub status_query: Duration,

    /// Timeout for each attempt against the primary push endpoint
    pub push_primary: Duration,

    /// Timeout for each backup push endpoint
    pub push_backup: Duration,

    /// Pause between two accounts, keeps the service from rate limiting us
    pub account_pause: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same timeouts with no pause between accounts
    pub fn without_pause(mut self) -> Self {
        self.account_pause = Duration::ZERO;
        self
    }
}

/// Global timeout configuration instance
static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    check_in: Duration::from_secs(30),
    status_query: Duration::from_secs(30),
    push_primary: Duration::from_secs(30),
    push_backup: Duration::from_secs(20),
    account_pause: Duration::from_secs(1),
};
