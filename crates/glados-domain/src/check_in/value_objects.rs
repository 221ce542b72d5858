use serde::{Deserialize, Serialize};

/// Classification of a single account's check-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Repeat,
    Fail,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Repeat => "repeat",
            Outcome::Fail => "fail",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account data recovered from the status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub email: String,
    pub left_days: i64,
}

/// Why account status is unavailable.
///
/// `Parse` and `Status` come from a status query that did complete;
/// the transport variants mean the whole execution was cut short.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("failed to parse status response: {0}")]
    Parse(String),

    #[error("status query failed with HTTP {0}")]
    Status(u16),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl AccountError {
    /// Short tag used in reports in place of the account email
    pub fn tag(&self) -> &'static str {
        match self {
            AccountError::Parse(_) => "parse_error",
            AccountError::Status(_) => "status_error",
            AccountError::Timeout(_) => "timeout_error",
            AccountError::Connection(_) => "connection_error",
            AccountError::Unknown(_) => "unknown_error",
        }
    }

    /// Underlying error text without the variant prefix
    pub fn detail(&self) -> String {
        match self {
            AccountError::Parse(msg)
            | AccountError::Timeout(msg)
            | AccountError::Connection(msg)
            | AccountError::Unknown(msg) => msg.clone(),
            AccountError::Status(code) => code.to_string(),
        }
    }
}

/// Outcome of one account's check-in plus status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountResult {
    pub checkin_success: bool,
    pub status_success: bool,
    pub status: Result<AccountStatus, AccountError>,
    pub points: i64,
    pub points_change: i64,
    pub message_status: String,
    pub check_result: String,
    pub outcome: Outcome,
}

impl AccountResult {
    /// Result for an execution aborted by a transport failure.
    /// The status query never ran, so nothing about the account is known.
    pub fn transport_failure(error: AccountError) -> Self {
        let message_status = match &error {
            AccountError::Timeout(_) => "request timed out".to_string(),
            AccountError::Connection(_) => "connection failed".to_string(),
            other => format!("unknown error: {}", other.detail()),
        };

        Self {
            checkin_success: false,
            status_success: false,
            points: 0,
            points_change: 0,
            message_status,
            check_result: error.detail(),
            status: Err(error),
            outcome: Outcome::Fail,
        }
    }

    /// Account email, or the failure tag when the status is unavailable
    pub fn email(&self) -> &str {
        match &self.status {
            Ok(status) => &status.email,
            Err(error) => error.tag(),
        }
    }

    pub fn left_days(&self) -> i64 {
        self.status.as_ref().map(|s| s.left_days).unwrap_or(0)
    }
}
