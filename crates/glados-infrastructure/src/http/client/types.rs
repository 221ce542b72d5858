use glados_domain::AccountError;
use reqwest::header::{self, HeaderMap, HeaderValue};

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/102.0.0.0 Safari/537.36";

/// Value of the `token` field in the check-in body
pub const CHECKIN_PAYLOAD_TOKEN: &str = "glados.one";

/// Fixed headers sent with both account requests; the cookie is added per account
pub fn default_header_template() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://glados.space/console/checkin"),
    );
    headers.insert(
        header::ORIGIN,
        HeaderValue::from_static("https://glados.space"),
    );
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json;charset=UTF-8"),
    );
    headers
}

/// Parsed check-in reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct CheckInReply {
    pub success: bool,
    pub check_result: String,
    pub points: i64,
    pub points_change: i64,
}

/// Parsed status reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct StatusReply {
    pub success: bool,
    pub status: Result<glados_domain::AccountStatus, AccountError>,
}

/// Map a reqwest failure onto the transport variants of `AccountError`
pub(super) fn transport_error(error: reqwest::Error) -> AccountError {
    if error.is_timeout() {
        AccountError::Timeout(error.to_string())
    } else if error.is_connect() {
        AccountError::Connection(error.to_string())
    } else {
        AccountError::Unknown(error.to_string())
    }
}

/// First `max_chars` characters of a body, for log lines and messages
pub(super) fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
