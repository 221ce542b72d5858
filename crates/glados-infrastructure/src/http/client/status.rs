use glados_domain::check_in::truncate_days;
use glados_domain::{AccountError, AccountStatus};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info};

use super::types::{excerpt, transport_error, StatusReply};

impl super::CheckinExecutor {
    /// GET the account status; only transport failures are returned as errors
    pub(super) async fn query_status(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<StatusReply, AccountError> {
        let response = self
            .client
            .get(url)
            .headers(headers)
            .timeout(self.timeouts.status_query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            error!(
                status = status.as_u16(),
                "Status query failed: {}",
                excerpt(&text, 200)
            );
            return Ok(StatusReply {
                success: false,
                status: Err(AccountError::Status(status.as_u16())),
            });
        }

        let parsed = parse_status_body(&text);
        match &parsed {
            Ok(account) => info!(
                email = %account.email,
                left_days = account.left_days,
                "Account status received"
            ),
            Err(e) => error!("Failed to parse status response: {}", e),
        }

        Ok(StatusReply {
            success: true,
            status: parsed,
        })
    }
}

/// Parse `{"data": {"leftDays": "5.0", "email": "a@b.com"}}`.
///
/// A missing `data` object or missing fields fall back to defaults;
/// values of the wrong shape are parse errors.
pub(super) fn parse_status_body(text: &str) -> Result<AccountStatus, AccountError> {
    let body: Value =
        serde_json::from_str(text).map_err(|e| AccountError::Parse(e.to_string()))?;

    if !body.is_object() {
        return Err(AccountError::Parse(
            "status response is not a JSON object".to_string(),
        ));
    }

    let data = match body.get("data") {
        None => {
            return Ok(AccountStatus {
                email: "unknown".to_string(),
                left_days: 0,
            })
        }
        Some(data) if data.is_object() => data,
        Some(other) => {
            return Err(AccountError::Parse(format!(
                "unexpected data field: {}",
                other
            )))
        }
    };

    let left_days = match data.get("leftDays") {
        None => 0,
        Some(value) => parse_left_days(value)?,
    };

    let email = match data.get("email") {
        None => "unknown".to_string(),
        Some(Value::String(email)) => email.clone(),
        Some(other) => other.to_string(),
    };

    Ok(AccountStatus { email, left_days })
}

/// `leftDays` arrives as a number or a numeric string
fn parse_left_days(value: &Value) -> Result<i64, AccountError> {
    let days = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    days.and_then(truncate_days)
        .ok_or_else(|| AccountError::Parse(format!("invalid leftDays value: {}", value)))
}
