use glados_domain::check_in::parse_points_change;
use glados_domain::AccountError;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info};

use super::types::{excerpt, transport_error, CheckInReply};

impl super::CheckinExecutor {
    /// POST the check-in body and parse whatever comes back
    pub(super) async fn post_check_in(
        &self,
        url: &str,
        headers: &HeaderMap,
        payload: &Value,
    ) -> Result<CheckInReply, AccountError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| AccountError::Unknown(format!("failed to encode payload: {}", e)))?;

        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .body(body)
            .timeout(self.timeouts.check_in)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            error!(
                status = status.as_u16(),
                "Check-in request failed: {}",
                excerpt(&text, 200)
            );
            return Ok(CheckInReply {
                success: false,
                check_result: format!(
                    "check-in request failed, status code: {}",
                    status.as_u16()
                ),
                ..CheckInReply::default()
            });
        }

        let reply = parse_check_in_body(&text);
        info!("Check-in response: {}", reply.check_result);
        Ok(reply)
    }
}

/// Parse a 200 check-in body of the form `{"message": "...", "points": 103}`
pub(super) fn parse_check_in_body(text: &str) -> CheckInReply {
    let data = match serde_json::from_str::<Value>(text) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to parse check-in response as JSON: {}", e);
            return CheckInReply {
                success: true,
                check_result: format!("JSON parse failed: {}", excerpt(text, 100)),
                ..CheckInReply::default()
            };
        }
    };

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let points = data.get("points").and_then(json_to_i64).unwrap_or(0);
    let points_change = parse_points_change(&message);

    CheckInReply {
        success: true,
        check_result: message,
        points,
        points_change,
    }
}

/// Integer from a JSON number; fractional values are truncated
fn json_to_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
}
