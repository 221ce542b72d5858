mod check_in;
mod status;
mod types;

pub use types::{default_header_template, CHECKIN_PAYLOAD_TOKEN, USER_AGENT};

use anyhow::{Context, Result};
use glados_domain::check_in::classify;
use glados_domain::{AccountError, AccountResult};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::config::TimeoutConfig;
use crate::logging::redact;

/// Runs the check-in and status query for one account at a time.
///
/// The client keeps no cookie store, so nothing carries over between accounts.
pub struct CheckinExecutor {
    pub(super) client: Client,
    pub(super) timeouts: TimeoutConfig,
}

impl CheckinExecutor {
    pub fn new() -> Result<Self> {
        Self::with_timeouts(TimeoutConfig::default())
    }

    pub fn with_timeouts(timeouts: TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create check-in HTTP client")?;

        Ok(Self { client, timeouts })
    }

    /// Check in one account and classify the outcome.
    ///
    /// Never fails: HTTP and parse problems land in the result's fields,
    /// and a transport failure on either call yields a synthetic `Fail`
    /// result. A transport failure during check-in skips the status query.
    #[instrument(skip_all, fields(credential = %redact(credential, 20)))]
    pub async fn execute(
        &self,
        credential: &str,
        checkin_endpoint: &str,
        status_endpoint: &str,
        header_template: &HeaderMap,
        payload: &serde_json::Value,
    ) -> AccountResult {
        match self
            .try_execute(
                credential,
                checkin_endpoint,
                status_endpoint,
                header_template,
                payload,
            )
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!(kind = e.tag(), "Check-in aborted: {}", e);
                AccountResult::transport_failure(e)
            }
        }
    }

    async fn try_execute(
        &self,
        credential: &str,
        checkin_endpoint: &str,
        status_endpoint: &str,
        header_template: &HeaderMap,
        payload: &serde_json::Value,
    ) -> Result<AccountResult, AccountError> {
        let mut headers = header_template.clone();
        let cookie = HeaderValue::from_str(credential)
            .map_err(|e| AccountError::Unknown(format!("invalid cookie header: {}", e)))?;
        headers.insert(header::COOKIE, cookie);

        info!("Sending check-in request");
        let check_in = self.post_check_in(checkin_endpoint, &headers, payload).await?;

        info!("Querying account status");
        let mut status_headers = headers;
        status_headers.remove(header::CONTENT_TYPE);
        let status = self.query_status(status_endpoint, status_headers).await?;

        let (outcome, message_status) = classify(
            check_in.success,
            &check_in.check_result,
            check_in.points_change,
        );

        info!(outcome = %outcome, "{}", message_status);

        Ok(AccountResult {
            checkin_success: check_in.success,
            status_success: status.success,
            status: status.status,
            points: check_in.points,
            points_change: check_in.points_change,
            message_status,
            check_result: check_in.check_result,
            outcome,
        })
    }
}
