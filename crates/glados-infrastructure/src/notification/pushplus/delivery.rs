use reqwest::header;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use super::types::{parse_retry_after, DeliveryError, FailureKind, GatewayReply};
use crate::logging::redact;

/// Characters of a URL shown in log lines
const URL_PREVIEW: usize = 80;

impl super::NotificationDispatcher {
    /// Deliver `title` / `message` through the push gateway.
    ///
    /// Returns the gateway's response body on the first HTTP 200, or `None`
    /// when `token` is empty or every route failed. Never returns an error.
    #[instrument(skip_all, fields(title = %title))]
    pub async fn send(&self, token: &str, title: &str, message: &str) -> Option<String> {
        if token.is_empty() {
            warn!("SENDKEY is not set, skipping notification");
            return None;
        }

        match Self::build_send_url(&self.config.primary_url, token, title, message) {
            Ok(url) => {
                info!("Sending notification: {}", redact(url.as_str(), URL_PREVIEW));
                if let Some(body) = self.send_primary(&url).await {
                    return Some(body);
                }
            }
            Err(e) => error!("Invalid primary notification URL: {}", e),
        }

        for backup in &self.config.backup_urls {
            let url = match Self::build_send_url(backup, token, title, message) {
                Ok(url) => url,
                Err(e) => {
                    error!(url = %backup, "Invalid backup notification URL: {}", e);
                    continue;
                }
            };

            info!("Trying backup URL: {}", redact(url.as_str(), URL_PREVIEW));
            match self.fetch(&url, self.config.timeouts.push_backup).await {
                Ok(reply) if reply.status == StatusCode::OK => {
                    info!("Notification sent through backup URL");
                    return Some(reply.body);
                }
                Ok(reply) => {
                    warn!(status = reply.status.as_u16(), "Backup URL response: {}", reply.body);
                }
                Err(e) => {
                    error!("Backup URL failed ({}): {}", FailureKind::of(&e), e);
                }
            }
        }

        error!("All notification routes failed, check-in results are unaffected");
        None
    }

    /// Outer attempts against the primary endpoint
    async fn send_primary(&self, url: &Url) -> Option<String> {
        let attempts = self.config.retry.attempts;

        for attempt in 0..attempts {
            info!("Sending notification (attempt {}/{})", attempt + 1, attempts);

            match self
                .fetch_with_status_retry(url, self.config.timeouts.push_primary)
                .await
            {
                Ok(reply) if reply.status == StatusCode::OK => {
                    info!("Notification sent");
                    return Some(reply.body);
                }
                Ok(reply) => {
                    warn!(
                        status = reply.status.as_u16(),
                        "Notification gateway returned non-success status: {}", reply.body
                    );
                }
                Err(e) => {
                    error!(
                        "Notification attempt {} failed ({}): {}",
                        attempt + 1,
                        e.kind(),
                        e
                    );
                    if attempt + 1 < attempts {
                        sleep(self.config.retry.attempt_delay(attempt)).await;
                    }
                }
            }
        }

        None
    }

    /// GET that transparently re-issues the request on retryable statuses.
    ///
    /// A `Retry-After` header on 413/429/503 overrides the backoff. Once the
    /// status retry budget is spent the call fails with `RetryExhausted`.
    async fn fetch_with_status_retry(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> Result<GatewayReply, DeliveryError> {
        let retry = &self.config.retry;
        let mut retries = 0;

        loop {
            let reply = self.fetch(url, timeout).await?;

            if !retry.is_retryable_status(reply.status) {
                return Ok(reply);
            }
            if retries >= retry.status_retries {
                return Err(DeliveryError::RetryExhausted {
                    status: reply.status,
                    retries,
                });
            }

            retries += 1;
            let delay = reply
                .retry_after
                .filter(|_| retry.honours_retry_after(reply.status))
                .unwrap_or_else(|| retry.status_delay(retries));
            debug!(
                status = reply.status.as_u16(),
                "Retrying notification request ({}/{}) in {:?}",
                retries,
                retry.status_retries,
                delay
            );
            sleep(delay).await;
        }
    }

    /// Single GET returning status, `Retry-After` and body
    async fn fetch(&self, url: &Url, timeout: Duration) -> reqwest::Result<GatewayReply> {
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_retry_after);
        let body = response.text().await?;

        Ok(GatewayReply {
            status,
            retry_after,
            body,
        })
    }
}
