use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use glados_domain::notification::{NotificationMessage, NotificationSender};
use glados_infrastructure::http::CheckinExecutor;
use tracing::{info, info_span, warn, Instrument, Span};
use uuid::Uuid;

use crate::application::config::RunConfig;

mod batch;
mod report;
mod types;

pub use report::{build_message, format_report, NO_COOKIES_CONTENT, NO_COOKIES_TITLE};
pub use types::{RunReport, RunSummary};

/// Runs the check-in batch and sends the summary.
///
/// Everything a runner does is logged inside one `run` span tagged with its run id.
pub struct CheckInRunner {
    executor: CheckinExecutor,
    sender: Arc<dyn NotificationSender>,
    account_pause: Duration,
    run_id: Uuid,
    span: Span,
}

impl CheckInRunner {
    pub fn new(
        executor: CheckinExecutor,
        sender: Arc<dyn NotificationSender>,
        account_pause: Duration,
    ) -> Self {
        let run_id = Uuid::new_v4();
        Self {
            executor,
            sender,
            account_pause,
            run_id,
            span: info_span!("run", run_id = %run_id),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Check in every account, then notify
    pub async fn run(&self, config: &RunConfig) -> RunReport {
        let mut report = self.check_in_all(config).await;
        report.delivery = self.notify(config, &report.message).await;
        report
    }

    /// Check in every account and build the notification, without sending it
    pub async fn check_in_all(&self, config: &RunConfig) -> RunReport {
        async {
            if config.cookies.is_empty() {
                warn!("No valid cookies found");
            } else {
                info!("Found {} cookie(s)", config.cookies.len());
            }

            let results =
                batch::execute_accounts(&self.executor, config, self.account_pause).await;
            let summary = RunSummary::from_results(&results);
            let message = build_message(&results, &summary, Local::now());

            info!(
                total = summary.total(),
                success = summary.success,
                fail = summary.fail,
                repeat = summary.repeat,
                "Check-in finished"
            );

            RunReport {
                run_id: self.run_id,
                results,
                summary,
                message,
                delivery: None,
            }
        }
        .instrument(self.span.clone())
        .await
    }

    /// Best-effort push; skipped when no token is configured
    pub async fn notify(&self, config: &RunConfig, message: &NotificationMessage) -> Option<String> {
        async {
            if !config.notification_enabled() {
                info!("SENDKEY not set, skipping push");
                return None;
            }

            info!("Sending notification");
            self.sender.send(message).await
        }
        .instrument(self.span.clone())
        .await
    }
}
