use std::time::Duration;

use glados_domain::AccountResult;
use glados_infrastructure::http::CheckinExecutor;
use tokio::time::sleep;
use tracing::{info, info_span, Instrument};

use crate::application::config::RunConfig;

/// Check in each account in order, pausing between accounts but not after the last
pub(super) async fn execute_accounts(
    executor: &CheckinExecutor,
    config: &RunConfig,
    pause: Duration,
) -> Vec<AccountResult> {
    let total = config.cookies.len();
    let mut results = Vec::with_capacity(total);

    for (index, cookie) in config.cookies.iter().enumerate() {
        let span = info_span!("account", index = index + 1, total);

        let result = async {
            info!("Processing account {}/{}", index + 1, total);

            let result = executor
                .execute(
                    cookie,
                    &config.checkin_url,
                    &config.status_url,
                    &config.request.headers,
                    &config.request.payload,
                )
                .await;

            info!(
                outcome = %result.outcome,
                email = result.email(),
                "{}",
                result.check_result
            );
            result
        }
        .instrument(span)
        .await;

        results.push(result);

        if index + 1 < total && !pause.is_zero() {
            sleep(pause).await;
        }
    }

    results
}
