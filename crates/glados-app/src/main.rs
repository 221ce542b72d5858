use std::sync::Arc;

use anyhow::{Context, Result};
use glados_app::application::config::RunConfig;
use glados_app::application::services::CheckInRunner;
use glados_domain::notification::NotificationSender;
use glados_infrastructure::config::TimeoutConfig;
use glados_infrastructure::http::CheckinExecutor;
use glados_infrastructure::logging::{self, redact};
use glados_infrastructure::notification::{DispatchConfig, NotificationDispatcher, PushPlusChannel};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = RunConfig::from_env();
    logging::init_logger(config.log_dir.as_deref()).context("Failed to initialize logger")?;
    config.validate()?;

    if let Some(dir) = &config.log_dir {
        info!(file = %logging::current_log_file(dir).display(), "Writing JSON log");
    }

    let timeouts = TimeoutConfig::default();
    let executor = CheckinExecutor::with_timeouts(timeouts.clone())?;
    let dispatcher = NotificationDispatcher::with_config(DispatchConfig {
        timeouts: timeouts.clone(),
        ..DispatchConfig::default()
    })?;
    let sender: Arc<dyn NotificationSender> =
        Arc::new(PushPlusChannel::new(config.send_key.clone(), Arc::new(dispatcher)));

    let runner = CheckInRunner::new(executor, sender, timeouts.account_pause);
    info!(run_id = %runner.run_id(), "Starting GLaDOS check-in");
    let report = runner.check_in_all(&config).await;

    if let Some(content) = report.content_to_print() {
        println!("Send Content:\n{}", content);
    }
    println!("sckey: {}", redact(&config.send_key, 10));
    let masked: Vec<String> = config.cookies.iter().map(|c| redact(c, 20)).collect();
    println!("cookies: {:?}", masked);

    if config.notification_enabled() {
        match runner.notify(&config, &report.message).await {
            Some(body) => println!("{}", body),
            None => println!("Notification failed, check-in results are unaffected"),
        }
    } else {
        println!("Not push");
    }

    info!(
        run_id = %report.run_id,
        success = report.summary.success,
        fail = report.summary.fail,
        repeat = report.summary.repeat,
        "Script finished"
    );

    Ok(())
}
