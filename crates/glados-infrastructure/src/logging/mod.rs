//! Logging setup
//!
//! Every run writes a timestamped, human-readable stream to stdout.
//! When a log directory is configured, the same events also go to a
//! daily-rolling file as one-line JSON.
//!
//! `log` records emitted by dependencies (reqwest, hyper) are forwarded
//! into `tracing`, so they share filters and outputs.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "glados-checkin.log";
const DEFAULT_FILTER: &str = "info,hyper=warn,reqwest=warn,rustls=warn";

/// Initialise the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Info)
        .init();

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_filter(build_filter());

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true)
                    .with_timer(fmt::time::ChronoLocal::new(
                        "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
                    ))
                    .with_filter(build_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        log_dir = %log_dir.map(|d| d.display().to_string()).unwrap_or_else(|| "-".to_string()),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

/// `RUST_LOG` wins; otherwise info with quiet HTTP internals
fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Path of today's log file inside `log_dir`
pub fn current_log_file(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    log_dir.join(format!("{}.{}", LOG_FILE_PREFIX, date))
}

/// Keep the first `keep` characters of a secret and elide the rest
pub fn redact(secret: &str, keep: usize) -> String {
    match secret.char_indices().nth(keep) {
        Some((idx, _)) => format!("{}...", &secret[..idx]),
        None => secret.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_long_secret() {
        assert_eq!(redact("SCT1234567890abcdef", 10), "SCT1234567...");
    }

    #[test]
    fn test_redact_short_secret_untouched() {
        assert_eq!(redact("short", 10), "short");
        assert_eq!(redact("exactly10!", 10), "exactly10!");
        assert_eq!(redact("", 10), "");
    }

    #[test]
    fn test_current_log_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = current_log_file(dir.path());
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        assert!(name.starts_with("glados-checkin.log."));
        assert_eq!(path.parent().unwrap(), dir.path());
    }
}
