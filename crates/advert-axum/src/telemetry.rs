//! Tracing setup for the server binary.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name inside the configured log directory.
pub const LOG_FILE_NAME: &str = "adverts.log";

/// Initialize tracing with stdout and file output.
///
/// Logs go to:
/// - stdout (compact, with colors)
/// - `{log_dir}/adverts.log` (no ANSI colors)
///
/// The level comes from `RUST_LOG` and defaults to `info`. The returned
/// guard flushes the file writer when dropped, so hold it for the life of
/// the process.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .compact(),
        )
        .try_init()?;

    Ok(guard)
}
