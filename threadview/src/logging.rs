//! File logging for threadview.
//!
//! The terminal belongs to the TUI, so tracing output goes to
//! `<log_dir>/threadview.log` through a non-blocking `tracing-appender`
//! writer. The filter comes from `RUST_LOG` when set.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "threadview.log";
const DEFAULT_FILTER: &str = "info,threadview=debug,threadview_core=debug";

/// Installs the global subscriber writing into `log_dir`.
///
/// The returned guard flushes buffered lines on drop and must be held until
/// the process exits.
///
/// # Errors
///
/// Returns `Err` if `log_dir` cannot be created.
pub fn init(log_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
