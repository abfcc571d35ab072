//! Logging configuration
//!
//! File-backed tracing so degraded dictionary lookups can be diagnosed
//! without disturbing the terminal UI. Without a log file, tracing stays
//! uninstalled and all spans/events are no-ops.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// Keep the guard alive for the lifetime of the program
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize logging to the given file, if one was requested
///
/// Filter: INFO by default, DEBUG for this crate; `RUST_LOG` overrides
/// both.
pub fn init(log_file: Option<PathBuf>) {
    let Some(path) = log_file else {
        return;
    };

    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
        .add_directive(
            "wordle_six=debug"
                .parse()
                .expect("static directive is well-formed"),
        );

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| "wordle_six.log".into(), ToOwned::to_owned);

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    let _ = LOG_GUARD.set(guard);
}
