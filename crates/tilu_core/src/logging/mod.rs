//! Logging infrastructure for TILU Media Player.
//!
//! Application-wide logging goes through `tracing`:
//! - stderr output, filtered by RUST_LOG or the configured level
//! - optional daily-rolling log file via `tracing-appender`
//!
//! # Example
//!
//! ```no_run
//! use tilu_core::logging::{init_tracing_with_file, LogLevel};
//!
//! // Keep the guard alive for the whole process or file output is lost.
//! let _guard = init_tracing_with_file(LogLevel::Info, "/tmp/tilu-logs");
//! tracing::info!("started");
//! ```

mod types;

pub use types::LogLevel;

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "tilu-player.log";

/// Renderer crates that are chatty at info level.
const QUIET_TARGETS: &[&str] = &["wgpu_core", "wgpu_hal", "naga", "cosmic_text", "iced_wgpu"];

/// Initialize global tracing subscriber writing to stderr.
///
/// RUST_LOG takes precedence over `default_level`.
pub fn init_tracing(default_level: LogLevel) {
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(build_filter(default_level))
        .try_init();

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}

/// Initialize tracing to stderr plus a daily log file in `logs_dir`.
///
/// Returns the appender guard; dropping it flushes and stops file output.
/// If the directory cannot be created, only stderr logging is installed.
pub fn init_tracing_with_file(
    default_level: LogLevel,
    logs_dir: impl AsRef<Path>,
) -> Option<WorkerGuard> {
    let logs_dir = logs_dir.as_ref();

    let (file_layer, guard) = match fs::create_dir_all(logs_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!(
                "Warning: cannot create log directory {}: {}",
                logs_dir.display(),
                e
            );
            (None, None)
        }
    };

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(file_layer)
        .with(build_filter(default_level))
        .try_init();

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }

    guard
}

/// Build the filter: RUST_LOG if set, else the level plus quiet renderer targets.
fn build_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)))
}

fn default_directives(level: LogLevel) -> String {
    let mut directives = level.as_filter_str().to_string();
    for target in QUIET_TARGETS {
        directives.push_str(&format!(",{}=warn", target));
    }
    directives
}
