//! File-only tracing setup. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber writing to `<log dir>/<session>/client.log`.
///
/// The returned guard flushes the writer on drop; keep it alive for the
/// whole process.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("Failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs, falling back to the temp dir.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "dungeon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("dungeon"))
        .join("logs")
}
