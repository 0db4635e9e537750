use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing.
///
/// Logs go to:
/// - stderr (with colours), keeping stdout for command output
/// - `<log_dir>/backend.log` (no colours)
///
/// `RUST_LOG` overrides `default_level`.
pub fn initialize(log_dir: &Path, default_level: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e))?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e))?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| filter_directive(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot install tracing subscriber: {}", e))?;

    tracing::info!("Logging to {}", log_file_path.display());
    Ok(())
}

/// Application level plus quieter HTTP client internals
fn filter_directive(level: &str) -> String {
    format!("{},hyper=warn,reqwest=warn", level)
}
