//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "practicio.log";

/// Initializes the global tracing subscriber with a rotating log file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory and the log file if they don't exist
/// - Silently skips setup if either cannot be created
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```rust
/// use practicio::observability::init_tracing;
/// use practicio::Config;
///
/// let dir = std::env::temp_dir().join("practicio-doc");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: dir,
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(config.data_dir.join(LOG_FILE_NAME));
    if writer.write_bytes(&[]).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false));

    if subscriber.try_init().is_ok() {
        tracing::debug!(level, data_dir = ?config.data_dir, "tracing initialized");
    }
}
