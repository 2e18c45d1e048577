//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::resolve_data_path;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Output
///
/// With `config.log_file` set, events go to that file through a rotating
/// [`FileWriter`] (relative names land in the data directory, parent directories
/// are created). Otherwise they go to stderr.
/// If the log directory cannot be created, logging falls back to stderr.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call installs a subscriber, later calls are no-ops.
///
/// # Example
///
/// ```rust
/// use showroom::observability::init_tracing;
/// use showroom::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_path = config.log_file.as_deref().map(resolve_data_path).filter(|path| {
        path.parent()
            .map_or(true, |parent| std::fs::create_dir_all(parent).is_ok())
    });

    let registry = tracing_subscriber::registry().with(filter);

    let _ = match log_path {
        Some(path) => registry
            .with(fmt::layer().with_ansi(false).with_writer(FileWriter::new(path)))
            .try_init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
