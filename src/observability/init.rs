//! Tracing initialization and subscriber setup.
//!
//! Log output goes to a rotating file in the data directory, never to the
//! terminal: stdout belongs to the UI. Level filtering follows the standard
//! `EnvFilter` syntax, resolved from configuration.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::{FileWriter, RotatingWriter};
use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with rotating-file output.
///
/// The level comes from `config.log_level`, defaulting to `info`. The data
/// directory is created if missing; when that fails, initialization silently
/// returns and the application runs without logs. Safe to call more than
/// once: only the first call takes effect.
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = Arc::new(FileWriter::new(paths::log_file()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || RotatingWriter(Arc::clone(&writer)));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
