//! Logger setup for binaries.

use std::fmt;

use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::time::now_jst;

/// Timestamp format used in log lines (RFC 3339, millisecond precision)
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Formats log timestamps in JST
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", now_jst().format(TIME_FORMAT))
    }
}

/// Build the default filter directive for a binary.
///
/// The binary's own target and `tower_http` log at `default_level`,
/// everything else at `warn`.
pub fn default_directive(name: &str, default_level: &str) -> String {
    let target = name.replace('-', "_");
    format!("{target}={default_level},tower_http={default_level},warn")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when set.
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, default_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(JstTimer)
                .with_target(true)
                .with_ansi(true),
        )
        .try_init();

    if initialized.is_ok() {
        tracing::debug!("Logger initialized for '{}' (default level: {})", name, default_level);
    }
}
