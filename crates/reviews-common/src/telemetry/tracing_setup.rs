//! Tracing subscriber setup.
//!
//! The `RUST_LOG` environment variable overrides the configured level
//! when set.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Options for the tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub level: Level,
    pub json_format: bool,
    pub span_events: bool,
    pub file_and_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            span_events: false,
            file_and_line: true,
        }
    }
}

impl TracingConfig {
    /// Verbose human-readable output for local work.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            json_format: false,
            span_events: true,
            file_and_line: true,
        }
    }

    /// JSON output for log aggregation.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json_format: true,
            span_events: false,
            file_and_line: false,
        }
    }
}

/// Errors from subscriber installation.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the default subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Use
/// [`try_init_tracing`] when that may happen.
pub fn init_tracing() {
    init_tracing_with_config(TracingConfig::default());
}

/// Install a subscriber with explicit options.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_tracing_with_config(config: TracingConfig) {
    try_init_tracing_with_config(config).expect("tracing subscriber already installed");
}

/// Install the default subscriber, reporting failure instead of
/// panicking.
///
/// # Errors
///
/// Returns `TracingError::AlreadyInitialized` when a global subscriber
/// is already installed.
pub fn try_init_tracing() -> Result<(), TracingError> {
    try_init_tracing_with_config(TracingConfig::default())
}

/// Install a subscriber with explicit options, reporting failure instead
/// of panicking.
///
/// # Errors
///
/// Returns `TracingError::AlreadyInitialized` when a global subscriber
/// is already installed.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    if config.json_format {
        let fmt_layer = fmt::layer()
            .json()
            .with_file(config.file_and_line)
            .with_line_number(config.file_and_line)
            .with_span_events(span_events);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    } else {
        let fmt_layer = fmt::layer()
            .with_file(config.file_and_line)
            .with_line_number(config.file_and_line)
            .with_span_events(span_events);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|_| TracingError::AlreadyInitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_presets() {
        let dev = TracingConfig::development();
        assert_eq!(dev.level, Level::DEBUG);
        assert!(!dev.json_format);
        assert!(dev.span_events);

        let prod = TracingConfig::production();
        assert_eq!(prod.level, Level::INFO);
        assert!(prod.json_format);
        assert!(!prod.span_events);

        assert_eq!(TracingConfig::default().level, Level::INFO);
    }

    #[test]
    fn test_second_init_reports_already_initialized() {
        // After the first call a global subscriber exists no matter who
        // installed it, so the second call must error rather than panic.
        let _ = try_init_tracing();
        assert!(try_init_tracing().is_err());
    }
}
