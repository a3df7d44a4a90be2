//! Centralized logging initialization with environment variable support

use crate::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber with environment variable support
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: Standard Rust log filter. When set it replaces the
///   configured level entirely
/// - `LOG_FORMAT`: Override format (json, pretty)
///
/// Logs always go to stderr so generated output on stdout stays clean.
///
/// # Examples
///
/// ```bash
/// # See every generated artifact
/// RUST_LOG=cubegen_core=debug cubegen generate --manifest modules.toml --out build
///
/// # Machine-readable logs in CI
/// LOG_FORMAT=json cubegen generate --manifest modules.toml --out build
/// ```
pub fn initialize(config: &LoggingConfig) {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref(), &config.level);

    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
        .unwrap_or_else(|| config.format.clone());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// `RUST_LOG` when set and parseable, otherwise the configured level
fn env_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            let level = level.parse().unwrap_or(tracing::Level::INFO);
            EnvFilter::default().add_directive(level.into())
        })
}

fn parse_format(value: &str) -> Option<LogFormat> {
    match value.to_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" | "human" => Some(LogFormat::Pretty),
        _ => None,
    }
}
