//! Tracing setup for nextmeetup
//!
//! Logs always go to stderr; stdout is reserved for the report.
//!
//! # Usage
//!
//! ```ignore
//! use nextmeetup_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli()).expect("failed to initialize tracing");
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crate targets that follow the configured level; everything else stays at `warn`.
const OWN_TARGETS: &[&str] = &[
    "nextmeetup",
    "nextmeetup_core",
    "nextmeetup_providers",
    "nextmeetup_client",
];

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Failed to parse env filter directive
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// The level for our own crates when RUST_LOG is not set
    pub default_level: Level,
    /// Whether to include file/line information in logs
    pub include_location: bool,
    /// Whether to include target (module path) in logs
    pub include_target: bool,
}

impl TracingConfig {
    /// Quiet CLI logging: warnings and errors only.
    #[must_use]
    pub fn cli() -> Self {
        Self {
            default_level: Level::WARN,
            include_location: false,
            include_target: false,
        }
    }

    /// Create a config suitable for CLI usage with debug mode
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_location: true,
            include_target: true,
        }
    }

    /// Returns the filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        let mut directive = String::from("warn");
        for target in OWN_TARGETS {
            directive.push_str(&format!(",{}={}", target, self.default_level));
        }
        directive
    }
}

/// Initialize tracing with the given configuration.
///
/// This should be called once at the start of the application.
/// The `RUST_LOG` environment variable overrides the default level.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set or if
/// the env filter directive is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.default_directive())?,
    };

    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_target(config.include_target);

    let subscriber = tracing_subscriber::registry().with(env_filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
