//! Configuration for tracing and instrumentation

use serde::{Deserialize, Serialize};

/// Main instrumentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to emitted events
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter (e.g., "info", "debug", "canvass_console=trace")
    pub log_level: String,
    /// Emit newline-delimited JSON instead of human readable lines
    #[serde(default)]
    pub json: bool,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "canvass".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl InstrumentationConfig {
    /// Create configuration from environment variables
    ///
    /// Supports the following environment variables:
    /// - `SERVICE_NAME`: Service name
    /// - `SERVICE_VERSION`: Service version
    /// - `LOG_FORMAT`: `json` switches to JSON output
    ///
    /// `RUST_LOG` is not copied here; [`init_tracing`](super::init_tracing)
    /// applies it over `log_level`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: std::env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            log_level: defaults.log_level,
            json: std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }

    /// Create a development configuration with sensible defaults
    pub fn dev() -> Self {
        Self {
            service_name: "canvass-dev".to_string(),
            service_version: "dev".to_string(),
            log_level: "debug".to_string(),
            json: false,
        }
    }
}
