//! Initialization functions for tracing

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::tracing::config::InstrumentationConfig;

/// Initialize tracing with the given configuration
///
/// `RUST_LOG` wins over the configured level; an unparsable filter falls back
/// to `info`. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &InstrumentationConfig) -> Result<()> {
    let env_filter = build_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), config);

    let json_layer = config
        .json
        .then(|| tracing_subscriber::fmt::layer().json().with_target(true));
    let text_layer = (!config.json).then(|| tracing_subscriber::fmt::layer().with_target(true));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    ::tracing::debug!(
        service = %config.service_name,
        version = %config.service_version,
        "tracing initialized"
    );
    Ok(())
}

fn build_filter(directives: Option<String>, config: &InstrumentationConfig) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(&config.log_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize with default configuration from environment
pub fn init_default() -> Result<()> {
    init_tracing(&InstrumentationConfig::from_env())
}

/// Initialize with development configuration
pub fn init_dev() -> Result<()> {
    init_tracing(&InstrumentationConfig::dev())
}
