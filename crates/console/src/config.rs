//! Configuration management for the console screens

use crate::Result;
use canvass_core::validation::{ValidateConfig, validators};
use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Deployment-level settings the account and survey pages depend on
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Public base URL surveys are served from
    pub public_domain: String,

    /// Page size of the survey list
    pub surveys_per_page: u32,

    /// Locale used when the user has not picked one
    pub default_locale: String,

    /// Running as the hosted cloud offering rather than self-hosted
    pub is_cloud: bool,

    pub password_reset_disabled: bool,

    pub email_verification_disabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            public_domain: "http://localhost:3000".to_string(),
            surveys_per_page: 12,
            default_locale: "en-US".to_string(),
            is_cloud: false,
            password_reset_disabled: false,
            email_verification_disabled: false,
        }
    }
}

impl ValidateConfig for ConsoleConfig {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        validators::validate_url(&self.public_domain, "public_domain")?;
        validators::validate_range(self.surveys_per_page, 1, 100, "surveys_per_page")?;
        validators::validate_not_empty(&self.default_locale, "default_locale")?;
        Ok(())
    }
}

impl ConsoleConfig {
    /// Load configuration from file, overridden by `CANVASS_*` environment
    /// variables
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration fails validation
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration with defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        Self::finish(settings)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix("CANVASS")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(settings: config::Config) -> Result<Self> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
