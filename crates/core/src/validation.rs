//! Configuration validation support

use config::ConfigError;

/// Trait for validating configuration values
pub trait ValidateConfig {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or an error describing what's wrong
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    /// Validate that a string is not empty or whitespace
    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    /// Validate URL format
    pub fn validate_url(url: &str, field: &str) -> Result<(), ConfigError> {
        url::Url::parse(url)
            .map_err(|e| ConfigError::Message(format!("{field}: invalid URL - {e}")))?;
        Ok(())
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_validators() {
        assert!(validate_not_empty("en-US", "locale").is_ok());
        assert!(validate_not_empty("   ", "locale").is_err());
        assert!(validate_url("https://app.example.com", "public_domain").is_ok());
        assert!(validate_url("not a url", "public_domain").is_err());
        assert!(validate_range(12, 1, 100, "surveys_per_page").is_ok());
        assert!(validate_range(101, 1, 100, "surveys_per_page").is_err());
    }
}
