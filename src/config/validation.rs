//! Configuration validation module
//!
//! Validation functions for application configuration to ensure all
//! required settings are properly configured before anything starts.

use crate::utils::errors::{Result, SocialPizzaError};
use crate::utils::validation::validate_email;

use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;

    if let Some(ref credentials) = settings.credentials {
        validate_email(&credentials.email)
            .map_err(|_| SocialPizzaError::Config("Credentials email is not valid".to_string()))?;
        if credentials.password.is_empty() {
            return Err(SocialPizzaError::Config(
                "Credentials password must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(SocialPizzaError::Config(
            "API base URL is required".to_string(),
        ));
    }

    if url::Url::parse(&config.base_url).is_err() {
        return Err(SocialPizzaError::Config(format!(
            "API base URL is not a valid URL: {}",
            config.base_url
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(SocialPizzaError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SocialPizzaError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SocialPizzaError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
