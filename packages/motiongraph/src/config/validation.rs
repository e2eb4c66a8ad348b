//! Configuration validation
//!
//! Code that accepts a configuration depends on `Validatable`, not on a
//! concrete config type.

use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate any Validatable config
    pub fn validate_config<V: Validatable>(config: &V) -> ConfigResult<()> {
        config.validate()
    }
}
