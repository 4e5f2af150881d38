//! Stream configuration.

use serde::Deserialize;

use crate::error::GenError;

/// Settings for a generation stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Seed for the entropy source.
    pub seed: u64,
    /// Size at the top of generation.
    pub max_size: u64,
    /// Size the stream starts at; clamped to `max_size`.
    pub initial_size: u64,
    /// Retry count at which generation is considered stuck.
    pub max_retries: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_size: 100,
            initial_size: 100,
            max_retries: 100,
        }
    }
}

impl GenConfig {
    /// Reads configuration from `CN_GEN_*` environment variables, falling
    /// back to defaults for unset ones.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Config` if a variable does not parse or the
    /// resulting configuration is invalid.
    pub fn from_env() -> Result<Self, GenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Config` if a variable does not parse or the
    /// resulting configuration is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GenError> {
        let defaults = Self::default();
        let read = |key: &str, default: u64| -> Result<u64, GenError> {
            match lookup(key) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|e| GenError::Config(format!("{key} must be a valid u64: {e}"))),
                None => Ok(default),
            }
        };

        let max_size = read("CN_GEN_MAX_SIZE", defaults.max_size)?;
        let config = Self {
            seed: read("CN_GEN_SEED", defaults.seed)?,
            max_size,
            initial_size: read("CN_GEN_INITIAL_SIZE", max_size)?,
            max_retries: read("CN_GEN_MAX_RETRIES", defaults.max_retries)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `GenError::Config` if `max_size` or `max_retries` is zero.
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_size == 0 {
            return Err(GenError::Config("max_size must be greater than 0".to_owned()));
        }
        if self.max_retries == 0 {
            return Err(GenError::Config(
                "max_retries must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }
}
