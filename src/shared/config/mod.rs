//! Codec configuration module
//!
//! Provides the configuration consumed by [`ErrorCodec`](crate::shared::codec::ErrorCodec).
//!
//! # Configuration Sources
//!
//! - Defaults (`CodecConfig::default()`), used by the free functions
//! - A TOML document (`CodecConfig::from_toml_str`)
//! - Environment variables (`CodecConfig::from_env`):
//!   - `ERRKIND_EMIT_INTERNAL_CODE` - write `"code":0` for internal errors
//!   - `ERRKIND_LOG_UNCLASSIFIED` - log errors that fall back to internal
//!   - `ERRKIND_MAX_DETAILS` - cap on details written per error

use serde::Deserialize;
use thiserror::Error;

pub const ENV_EMIT_INTERNAL_CODE: &str = "ERRKIND_EMIT_INTERNAL_CODE";
pub const ENV_LOG_UNCLASSIFIED: &str = "ERRKIND_LOG_UNCLASSIFIED";
pub const ENV_MAX_DETAILS: &str = "ERRKIND_MAX_DETAILS";

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Write `"code": 0` instead of omitting the code for internal errors
    pub emit_internal_code: bool,
    /// Emit a debug event when an opaque error defaults to internal
    pub log_unclassified: bool,
    /// Maximum number of details written per error
    pub max_details: Option<usize>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            emit_internal_code: false,
            log_unclassified: true,
            max_details: None,
        }
    }
}

impl CodecConfig {
    /// Create a new CodecConfigBuilder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_details == Some(0) {
            return Err(ConfigError::invalid(ENV_MAX_DETAILS, "0"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    ///
    /// ```rust
    /// use errkind::shared::CodecConfig;
    ///
    /// let config = CodecConfig::from_toml_str("emit_internal_code = true").unwrap();
    /// assert!(config.emit_internal_code);
    /// assert!(config.log_unclassified);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `ERRKIND_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_EMIT_INTERNAL_CODE) {
            builder = builder.emit_internal_code(parse_flag(ENV_EMIT_INTERNAL_CODE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_LOG_UNCLASSIFIED) {
            builder = builder.log_unclassified(parse_flag(ENV_LOG_UNCLASSIFIED, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_DETAILS) {
            let max = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::invalid(ENV_MAX_DETAILS, &raw))?;
            builder = builder.max_details(max);
        }

        builder.build()
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(key, raw)),
    }
}

/// Builder for CodecConfig
#[derive(Debug, Default)]
pub struct CodecConfigBuilder {
    emit_internal_code: Option<bool>,
    log_unclassified: Option<bool>,
    max_details: Option<usize>,
}

impl CodecConfigBuilder {
    /// Write the zero code for internal errors
    pub fn emit_internal_code(mut self, emit: bool) -> Self {
        self.emit_internal_code = Some(emit);
        self
    }

    /// Log errors that could not be classified
    pub fn log_unclassified(mut self, log: bool) -> Self {
        self.log_unclassified = Some(log);
        self
    }

    /// Cap the number of details written per error
    pub fn max_details(mut self, max: usize) -> Self {
        self.max_details = Some(max);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CodecConfig, ConfigError> {
        let defaults = CodecConfig::default();
        let config = CodecConfig {
            emit_internal_code: self.emit_internal_code.unwrap_or(defaults.emit_internal_code),
            log_unclassified: self.log_unclassified.unwrap_or(defaults.log_unclassified),
            max_details: self.max_details.or(defaults.max_details),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}
