//! Codec configuration (TOML)
//!
//! Every field has a default, so an empty document yields the default
//! codec: silent clamping on write and full-precision quaternion reads.
//!
//! ```toml
//! write_policy = "strict"    # or "clamp"
//! quat_precision = "legacy"  # or "full"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// What a write does when the value does not fit in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Write the bytes that fit, drop the rest, report nothing
    #[default]
    Clamp,
    /// Leave the buffer untouched and return `CodecError::OutOfBounds`
    Strict,
}

/// Precision of decoded quaternion components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuatPrecision {
    /// Components decode at full f64 precision
    #[default]
    Full,
    /// Each component is narrowed through f32 after decoding, matching
    /// buffers produced by hosts that read quaternions that way
    Legacy,
}

impl QuatPrecision {
    /// Apply this precision to one decoded component
    #[inline]
    pub fn apply(self, component: f64) -> f64 {
        match self {
            QuatPrecision::Full => component,
            QuatPrecision::Legacy => component as f32 as f64,
        }
    }
}

/// Codec configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodecConfig {
    /// Behavior of writes that run past the buffer end (default: Clamp)
    #[serde(default)]
    pub write_policy: WritePolicy,
    /// Quaternion read precision (default: Full)
    #[serde(default)]
    pub quat_precision: QuatPrecision,
}

impl CodecConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            write_policy = ?config.write_policy,
            quat_precision = ?config.quat_precision,
            "Loaded codec config"
        );
        Ok(config)
    }
}
