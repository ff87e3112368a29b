//! Deserialization configuration
//!
//! Small, copyable settings shared by every bounded iterator a driver creates.
//! Serializable so hosts can embed it in their own configuration files.

use serde::{Deserialize, Serialize};

/// Settings for the event-driven deserialization driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeserializeConfig {
    /// Fail with `Error::Truncated` when input ends before an object closes.
    ///
    /// When disabled the driver logs a warning and returns whatever the
    /// reconstruction hook produced.
    pub reject_truncated: bool,

    /// Track expected token classes and reject structurally malformed streams.
    ///
    /// Requires a format backend that overrides `FormatDescriptor::classify`.
    pub validate_structure: bool,
}

impl DeserializeConfig {
    /// Strict defaults: truncation rejected, no structural validation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reject_truncated: true,
            validate_structure: false,
        }
    }

    #[must_use]
    pub const fn reject_truncated(mut self, reject: bool) -> Self {
        self.reject_truncated = reject;
        self
    }

    #[must_use]
    pub const fn validate_structure(mut self, validate: bool) -> Self {
        self.validate_structure = validate;
        self
    }
}

impl Default for DeserializeConfig {
    fn default() -> Self {
        Self::new()
    }
}
