//! Settings error types.

use thiserror::Error;

/// Errors that can occur when reading or writing machine settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
