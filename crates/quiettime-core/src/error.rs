//! Core error types for quiettime-core.
//!
//! Selector arithmetic is total and never fails. Errors come from the
//! collaborators around it: the preferences file, the platform facades, and
//! the confirmation policy on the restore screen.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for quiettime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A platform service (timer, audio, preference store) failed
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Confirmation attempted while the chosen volume is muted
    #[error("Cannot restore the ringer at volume {volume}; choose an audible volume first")]
    ConfirmDisabled { volume: u32 },

    /// Action attempted after the screen has closed
    #[error("The restore screen is already closed")]
    ScreenClosed,

    /// Epoch milliseconds outside the representable calendar range
    #[error("Invalid instant: {0} ms since epoch is out of range")]
    InvalidInstant(i64),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Failures reported by the injected platform collaborators.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The timer service could not schedule or cancel a restoration
    #[error("Timer service failed: {0}")]
    Timer(String),

    /// The audio service rejected a ringer or volume change
    #[error("Audio service failed: {0}")]
    Audio(String),

    /// The preference store could not read or write the volume
    #[error("Preference store failed: {0}")]
    Store(String),

    /// The target instant cannot be represented in the platform's time zone
    #[error("Instant {0} does not exist in the local time zone")]
    UnrepresentableInstant(chrono::NaiveDateTime),
}

impl From<ConfigError> for PlatformError {
    fn from(err: ConfigError) -> Self {
        PlatformError::Store(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_disabled_message_names_volume() {
        let err = CoreError::ConfirmDisabled { volume: 0 };
        assert!(err.to_string().contains("volume 0"));
    }

    #[test]
    fn platform_error_converts_into_core_error() {
        let err: CoreError = PlatformError::Audio("stream busy".into()).into();
        assert!(matches!(err, CoreError::Platform(PlatformError::Audio(_))));
        assert_eq!(
            err.to_string(),
            "Platform error: Audio service failed: stream busy"
        );
    }

    #[test]
    fn config_error_becomes_store_failure() {
        let err: PlatformError = ConfigError::UnknownKey("audio.nope".into()).into();
        assert!(matches!(err, PlatformError::Store(ref m) if m.contains("audio.nope")));
    }
}
