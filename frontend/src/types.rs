//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Preference Types** - Persisted dark-mode flag
//! - **Upload Types** - Widget state and per-attempt outcomes
//! - **Log Types** - Diagnostic entries
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{PREFERENCE_DISABLED, PREFERENCE_ENABLED};

// =============================================================================
// Preference Types
// =============================================================================

/// Persisted dark-mode preference.
///
/// Stored as `"enabled"` / `"disabled"`. Anything else reads as disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Dark mode active
    Enabled,
    /// Light mode active
    #[default]
    Disabled,
}

impl Preference {
    /// Parse a stored value. Absent or unrecognised values are `Disabled`.
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            Some(PREFERENCE_ENABLED) => Preference::Enabled,
            _ => Preference::Disabled,
        }
    }

    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Enabled => PREFERENCE_ENABLED,
            Preference::Disabled => PREFERENCE_DISABLED,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Preference::Enabled)
    }

    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Preference::Enabled
        } else {
            Preference::Disabled
        }
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Result of a single upload attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadOutcome {
    /// Server answered; the body is shown verbatim.
    Delivered(String),
    /// The attempt failed; the error decides the message shown.
    Failed(AppError),
}

/// Phase of the upload widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum UploadPhase {
    /// No upload issued yet.
    #[default]
    Idle,
    /// A file is staged and its upload is in flight.
    Selected,
    /// The last completed attempt and how it ended.
    Result(UploadOutcome),
}

/// Observable state of the upload widget.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    /// Current phase
    pub phase: UploadPhase,
    /// Name shown in the label (`None` shows the placeholder)
    pub file_name: Option<String>,
    /// Uploads whose completion has not been observed yet
    pub in_flight: usize,
}

/// Raw response of the upload endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body as text
    pub body: String,
}

impl UploadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Warning message
    Warning,
    /// Error message
    Error,
}

/// A single diagnostic entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Build an entry stamped with the local wall-clock time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// A required element id is absent from the host page.
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// The request could not be completed or its body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Upload rejected ({status}): {body}")]
    Application { status: u16, body: String },

    /// Persistent storage unavailable or write refused.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Embedded configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parse() {
        assert_eq!(Preference::parse(Some("enabled")), Preference::Enabled);
        assert_eq!(Preference::parse(Some("disabled")), Preference::Disabled);
        assert_eq!(Preference::parse(None), Preference::Disabled);
        assert_eq!(Preference::parse(Some("ENABLED")), Preference::Disabled);
        assert_eq!(Preference::parse(Some("true")), Preference::Disabled);
        assert_eq!(Preference::parse(Some("")), Preference::Disabled);
    }

    #[test]
    fn test_preference_serde_matches_storage_values() {
        let json = serde_json::to_string(&Preference::Enabled).unwrap();
        assert_eq!(json, "\"enabled\"");
        let back: Preference = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(back, Preference::Disabled);
    }

    #[test]
    fn test_response_success_range() {
        let ok = UploadResponse { status: 204, body: String::new() };
        let redirect = UploadResponse { status: 302, body: String::new() };
        let error = UploadResponse { status: 500, body: "boom".into() };
        assert!(ok.is_success());
        assert!(!redirect.is_success());
        assert!(!error.is_success());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Application { status: 413, body: "too large".into() };
        assert_eq!(err.to_string(), "Upload rejected (413): too large");
        assert_eq!(
            AppError::MissingElement("drop-area".into()).to_string(),
            "Missing element: #drop-area"
        );
    }
}
