//! Error types for svcalert
//!
//! Uses thiserror for ergonomic error definitions. Alert construction and
//! accessors are total; only severity conversions can fail.

use thiserror::Error;

/// Errors from alert level conversions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlertError {
    /// Ordinal does not map to a severity tier
    #[error("Unknown alert level ordinal: {0} (valid: 0-2)")]
    UnknownLevel(u8),

    /// Name does not map to a severity tier
    #[error("Unknown alert level name: '{0}' (valid: info, warning, critical)")]
    UnknownLevelName(String),
}

/// Result type alias using AlertError
pub type Result<T> = std::result::Result<T, AlertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_display() {
        let err = AlertError::UnknownLevel(7);
        assert_eq!(err.to_string(), "Unknown alert level ordinal: 7 (valid: 0-2)");
    }

    #[test]
    fn test_unknown_level_name_display() {
        let err = AlertError::UnknownLevelName("fatal".to_string());
        assert!(err.to_string().contains("'fatal'"));
        assert!(err.to_string().contains("info, warning, critical"));
    }
}
