//! Error types for tankfinder.

use thiserror::Error;

/// The error type for catalog and search operations.
#[derive(Error, Debug)]
pub enum TankError {
    /// Missing or malformed caller input. Surfaced to clients as a bad request.
    #[error("{0}")]
    Validation(String),

    /// A bulk-load row could not be turned into records.
    #[error("Import error: {0}")]
    Import(String),

    /// The record store could not serve a read or write.
    #[error("Store error: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TankError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TankError::Validation(msg.into())
    }

    pub fn import(msg: impl Into<String>) -> Self {
        TankError::Import(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        TankError::Store(msg.into())
    }

    /// Whether this error was caused by the caller's input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, TankError::Validation(_))
    }
}

/// Result type alias for tankfinder operations.
pub type Result<T> = std::result::Result<T, TankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_bare() {
        let err = TankError::validation("Please select a tank type first");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please select a tank type first");
    }

    #[test]
    fn test_other_errors_are_not_validation() {
        assert!(!TankError::store("poisoned").is_validation());
        assert!(!TankError::import("line 3: missing capacity").is_validation());
    }
}
