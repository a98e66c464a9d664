//! Application error types.
//!
//! Only construction can fail. Every accessor on a built envelope resolves
//! missing data to a default instead of producing an error.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the response layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The payload is not a keyed structure (null, bool, number or string).
    #[error("construction error: expected a JSON object or array, found {found}")]
    Construction { found: &'static str },

    /// The payload bytes were not JSON at all.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn construction(found: &'static str) -> Self {
        Self::Construction { found }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for the one fatal envelope-level failure.
    pub fn is_construction(&self) -> bool {
        matches!(self, Error::Construction { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_message_names_found_kind() {
        let err = Error::construction("null");
        assert!(err.is_construction());
        assert_eq!(
            err.to_string(),
            "construction error: expected a JSON object or array, found null"
        );
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Serialization(_)));
        assert!(!err.is_construction());
    }
}
