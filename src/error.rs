//! Custom error types for TaskVault
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for TaskVault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// Validation errors for user-supplied fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Bad credentials; deliberately does not say which factor failed
    #[error("invalid email or password")]
    AuthFailed,

    /// An operation required an active session
    #[error("not logged in")]
    NotAuthenticated,

    /// Password hashing could not complete
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// A stored credential hash is not structurally valid
    #[error("Corrupt credential hash: {0}")]
    CorruptCredential(String),

    /// Storage errors (file open/read/write)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A structured record could not be decoded
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// A line record parsed but is missing required fields
    #[error("Incomplete record: {0}")]
    IncompleteRecord(String),

    /// A line record field is present but unparseable
    #[error("Malformed field '{field}': {value}")]
    MalformedField {
        field: &'static str,
        value: String,
    },

    /// The entity has no representation in the requested encoding
    #[error("{entity_type} records have no line-format representation")]
    UnsupportedFormat { entity_type: &'static str },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl VaultError {
    /// Create a "not found" error for users
    pub fn user_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for user emails
    pub fn duplicate_email(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "User",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for TaskVault operations
pub type VaultResult<T> = Result<T, VaultError>;
