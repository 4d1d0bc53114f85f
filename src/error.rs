//! Error handling for the persistence layer.
//!
//! This module defines the types produced when reading or writing shell
//! state through a storage backend:
//!
//! - [`StoreError`] — a detailed error variant (decode failure, encode
//!   failure, backend I/O, missing data directory).
//! - [`StoreResult`] — convenience alias used by backend implementations.
//!
//! Store errors never reach shell callers: [`PersistentStore`] turns load
//! failures into `None` and logs save failures at warn level. The error
//! type exists for backend implementors and for the logs.
//!
//! [`PersistentStore`]: crate::store::PersistentStore
//!
//! # Examples
//!
//! ```
//! use gpui_navshell::error::StoreError;
//!
//! let err = StoreError::decode("mes_recent_pages", "expected a JSON array");
//! assert_eq!(
//!     err.to_string(),
//!     "Failed to decode 'mes_recent_pages': expected a JSON array"
//! );
//! ```

use std::fmt;

/// Result alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Detailed error variants that can occur while persisting shell state.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display) for
/// idiomatic error handling.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Stored value could not be decoded into the expected shape
    Decode { key: String, message: String },

    /// Value could not be serialized for storage
    Encode { key: String, message: String },

    /// Backend read or write failed
    Backend { key: String, message: String },

    /// No platform data directory is available for the file store
    NoDataDir,
}

impl StoreError {
    /// Build a [`StoreError::Decode`] from any displayable cause.
    pub fn decode(key: impl Into<String>, cause: impl fmt::Display) -> Self {
        StoreError::Decode {
            key: key.into(),
            message: cause.to_string(),
        }
    }

    /// Build a [`StoreError::Encode`] from any displayable cause.
    pub fn encode(key: impl Into<String>, cause: impl fmt::Display) -> Self {
        StoreError::Encode {
            key: key.into(),
            message: cause.to_string(),
        }
    }

    /// Build a [`StoreError::Backend`] from any displayable cause.
    pub fn backend(key: impl Into<String>, cause: impl fmt::Display) -> Self {
        StoreError::Backend {
            key: key.into(),
            message: cause.to_string(),
        }
    }

    /// The storage key the error relates to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            StoreError::Decode { key, .. }
            | StoreError::Encode { key, .. }
            | StoreError::Backend { key, .. } => Some(key),
            StoreError::NoDataDir => None,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Decode { key, message } => {
                write!(f, "Failed to decode '{}': {}", key, message)
            }
            StoreError::Encode { key, message } => {
                write!(f, "Failed to encode '{}': {}", key, message)
            }
            StoreError::Backend { key, message } => {
                write!(f, "Storage backend failed for '{}': {}", key, message)
            }
            StoreError::NoDataDir => {
                write!(f, "No platform data directory available")
            }
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// Tests
// ============================================================================
