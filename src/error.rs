//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! errors raised before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use nsot_client::{Email, ConfigError};
//!
//! let result = Email::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyEmail)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Email cannot be empty.
    #[error("You must provide an email!")]
    EmptyEmail,

    /// Email is malformed.
    #[error("Invalid email '{email}'. Expected format: 'user@example.com'.")]
    InvalidEmail {
        /// The invalid email that was provided.
        email: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'http://localhost:8990/api').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
