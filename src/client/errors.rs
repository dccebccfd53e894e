//! HTTP-specific error types for the NSoT client.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! There is no retry layer: every failure surfaces immediately to the caller
//! with the status code and the server-provided message.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.fetch(&path, None).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {e}");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is the server-provided error text, extracted from the NSoT
/// error envelope, so callers can match it verbatim (e.g. the uniqueness
/// violation "The fields site, name must make a unique set.").
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Server-provided error message.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised locally, before the request is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST, PUT, or PATCH request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The path ends in a trailing slash. Append-slash is disabled; composed
    /// URLs never end in a slash.
    #[error("Path '{path}' must not end in a trailing slash.")]
    TrailingSlash {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// Use pattern matching to handle specific error types at API boundaries.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) => None,
        }
    }

    /// Returns whether this is a not-found (404) response error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
