//! HTTP response types for the NSoT client.
//!
//! This module provides the [`HttpResponse`] type and the error-message
//! extraction used when the server reports a failure.

use std::collections::HashMap;

/// An HTTP response from the NSoT API.
///
/// Holds the status code, response headers, and the decoded JSON body.
///
/// # Example
///
/// ```rust
/// use nsot_client::client::HttpResponse;
/// use serde_json::json;
///
/// let response = HttpResponse::new(200, Default::default(), json!({"id": 1}));
/// assert!(response.is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased header name.
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded JSON body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns whether the response has a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Extracts a human-readable error message from the response body.
    ///
    /// The NSoT service reports failures as
    /// `{"error": {"code": N, "message": ...}}` where `message` is either a
    /// plain string or a map of field names to lists of messages (as produced
    /// by server-side field validation). Field maps are flattened to their
    /// messages joined with spaces so that callers can match server text
    /// verbatim, e.g. "The fields site, name must make a unique set."
    ///
    /// Falls back to the raw body when the envelope is absent.
    #[must_use]
    pub fn error_message(&self) -> String {
        let message = self.body.pointer("/error/message");

        match message {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Object(fields)) => {
                let mut parts = Vec::new();
                for value in fields.values() {
                    match value {
                        serde_json::Value::Array(items) => {
                            parts.extend(items.iter().filter_map(|v| v.as_str()).map(String::from));
                        }
                        serde_json::Value::String(s) => parts.push(s.clone()),
                        other => parts.push(other.to_string()),
                    }
                }
                parts.join(" ")
            }
            Some(other) => other.to_string(),
            None => self.body.to_string(),
        }
    }
}
