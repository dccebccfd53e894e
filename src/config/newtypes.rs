//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A validated NSoT API base URL.
///
/// This newtype ensures the base URL is an absolute http(s) URL. Any trailing
/// slashes are stripped at construction so that path rendering controls slash
/// placement exclusively (composed URLs never end in a slash).
///
/// # Example
///
/// ```rust
/// use nsot_client::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8990/api/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8990/api");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not an absolute
    /// http or https URL.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let parsed = Url::parse(&url).map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated identifying email.
///
/// The email is sent as the value of the auth header (`X-NSoT-Email` by
/// default) on every request issued by a client. There is no token or
/// signature; the email alone identifies the caller.
///
/// # Example
///
/// ```rust
/// use nsot_client::Email;
///
/// let email = Email::new("jathan@localhost").unwrap();
/// assert_eq!(email.as_ref(), "jathan@localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new validated email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEmail`] if the email is empty or
    /// whitespace, or [`ConfigError::InvalidEmail`] if it does not contain
    /// an `@`.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into();
        let email = email.trim().to_string();

        if email.is_empty() {
            return Err(ConfigError::EmptyEmail);
        }
        if !email.contains('@') {
            return Err(ConfigError::InvalidEmail { email });
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::str::FromStr for Email {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A site identifier.
///
/// Sites are the top-level scoping entity in NSoT; protocol types and other
/// resources are namespaced under a site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub u64);

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SiteId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for SiteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
