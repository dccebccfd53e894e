//! Configuration types for the NSoT client.
//!
//! This module provides the core configuration types used to initialize a
//! client for API communication with an NSoT service.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`NsotConfig`]: The main configuration struct holding all client settings
//! - [`NsotConfigBuilder`]: A builder for constructing [`NsotConfig`] instances
//! - [`BaseUrl`]: A validated API base URL newtype
//! - [`Email`]: A validated identifying email newtype
//! - [`SiteId`]: A site identifier
//!
//! # Example
//!
//! ```rust
//! use nsot_client::{NsotConfig, BaseUrl, Email};
//!
//! let config = NsotConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8990/api").unwrap())
//!     .email(Email::new("jathan@localhost").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Email, SiteId};

use crate::error::ConfigError;

/// Default header carrying the identifying email.
pub const DEFAULT_AUTH_HEADER: &str = "X-NSoT-Email";

/// Default site used when a create operation omits the site.
///
/// The default-site assignment rule is implementation-defined on the server
/// side; site id 1 matches observed behavior and can be overridden via
/// [`NsotConfigBuilder::default_site`].
pub const DEFAULT_SITE: SiteId = SiteId(1);

/// Configuration for the NSoT client.
///
/// Holds the API base URL, the optional identifying email applied at
/// construction, the auth header name, and the default site used when a
/// create operation omits one.
///
/// # Thread Safety
///
/// `NsotConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use nsot_client::{NsotConfig, BaseUrl, Email, SiteId};
///
/// let config = NsotConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8990/api").unwrap())
///     .email(Email::new("jathan@localhost").unwrap())
///     .default_site(SiteId(2))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.default_site(), SiteId(2));
/// ```
#[derive(Clone, Debug)]
pub struct NsotConfig {
    base_url: BaseUrl,
    email: Option<Email>,
    auth_header: String,
    default_site: SiteId,
}

impl NsotConfig {
    /// Creates a new builder for constructing an `NsotConfig`.
    #[must_use]
    pub fn builder() -> NsotConfigBuilder {
        NsotConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the identifying email, if configured.
    #[must_use]
    pub const fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Returns the name of the header carrying the identifying email.
    #[must_use]
    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Returns the default site assigned when a create omits the site.
    #[must_use]
    pub const fn default_site(&self) -> SiteId {
        self.default_site
    }
}

// Verify NsotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NsotConfig>();
};

/// Builder for constructing [`NsotConfig`] instances.
///
/// The only required field is `base_url`. All other fields have defaults.
///
/// # Defaults
///
/// - `email`: `None` (set later via [`ApiClient::auth`](crate::ApiClient::auth))
/// - `auth_header`: `"X-NSoT-Email"`
/// - `default_site`: site id 1
///
/// # Example
///
/// ```rust
/// use nsot_client::{NsotConfig, BaseUrl};
///
/// let config = NsotConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8990/api").unwrap())
///     .auth_header("X-Custom-Email")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.auth_header(), "X-Custom-Email");
/// ```
#[derive(Debug, Default)]
pub struct NsotConfigBuilder {
    base_url: Option<BaseUrl>,
    email: Option<Email>,
    auth_header: Option<String>,
    default_site: Option<SiteId>,
}

impl NsotConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the identifying email applied at client construction.
    #[must_use]
    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Overrides the auth header name.
    #[must_use]
    pub fn auth_header(mut self, header: impl Into<String>) -> Self {
        self.auth_header = Some(header.into());
        self
    }

    /// Overrides the default site assigned when a create omits the site.
    #[must_use]
    pub const fn default_site(mut self, site: SiteId) -> Self {
        self.default_site = Some(site);
        self
    }

    /// Builds the [`NsotConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` was not set.
    pub fn build(self) -> Result<NsotConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(NsotConfig {
            base_url,
            email: self.email,
            auth_header: self
                .auth_header
                .unwrap_or_else(|| DEFAULT_AUTH_HEADER.to_string()),
            default_site: self.default_site.unwrap_or(DEFAULT_SITE),
        })
    }
}
