//! HTTP client for NSoT API communication.
//!
//! This module provides the [`ApiClient`] type: the resource client that
//! composes [`ResourcePath`]s into URLs, attaches the identifying email
//! header, and returns decoded JSON bodies.

use std::collections::HashMap;

use crate::client::errors::{HttpError, HttpResponseError};
use crate::client::http_request::{HttpMethod, HttpRequest};
use crate::client::http_response::HttpResponse;
use crate::config::{Email, NsotConfig, SiteId};
use crate::error::ConfigError;
use crate::path::{ResourceOperation, ResourcePath};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resource client for the NSoT REST API.
///
/// The client handles:
/// - URL construction from the configured base URL and a [`ResourcePath`]
///   (composed URLs never end in a trailing slash)
/// - Default headers including User-Agent and the identifying email
/// - Decoding JSON response bodies and surfacing server error messages
///
/// There is no automatic retry, no response caching, and no rate limiting.
/// Each instance holds its own auth state; instances share nothing.
///
/// # Example
///
/// ```rust,ignore
/// use nsot_client::{ApiClient, NsotConfig, BaseUrl, ResourcePath};
///
/// let config = NsotConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8990/api")?)
///     .build()?;
///
/// let mut client = ApiClient::new(&config);
/// client.auth("jathan@localhost")?;
///
/// let sites = client.list(&ResourcePath::collection("sites"), None).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `http://localhost:8990/api`), no trailing slash.
    base_url: String,
    /// Name of the header carrying the identifying email.
    auth_header: String,
    /// Site assigned when a create operation omits one.
    default_site: SiteId,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client from the given configuration.
    ///
    /// If the configuration carries an email, it is applied as the auth
    /// header immediately.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &NsotConfig) -> Self {
        let user_agent = format!("nsot-client v{CLIENT_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(email) = config.email() {
            default_headers.insert(config.auth_header().to_string(), email.as_ref().to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            auth_header: config.auth_header().to_string(),
            default_site: config.default_site(),
            default_headers,
        }
    }

    /// Sets the auth header from an identifying email.
    ///
    /// All subsequent requests from this instance carry the email. Calling
    /// again replaces the previous value; there is no rotation or expiry
    /// logic.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEmail`] if the email is empty, or
    /// [`ConfigError::InvalidEmail`] if it is malformed. The failure is
    /// local; no request is sent.
    pub fn auth(&mut self, email: &str) -> Result<(), ConfigError> {
        let email = Email::new(email)?;
        self.default_headers
            .insert(self.auth_header.clone(), email.as_ref().to_string());
        Ok(())
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the site assigned when a create operation omits one.
    #[must_use]
    pub const fn default_site(&self) -> SiteId {
        self.default_site
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Fetches a single resource (GET).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors.
    pub async fn fetch(
        &self,
        path: &ResourcePath,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::Fetch, path, None, query)
            .await
    }

    /// Lists a collection (GET), optionally filtered by query parameters.
    ///
    /// A filter matching zero resources yields an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors.
    pub async fn list(
        &self,
        path: &ResourcePath,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::List, path, None, query)
            .await
    }

    /// Creates a resource (POST).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors.
    pub async fn create(
        &self,
        path: &ResourcePath,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::Create, path, Some(body), None)
            .await
    }

    /// Replaces a resource wholesale (PUT).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors.
    pub async fn replace(
        &self,
        path: &ResourcePath,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::Replace, path, Some(body), query)
            .await
    }

    /// Partially updates a resource (PATCH).
    ///
    /// Fields absent from the body are left unchanged by the server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors.
    pub async fn update(
        &self,
        path: &ResourcePath,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::Update, path, Some(body), query)
            .await
    }

    /// Deletes a resource (DELETE).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, network, or response errors,
    /// including not-found for a nonexistent resource.
    pub async fn delete(
        &self,
        path: &ResourcePath,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        self.execute(ResourceOperation::Delete, path, None, query)
            .await
    }

    /// Internal helper mapping a terminal verb to a request.
    async fn execute(
        &self,
        operation: ResourceOperation,
        path: &ResourcePath,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, HttpError> {
        tracing::debug!(operation = operation.as_str(), %path, "dispatching operation");

        let mut builder = HttpRequest::builder(operation.http_method(), path.render());

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;
        let response = self.request(request).await?;
        Ok(response.body)
    }

    /// Sends an HTTP request to the NSoT API.
    ///
    /// Every call blocks (awaits) until the response is received or a
    /// transport error occurs; there is no retry loop.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_url, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!(method = %request.http_method, %url, "sending request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text)
                .unwrap_or_else(|_| serde_json::json!({ "raw_body": body_text }))
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let message = response.error_message();
        tracing::debug!(code, %message, "request failed");

        Err(HttpError::Response(HttpResponseError { code, message }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
