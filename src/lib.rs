//! # NSoT Client
//!
//! A Rust client for the NSoT (Network Source of Truth) REST API, providing
//! type-safe configuration, explicit resource-path composition, and typed
//! resource wrappers.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NsotConfig`] and [`NsotConfigBuilder`]
//! - Validated newtypes for the base URL and identifying email
//! - An explicit [`ResourcePath`] builder: ordered path segments terminated
//!   by a verb call, mapping losslessly to URLs with no trailing slash
//! - [`ApiClient`] with single-header email auth (`X-NSoT-Email`) and
//!   decoded-JSON verb calls (fetch/list/create/replace/update/delete)
//! - Typed resources under [`resources`]: protocol types and sites
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nsot_client::{ApiClient, BaseUrl, Email, NsotConfig, ResourcePath};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NsotConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8990/api")?)
//!     .email(Email::new("jathan@localhost")?)
//!     .build()?;
//!
//! let client = ApiClient::new(&config);
//!
//! // GET /sites
//! let sites = client.list(&ResourcePath::collection("sites"), None).await?;
//!
//! // GET /sites/1/networks
//! let path = ResourcePath::collection("sites").id(1).join("networks");
//! let networks = client.list(&path, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Typed Resources
//!
//! ```rust,no_run
//! use nsot_client::resources::{NewProtocolType, ProtocolType, ProtocolTypeFilter};
//! # use nsot_client::ApiClient;
//!
//! # async fn run(client: ApiClient) -> Result<(), Box<dyn std::error::Error>> {
//! let created = ProtocolType::create(&client, NewProtocolType::new("bgp")).await?;
//!
//! let listed = ProtocolType::list(
//!     &client,
//!     &ProtocolTypeFilter::default().name("bgp"),
//! ).await?;
//! assert_eq!(listed[0].id, created.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction; auth without
//!   an email fails locally before any request is sent
//! - **No hidden behavior**: No retries, no response caching, no rate limiting
//! - **Independent instances**: One client holds one session's auth state;
//!   instances share nothing

pub mod client;
pub mod config;
pub mod error;
pub mod path;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::{
    ApiClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
pub use config::{BaseUrl, Email, NsotConfig, NsotConfigBuilder, SiteId, DEFAULT_AUTH_HEADER};
pub use error::ConfigError;
pub use path::{ResourceOperation, ResourcePath};
