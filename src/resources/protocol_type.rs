//! Protocol type resource implementation.
//!
//! A protocol type is a named routing-protocol category (e.g. "bgp", "ospf"),
//! scoped per site. The server enforces a uniqueness constraint on
//! `(site, name)`; violating it fails the create with the message
//! "The fields site, name must make a unique set."
//!
//! # Example
//!
//! ```rust,ignore
//! use nsot_client::resources::{NewProtocolType, ProtocolType};
//!
//! // Create with the default site.
//! let created = ProtocolType::create(
//!     &client,
//!     NewProtocolType::new("bgp"),
//! ).await?;
//!
//! // List by name.
//! let matches = ProtocolType::list(
//!     &client,
//!     &ProtocolTypeFilter::default().name("bgp"),
//! ).await?;
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, HttpError};
use crate::config::SiteId;
use crate::path::ResourcePath;

/// Collection name under the API base URL.
const COLLECTION: &str = "protocol_types";

/// A protocol type as returned by the server.
///
/// # Fields
///
/// - `id` - Assigned by the server, unique across sites
/// - `name` - Required; unique within a site
/// - `description` - Optional on creation, defaults to empty
/// - `site_id` - The owning site; defaults to the configured default site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProtocolType {
    /// Server-assigned unique identifier.
    pub id: u64,
    /// The protocol type name (e.g. "bgp").
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// The site this protocol type belongs to.
    pub site_id: SiteId,
}

/// Payload for creating a protocol type.
///
/// An omitted `site_id` is filled from the client's configured default site
/// before the request is sent, so the default-site rule lives in exactly one
/// place.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct NewProtocolType {
    /// The protocol type name (required).
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The owning site; the client default is used when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
}

impl NewProtocolType {
    /// Creates a payload with only the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the owning site.
    #[must_use]
    pub const fn site(mut self, site: SiteId) -> Self {
        self.site_id = Some(site);
        self
    }
}

/// Partial-update payload for a protocol type.
///
/// Only the fields present are sent; the server leaves the rest unchanged.
/// Sending a value equal to the current one succeeds idempotently.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ProtocolTypePatch {
    /// New name, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description, if changing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProtocolTypePatch {
    /// Sets the new name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns whether the patch names no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// List filters for protocol types.
///
/// All filters are optional and combine conjunctively. A filter matching
/// zero resources yields an empty result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolTypeFilter {
    /// Filter by exact name.
    pub name: Option<String>,
    /// Filter by owning site.
    pub site_id: Option<SiteId>,
    /// Filter by server-assigned id.
    pub id: Option<u64>,
}

impl ProtocolTypeFilter {
    /// Sets the name filter.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the site filter.
    #[must_use]
    pub const fn site(mut self, site: SiteId) -> Self {
        self.site_id = Some(site);
        self
    }

    /// Sets the id filter.
    #[must_use]
    pub const fn id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Renders the filter as query parameters.
    #[must_use]
    pub fn to_query(&self) -> Option<HashMap<String, String>> {
        let mut query = HashMap::new();
        if let Some(name) = &self.name {
            query.insert("name".to_string(), name.clone());
        }
        if let Some(site) = self.site_id {
            query.insert("site_id".to_string(), site.to_string());
        }
        if let Some(id) = self.id {
            query.insert("id".to_string(), id.to_string());
        }
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }
}

impl ProtocolType {
    /// Creates a protocol type.
    ///
    /// An omitted site is filled from the client's default site before the
    /// request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] with the server's message when the
    /// `(site, name)` pair already exists ("The fields site, name must make
    /// a unique set."), and for any other non-2xx response.
    pub async fn create(
        client: &ApiClient,
        new: NewProtocolType,
    ) -> Result<Self, HttpError> {
        let mut new = new;
        if new.site_id.is_none() {
            new.site_id = Some(client.default_site());
        }

        let path = ResourcePath::collection(COLLECTION);
        let body = serde_json::to_value(&new).map_err(codec_error)?;
        let created = client.create(&path, body).await?;

        serde_json::from_value(created).map_err(codec_error)
    }

    /// Lists protocol types matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors. Zero matches is
    /// a success with an empty vec.
    pub async fn list(
        client: &ApiClient,
        filter: &ProtocolTypeFilter,
    ) -> Result<Vec<Self>, HttpError> {
        let path = ResourcePath::collection(COLLECTION);
        let listed = client.list(&path, filter.to_query()).await?;

        serde_json::from_value(listed).map_err(codec_error)
    }

    /// Fetches a single protocol type by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors, including
    /// not-found.
    pub async fn fetch(client: &ApiClient, id: u64) -> Result<Self, HttpError> {
        let path = ResourcePath::collection(COLLECTION).id(id);
        let fetched = client.fetch(&path, None).await?;

        serde_json::from_value(fetched).map_err(codec_error)
    }

    /// Partially updates a protocol type identified by `(id, site)`.
    ///
    /// Both id and site are required to disambiguate; fields absent from the
    /// patch are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors, including
    /// not-found for a nonexistent `(id, site)` pair.
    pub async fn update(
        client: &ApiClient,
        id: u64,
        site: SiteId,
        patch: ProtocolTypePatch,
    ) -> Result<Self, HttpError> {
        let path = ResourcePath::collection(COLLECTION).id(id);
        let body = serde_json::to_value(&patch).map_err(codec_error)?;
        let query = HashMap::from([("site_id".to_string(), site.to_string())]);
        let updated = client.update(&path, body, Some(query)).await?;

        serde_json::from_value(updated).map_err(codec_error)
    }

    /// Deletes a protocol type identified by `(id, site)`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors, including
    /// not-found for a nonexistent `(id, site)` pair.
    pub async fn delete(client: &ApiClient, id: u64, site: SiteId) -> Result<(), HttpError> {
        let path = ResourcePath::collection(COLLECTION).id(id);
        let query = HashMap::from([("site_id".to_string(), site.to_string())]);
        client.delete(&path, Some(query)).await?;

        Ok(())
    }
}

/// Maps a JSON codec failure onto the unified HTTP error type.
pub(crate) fn codec_error(err: serde_json::Error) -> HttpError {
    HttpError::Response(crate::client::HttpResponseError {
        code: 502,
        message: format!("Malformed JSON payload: {err}"),
    })
}
