//! Site resource implementation.
//!
//! Sites are the top-level scoping entity; protocol types and other
//! resources are namespaced under a site. Only the read surface is exposed
//! here.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, HttpError};
use crate::config::SiteId;
use crate::path::ResourcePath;

use super::protocol_type::codec_error;

/// Collection name under the API base URL.
const COLLECTION: &str = "sites";

/// A site as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    /// Server-assigned unique identifier.
    pub id: SiteId,
    /// The site name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Site {
    /// Lists all sites.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors.
    pub async fn list(client: &ApiClient) -> Result<Vec<Self>, HttpError> {
        let path = ResourcePath::collection(COLLECTION);
        let listed = client.list(&path, None).await?;

        serde_json::from_value(listed).map_err(codec_error)
    }

    /// Fetches a single site by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for network or response errors, including
    /// not-found.
    pub async fn fetch(client: &ApiClient, id: SiteId) -> Result<Self, HttpError> {
        let path = ResourcePath::collection(COLLECTION).id(id);
        let fetched = client.fetch(&path, None).await?;

        serde_json::from_value(fetched).map_err(codec_error)
    }
}
