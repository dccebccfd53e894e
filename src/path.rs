//! Resource path building.
//!
//! A [`ResourcePath`] is an ordered sequence of path segments that maps
//! directly and losslessly to a URL path. Composition is explicit: each
//! collection name or id appended becomes one URL segment, in order, with no
//! reordering or caching. Rendered paths never end in a trailing slash.
//!
//! This replaces the dynamic attribute-chain proxy found in duck-typed
//! clients with a builder that is checked at compile time: a chain of
//! segments terminated by a verb call on the client.
//!
//! # Example
//!
//! ```rust
//! use nsot_client::ResourcePath;
//!
//! let path = ResourcePath::collection("sites").id(1).join("networks");
//! assert_eq!(path.render(), "sites/1/networks");
//! ```

use std::fmt::{self, Display};

/// Operations that can be performed on a REST resource.
///
/// Each operation is the terminal verb of a path chain and corresponds to a
/// specific HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single resource (GET /resources/{id}).
    Fetch,
    /// List a collection (GET /resources).
    List,
    /// Create a new resource (POST /resources).
    Create,
    /// Replace an existing resource wholesale (PUT /resources/{id}).
    Replace,
    /// Partially update an existing resource (PATCH /resources/{id}).
    Update,
    /// Delete a resource (DELETE /resources/{id}).
    Delete,
}

impl ResourceOperation {
    /// Returns the HTTP method for this operation.
    #[must_use]
    pub const fn http_method(&self) -> crate::client::HttpMethod {
        use crate::client::HttpMethod;
        match self {
            Self::Fetch | Self::List => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Replace => HttpMethod::Put,
            Self::Update => HttpMethod::Patch,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::List => "list",
            Self::Create => "create",
            Self::Replace => "replace",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// An ordered sequence of URL path segments identifying a REST resource or
/// collection.
///
/// Segments are appended via [`join`](Self::join) (collection or literal
/// names) and [`id`](Self::id) (numeric identifiers) and rendered in
/// insertion order. Rendering never appends a trailing slash regardless of
/// any conventional default.
///
/// # Example
///
/// ```rust
/// use nsot_client::ResourcePath;
///
/// // Collection path.
/// let list = ResourcePath::collection("protocol_types");
/// assert_eq!(list.render(), "protocol_types");
///
/// // Member path.
/// let member = ResourcePath::collection("protocol_types").id(2);
/// assert_eq!(member.render(), "protocol_types/2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Starts a path at a top-level collection.
    #[must_use]
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Appends a sub-resource or collection name segment.
    #[must_use]
    pub fn join(mut self, name: impl Into<String>) -> Self {
        self.segments.push(name.into());
        self
    }

    /// Appends a numeric id segment.
    #[must_use]
    pub fn id(self, id: impl Display) -> Self {
        self.join(id.to_string())
    }

    /// Returns the segments in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Renders the path as a relative URL, slash-separated, with no leading
    /// or trailing slash.
    #[must_use]
    pub fn render(&self) -> String {
        self.segments.join("/")
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
