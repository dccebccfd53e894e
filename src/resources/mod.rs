//! Typed resource wrappers over the generic client.
//!
//! Each resource is an explicit struct with serde derives and a small set of
//! CRUD operations built on [`ApiClient`](crate::ApiClient) and
//! [`ResourcePath`](crate::ResourcePath). This replaces the duck-typed
//! attribute proxy of dynamic clients with compile-time-checked types.

mod protocol_type;
mod site;

pub use protocol_type::{NewProtocolType, ProtocolType, ProtocolTypeFilter, ProtocolTypePatch};
pub use site::Site;
