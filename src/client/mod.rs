//! HTTP client functionality for NSoT API communication.
//!
//! This module provides the resource client and its supporting request,
//! response, and error types:
//!
//! - [`ApiClient`]: The resource client with auth header state and terminal
//!   verb calls over [`ResourcePath`](crate::ResourcePath)s
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: Request construction
//! - [`HttpResponse`]: Decoded responses with error-message extraction
//! - [`HttpError`]: Unified HTTP error type

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{ApiClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
