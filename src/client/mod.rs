//! CRUD REST client layer.
//!
//! This module provides the request-dispatch layer for mapping CRUD
//! operations onto REST resource endpoints.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The async client with `get()`, `post()`, `put()`,
//!   `delete()` methods
//! - [`RestRequest`]: An ephemeral descriptor for a single request
//! - [`HttpMethod`]: The four supported REST verbs
//! - [`ClientError`]: Error type for dispatch failures
//!
//! # Example
//!
//! ```rust,ignore
//! use crud_client::RestClient;
//!
//! let client = RestClient::connect("https://api.example.com", Some("abc123"))?;
//! let open_users = client.get("users", None, Some(("status", "open"))).await?;
//! ```
//!
//! # Request/Response Contract
//!
//! Each operation issues exactly one HTTP round trip. A status of exactly 200
//! is success and the body is parsed as JSON; any other status fails with
//! [`ClientError::RequestFailed`] carrying the raw body text. No retries are
//! performed.

mod errors;
mod request;
mod rest;
mod url;

pub use errors::{ClientError, InvalidRequestError};
pub use request::{HttpMethod, RestRequest, RestRequestBuilder};
pub use rest::RestClient;
