//! Request descriptor types for the CRUD REST client.
//!
//! This module provides the [`RestRequest`] type and its builder for
//! describing a single CRUD exchange before it is dispatched.

use std::fmt;

use serde_json::{Map, Value};

use crate::client::errors::InvalidRequestError;

/// HTTP methods supported by the client.
///
/// The client maps CRUD operations onto the four standard REST verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for reading resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// An ephemeral descriptor for a single CRUD request.
///
/// A descriptor carries everything needed to construct the request URL and
/// body: the resource collection, an optional item identifier, at most one
/// query filter pair, and an optional JSON body. Descriptors are built via
/// [`RestRequest::builder`] and consumed by the dispatch layer; nothing is
/// persisted across calls.
///
/// # Example
///
/// ```rust
/// use crud_client::client::{RestRequest, HttpMethod};
/// use serde_json::{Map, Value};
///
/// // GET request for one item with a filter
/// let request = RestRequest::builder(HttpMethod::Get, "users")
///     .item_id("42")
///     .filter("status", "open")
///     .build()
///     .unwrap();
///
/// // POST request with a body
/// let mut body = Map::new();
/// body.insert("name".to_string(), Value::String("x".to_string()));
/// let request = RestRequest::builder(HttpMethod::Post, "users")
///     .body(body)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct RestRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The resource collection path segment (e.g., `users`).
    pub resource: String,
    /// The item identifier within the collection, if any.
    pub item_id: Option<String>,
    /// A single query-filter key/value pair, if any.
    pub filter: Option<(String, String)>,
    /// The JSON body for POST/PUT requests.
    pub body: Option<Map<String, Value>>,
}

impl RestRequest {
    /// Creates a new builder for constructing a `RestRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, resource: impl Into<String>) -> RestRequestBuilder {
        RestRequestBuilder::new(method, resource)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if `method` is `Post` or
    /// `Put` but no body is set.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(self.method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing [`RestRequest`] instances.
///
/// Provides a fluent API for the optional parts of a request descriptor.
#[derive(Debug)]
pub struct RestRequestBuilder {
    method: HttpMethod,
    resource: String,
    item_id: Option<String>,
    filter: Option<(String, String)>,
    body: Option<Map<String, Value>>,
}

impl RestRequestBuilder {
    /// Creates a new builder with the required method and resource.
    fn new(method: HttpMethod, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            item_id: None,
            filter: None,
            body: None,
        }
    }

    /// Sets the item identifier.
    #[must_use]
    pub fn item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// Sets the single query-filter key/value pair.
    ///
    /// The client supports at most one filter per request; calling this
    /// twice replaces the earlier pair.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter = Some((key.into(), value.into()));
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`RestRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<RestRequest, InvalidRequestError> {
        let request = RestRequest {
            method: self.method,
            resource: self.resource,
            item_id: self.item_id,
            filter: self.filter,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
