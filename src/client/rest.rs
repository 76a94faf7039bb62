//! REST client implementation.
//!
//! This module provides the [`RestClient`] type for dispatching CRUD
//! operations against REST resource endpoints.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::client::errors::ClientError;
use crate::client::request::{HttpMethod, RestRequest};
use crate::client::url::build_url;
use crate::config::{AccessToken, ApiRoot, ClientConfig};
use crate::error::ConfigError;

/// Asynchronous REST client mapping CRUD operations onto resource endpoints.
///
/// Each operation performs exactly one request/response round trip: the URL
/// is built from the configured API root, the resource path, an optional item
/// identifier, an optional query filter, and the configured access token; a
/// 200 response is parsed as JSON and returned, and any other status is
/// surfaced as [`ClientError::RequestFailed`] carrying the raw body text.
///
/// Every call opens a fresh connection and releases it when the call returns,
/// on every exit path. There are no retries, no timeouts, and no state shared
/// across calls.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use crud_client::RestClient;
/// use serde_json::{Map, Value};
///
/// let client = RestClient::connect("https://api.example.com", Some("abc123"))?;
///
/// // GET one item, filtered
/// let user = client.get("users", Some("42"), Some(("status", "open"))).await?;
///
/// // POST a new item; an "id" field is generated when absent
/// let mut body = Map::new();
/// body.insert("name".to_string(), Value::String("x".to_string()));
/// let created = client.post("users", body).await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    config: ClientConfig,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from a validated configuration.
    #[must_use]
    pub const fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Creates a new REST client from raw configuration strings.
    ///
    /// Trailing slashes are stripped from `api_root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `api_root` is empty or `access_token` is
    /// `Some` but empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crud_client::RestClient;
    ///
    /// let client = RestClient::connect("https://api.example.com/", Some("abc123")).unwrap();
    /// ```
    pub fn connect(
        api_root: impl Into<String>,
        access_token: Option<impl Into<String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ClientConfig::builder().api_root(ApiRoot::new(api_root)?);
        if let Some(token) = access_token {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        Ok(Self::new(builder.build()?))
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Performs a GET request, optionally scoped to one item and filtered by
    /// at most one key/value pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] for any non-200 status,
    /// [`ClientError::Transport`] for connection failures, and
    /// [`ClientError::JsonDecode`] when a 200 body is not valid JSON.
    pub async fn get(
        &self,
        resource: &str,
        item_id: Option<&str>,
        filter: Option<(&str, &str)>,
    ) -> Result<Value, ClientError> {
        let mut builder = RestRequest::builder(HttpMethod::Get, resource);
        if let Some(item_id) = item_id {
            builder = builder.item_id(item_id);
        }
        if let Some((key, value)) = filter {
            builder = builder.filter(key, value);
        }
        self.dispatch(builder.build()?).await
    }

    /// Performs a POST request to create a resource.
    ///
    /// When `data` has no `"id"` field, a freshly generated UUID v4 string is
    /// injected before sending, so every created item carries a globally
    /// unique identifier.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    pub async fn post(
        &self,
        resource: &str,
        mut data: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        if !data.contains_key("id") {
            data.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
        let request = RestRequest::builder(HttpMethod::Post, resource)
            .body(data)
            .build()?;
        self.dispatch(request).await
    }

    /// Performs a PUT request to update a resource, optionally scoped to one
    /// item.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    pub async fn put(
        &self,
        resource: &str,
        data: Map<String, Value>,
        item_id: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut builder = RestRequest::builder(HttpMethod::Put, resource).body(data);
        if let Some(item_id) = item_id {
            builder = builder.item_id(item_id);
        }
        self.dispatch(builder.build()?).await
    }

    /// Performs a DELETE request, optionally scoped to one item.
    ///
    /// # Errors
    ///
    /// Same contract as [`get`](Self::get).
    pub async fn delete(
        &self,
        resource: &str,
        item_id: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut builder = RestRequest::builder(HttpMethod::Delete, resource);
        if let Some(item_id) = item_id {
            builder = builder.item_id(item_id);
        }
        self.dispatch(builder.build()?).await
    }

    /// Sends a request descriptor and applies the 200-or-fail contract.
    async fn dispatch(&self, request: RestRequest) -> Result<Value, ClientError> {
        request.verify()?;

        let url = build_url(
            self.config.api_root().as_ref(),
            &request.resource,
            request.item_id.as_deref(),
            request
                .filter
                .as_ref()
                .map(|(key, value)| (key.as_str(), value.as_str())),
            self.config.access_token().map(AsRef::as_ref),
        );

        tracing::debug!(method = %request.method, url = %url, "sending request");

        // Fresh session per call; dropped when this function returns.
        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        let mut req_builder = match request.method {
            HttpMethod::Get => client.get(&url),
            HttpMethod::Post => client.post(&url),
            HttpMethod::Put => client.put(&url),
            HttpMethod::Delete => client.delete(&url),
        };
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let res = req_builder.send().await?;
        let status = res.status().as_u16();
        let body_text = res.text().await?;

        if status == 200 {
            Ok(serde_json::from_str(&body_text)?)
        } else {
            tracing::error!(
                method = %request.method,
                status,
                body = %body_text,
                "request failed"
            );
            Err(ClientError::RequestFailed {
                method: request.method,
                status,
                body: body_text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_strips_trailing_slash() {
        let client = RestClient::connect("https://api.example.com/", None::<String>).unwrap();
        assert_eq!(client.config().api_root().as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_connect_without_token() {
        let client = RestClient::connect("https://api.example.com", None::<String>).unwrap();
        assert!(client.config().access_token().is_none());
    }

    #[test]
    fn test_connect_with_token() {
        let client = RestClient::connect("https://api.example.com", Some("abc123")).unwrap();
        assert_eq!(client.config().access_token().unwrap().as_ref(), "abc123");
    }

    #[test]
    fn test_connect_rejects_empty_root() {
        let result = RestClient::connect("", None::<String>);
        assert!(matches!(result, Err(ConfigError::EmptyApiRoot)));
    }

    #[test]
    fn test_connect_rejects_empty_token() {
        let result = RestClient::connect("https://api.example.com", Some(""));
        assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
