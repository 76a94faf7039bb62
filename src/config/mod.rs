//! Configuration types for the CRUD REST client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The configuration struct holding the API root and token
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`ApiRoot`]: A validated API root newtype with trailing slashes stripped
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use crud_client::{ClientConfig, ApiRoot, AccessToken};
//!
//! let config = ClientConfig::builder()
//!     .api_root(ApiRoot::new("https://api.example.com").unwrap())
//!     .access_token(AccessToken::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiRoot};

use crate::error::ConfigError;

/// Configuration for the REST client.
///
/// Holds the API root URL every resource path is joined onto and an optional
/// static access token appended to every request as a query parameter.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, and is immutable after
/// construction, so it can be shared freely across async tasks.
///
/// # Example
///
/// ```rust
/// use crud_client::{ClientConfig, ApiRoot};
///
/// let config = ClientConfig::builder()
///     .api_root(ApiRoot::new("https://api.example.com/").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_root().as_ref(), "https://api.example.com");
/// assert!(config.access_token().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_root: ApiRoot,
    access_token: Option<AccessToken>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API root.
    #[must_use]
    pub const fn api_root(&self) -> &ApiRoot {
        &self.api_root
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// The only required field is `api_root`; the access token defaults to `None`
/// for unauthenticated APIs.
///
/// # Example
///
/// ```rust
/// use crud_client::{ClientConfig, ApiRoot, AccessToken};
///
/// let config = ClientConfig::builder()
///     .api_root(ApiRoot::new("https://api.example.com").unwrap())
///     .access_token(AccessToken::new("abc123").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_root: Option<ApiRoot>,
    access_token: Option<AccessToken>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API root (required).
    #[must_use]
    pub fn api_root(mut self, root: ApiRoot) -> Self {
        self.api_root = Some(root);
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiRoot`] if no API root was set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_root = self.api_root.ok_or(ConfigError::EmptyApiRoot)?;
        Ok(ClientConfig {
            api_root,
            access_token: self.access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_root_only() {
        let config = ClientConfig::builder()
            .api_root(ApiRoot::new("https://api.example.com").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_root().as_ref(), "https://api.example.com");
        assert!(config.access_token().is_none());
    }

    #[test]
    fn test_builder_with_token() {
        let config = ClientConfig::builder()
            .api_root(ApiRoot::new("https://api.example.com").unwrap())
            .access_token(AccessToken::new("abc123").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.access_token().unwrap().as_ref(), "abc123");
    }

    #[test]
    fn test_builder_missing_root_fails() {
        let result = ClientConfig::builder().build();
        assert!(matches!(result, Err(ConfigError::EmptyApiRoot)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
    }

    #[test]
    fn test_config_clone_is_independent() {
        let config = ClientConfig::builder()
            .api_root(ApiRoot::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        let clone = config.clone();
        assert_eq!(clone.api_root(), config.api_root());
    }
}
