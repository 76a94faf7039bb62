//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated API root URL.
///
/// The root is the prefix every resource path is joined onto. Any trailing
/// slashes are stripped on construction so that URL joining is unambiguous.
///
/// # Example
///
/// ```rust
/// use crud_client::ApiRoot;
///
/// let root = ApiRoot::new("https://api.example.com/").unwrap();
/// assert_eq!(root.as_ref(), "https://api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot(String);

impl ApiRoot {
    /// Creates a new validated API root, stripping trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiRoot`] if the root is empty after
    /// stripping.
    pub fn new(root: impl Into<String>) -> Result<Self, ConfigError> {
        let root = root.into();
        let root = root.trim_end_matches('/');
        if root.is_empty() {
            return Err(ConfigError::EmptyApiRoot);
        }
        Ok(Self(root.to_string()))
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated access token.
///
/// The token is appended to every request URL as a `token=` query parameter.
/// It is stored exactly as given; stray `?` characters around the value are
/// stripped at URL-construction time.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the credential.
///
/// # Example
///
/// ```rust
/// use crud_client::AccessToken;
///
/// let token = AccessToken::new("abc123").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let root = ApiRoot::new("https://api.example.com/").unwrap();
        assert_eq!(root.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_api_root_strips_multiple_trailing_slashes() {
        let root = ApiRoot::new("https://api.example.com///").unwrap();
        assert_eq!(root.as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_api_root_without_trailing_slash_unchanged() {
        let root = ApiRoot::new("http://localhost:8000").unwrap();
        assert_eq!(root.as_ref(), "http://localhost:8000");
    }

    #[test]
    fn test_empty_api_root_rejected() {
        assert!(matches!(ApiRoot::new(""), Err(ConfigError::EmptyApiRoot)));
    }

    #[test]
    fn test_slash_only_api_root_rejected() {
        assert!(matches!(ApiRoot::new("///"), Err(ConfigError::EmptyApiRoot)));
    }

    #[test]
    fn test_api_root_display_matches_inner() {
        let root = ApiRoot::new("https://api.example.com").unwrap();
        assert_eq!(root.to_string(), "https://api.example.com");
    }

    #[test]
    fn test_access_token_stores_raw_value() {
        let token = AccessToken::new("?abc123").unwrap();
        assert_eq!(token.as_ref(), "?abc123");
    }

    #[test]
    fn test_empty_access_token_rejected() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "AccessToken(*****)");
        assert!(!debug.contains("super-secret"));
    }
}
