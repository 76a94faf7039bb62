//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and
//! actionable.
//!
//! # Example
//!
//! ```rust
//! use crud_client::{ApiRoot, ConfigError};
//!
//! let result = ApiRoot::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiRoot)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message. Validation happens
/// on construction, so a built [`ClientConfig`](crate::ClientConfig) is always
/// internally consistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API root cannot be empty.
    #[error("API root cannot be empty. Please provide the base URL of the API (e.g., 'https://api.example.com').")]
    EmptyApiRoot,

    /// Access token cannot be empty when provided.
    #[error("Access token cannot be empty. Omit the token entirely for unauthenticated APIs.")]
    EmptyAccessToken,
}
