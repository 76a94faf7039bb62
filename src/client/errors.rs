//! Error types for CRUD request dispatch.
//!
//! # Error Handling
//!
//! The client uses specific error variants for the three failure scenarios of
//! a request/response exchange, plus one for descriptor validation:
//!
//! - [`ClientError::RequestFailed`]: the server answered with a non-200 status
//! - [`ClientError::Transport`]: the connection itself failed (DNS, TLS, reset)
//! - [`ClientError::JsonDecode`]: a 200 body was not valid JSON
//! - [`ClientError::InvalidRequest`]: a descriptor failed validation before
//!   anything was sent
//!
//! # Example
//!
//! ```rust,ignore
//! use crud_client::{ClientError, RestClient};
//!
//! match client.get("users", None, None).await {
//!     Ok(value) => println!("users: {value}"),
//!     Err(ClientError::RequestFailed { method, status, body }) => {
//!         println!("{method} failed with {status}: {body}");
//!     }
//!     Err(other) => println!("request error: {other}"),
//! }
//! ```

use thiserror::Error;

use crate::client::request::HttpMethod;

/// Error returned when a request descriptor fails validation.
///
/// This error is raised before anything is sent over the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST or PUT request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for CRUD operations.
///
/// Every failure is surfaced directly to the caller; the client performs no
/// retries and has no partial-success state.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a status other than 200.
    ///
    /// Carries the method, the status code, and the raw response body text so
    /// the caller can see exactly what the server said.
    #[error("{method} request failed with status {status}: {body}")]
    RequestFailed {
        /// The HTTP method of the failed request.
        method: HttpMethod,
        /// The HTTP status code of the response.
        status: u16,
        /// The raw response body text.
        body: String,
    },

    /// The underlying connection failed (DNS, TLS, connect, reset).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 200 response body was not valid JSON.
    #[error("Failed to decode response body as JSON: {0}")]
    JsonDecode(#[from] serde_json::Error),

    /// Request descriptor validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}
