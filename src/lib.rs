//! # crud-client
//!
//! An asynchronous REST client mapping generic CRUD operations
//! (get/post/put/delete) onto resource endpoints, with optional query-filter
//! support and a shared access-token query parameter.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for the API root and access token
//! - An async [`RestClient`] with one method per REST verb
//! - A descriptive error taxonomy distinguishing HTTP failures, transport
//!   failures, and JSON decoding failures
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crud_client::RestClient;
//! use serde_json::{Map, Value};
//!
//! let client = RestClient::connect("https://api.example.com", Some("abc123"))?;
//!
//! // Read a collection, filtered by one key/value pair
//! let open = client.get("users", None, Some(("status", "open"))).await?;
//!
//! // Read one item
//! let user = client.get("users", Some("42"), None).await?;
//!
//! // Create an item; an "id" field is generated when absent
//! let mut body = Map::new();
//! body.insert("name".to_string(), Value::String("x".to_string()));
//! let created = client.post("users", body).await?;
//!
//! // Update and delete
//! let updated = client.put("users", body, Some("42")).await?;
//! let removed = client.delete("users", Some("42")).await?;
//! ```
//!
//! ## URL Shape
//!
//! Every request URL has the form:
//!
//! ```text
//! <api_root>/<resource>[/<item_id>][?<key>=<value>][&|?token=<access_token>]
//! ```
//!
//! The API root has trailing slashes stripped at configuration time, the
//! resource has surrounding slashes stripped at request time, and the token
//! value has surrounding `?` characters stripped before encoding.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and immutable
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **One round trip per call**: No retries, no pooling across calls, no
//!   hidden state

pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use client::{ClientError, HttpMethod, InvalidRequestError, RestClient, RestRequest};
pub use config::{AccessToken, ApiRoot, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;
