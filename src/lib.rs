//! # Strutta Client
//!
//! An async Rust client for the Strutta XML REST API.
//!
//! The library covers the three concerns every call to the service goes
//! through:
//! - **Addressing**: endpoints are identified by a `section/method` pair,
//!   accepted either as a string path or as a tuple.
//! - **Signing**: each request carries an `authsecret` derived from the
//!   section, method, API key and API secret.
//! - **Response interpretation**: XML bodies are parsed into an owned element
//!   tree; documents carrying `errorcode`/`errormessage` become typed errors,
//!   and the reserved invalid-token code drops the held session.
//!
//! A per-user session (`user/login` / `user/logout`) is owned by the client
//! and injected into requests as `authtoken` while it is held.
//!
//! # Example
//! ```ignore
//! use strutta_client::prelude::*;
//!
//! let config = Config::with_credentials("my-key", "my-secret");
//! let client = Client::new(config);
//!
//! let mut params = Params::new();
//! params.insert("game_id".to_string(), "1234".to_string());
//! let doc = client.get("games/show", params).await?;
//! println!("name: {:?}", doc.child_text("name"));
//! ```

/// Client for the Strutta XML REST API
pub mod client;
/// Configuration for the client
pub mod config;
/// Constants used throughout the crate
pub mod constants;
/// Endpoint addressing (section/method resolution)
pub mod endpoint;
/// Error types for the crate
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Session state and lifecycle
pub mod session;
/// Request signature derivation
pub mod signing;
/// Utility functions
pub mod utils;
/// XML response tree
pub mod xml;

/// Current version of the crate, as declared in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the crate
pub fn version() -> &'static str {
    VERSION
}
