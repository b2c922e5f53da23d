//! # Strutta Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to everything needed for most Strutta API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use strutta_client::prelude::*;
//!
//! let config = Config::with_credentials("key", "secret");
//! let client = Client::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Strutta API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND CALL ADDRESSING
// ============================================================================

/// The API client and its parameter map
pub use crate::client::{Client, Params};

/// Endpoint addressing for call paths
pub use crate::endpoint::{Endpoint, IntoEndpoint};

// ============================================================================
// AUTHENTICATION AND SESSION MANAGEMENT
// ============================================================================

/// Session lifecycle trait and the session value object
pub use crate::session::interface::{Authenticator, Session};

/// Request signature helpers
pub use crate::signing::{auth_secret, password_hash};

// ============================================================================
// RESPONSES
// ============================================================================

/// Parsed XML response element
pub use crate::xml::Element;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup for binaries and tests
pub use crate::utils::logger::setup_logger;
