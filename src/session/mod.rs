//! Session state and lifecycle.
//!
//! A [`Session`](interface::Session) is created by a successful `user/login`
//! call, held by the client, and dropped on logout or when the service
//! reports the invalid-token error code. Callers may extract it for external
//! persistence and re-inject it into a fresh client.

/// Session value object and the lifecycle trait implemented by the client
pub mod interface;
/// Extraction of session fields from login responses
pub mod response;

pub use interface::{Authenticator, Session};
