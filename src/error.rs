use crate::constants::INVALID_TOKEN_CODE;
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
///
/// Every failure mode of a call is a distinct, catchable variant. The only
/// error that is ever swallowed internally is the remote half of a logout,
/// which is best-effort.
#[derive(Error, Debug)]
pub enum AppError {
    /// Call path is not a `section/method` pair
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// Locally rejected input: empty login credentials or a session record
    /// with missing fields
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Login attempted while a session is already held
    #[error("session conflict: a session is already active, logout first")]
    SessionConflict,

    /// Logout attempted while no session is held
    #[error("no active session")]
    NoActiveSession,

    /// HTTP verb the API does not define
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Server answered with an HTTP error status (400-599)
    #[error("transport error {status}: {reason}")]
    Transport {
        /// Status code returned by the server
        status: StatusCode,
        /// Reason phrase for the status
        reason: String,
    },

    /// Response body could not be parsed as XML
    #[error("decode error: {0}")]
    Decode(String),

    /// Application error reported by the service in the response document
    #[error("api error {code}: {message}")]
    Api {
        /// Numeric error code from the `errorcode` element
        code: i32,
        /// Message from the `errormessage` element
        message: String,
    },

    /// Low-level HTTP failure (network, DNS, timeout)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// True when the service reported the reserved invalid-token code.
    ///
    /// By the time callers see this error the stale session has already been
    /// dropped, so the right reaction is a fresh login.
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, AppError::Api { code, .. } if *code == INVALID_TOKEN_CODE)
    }

    /// True for failures raised before any network traffic happens
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::MalformedPath(_)
                | AppError::InvalidArgument(_)
                | AppError::SessionConflict
                | AppError::NoActiveSession
                | AppError::UnsupportedMethod(_)
        )
    }
}
