/// Default base URL for the Strutta REST API
pub const DEFAULT_BASE_URL: &str = "http://api.strutta.com";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Strutta API
pub const USER_AGENT: &str = "Rust-Strutta-Client/0.2.1";
/// Error code the service reports when the auth token is invalid or expired.
///
/// A response carrying this code drops the client's session before the error
/// is surfaced, so callers can treat it as "please re-login".
pub const INVALID_TOKEN_CODE: i32 = 104;
/// Separator between section and method in string call paths
pub const PATH_SEPARATOR: char = '/';
