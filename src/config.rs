use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the Strutta API
pub struct Credentials {
    /// API key identifying the integration
    pub api_key: String,
    /// API secret; never transmitted in full, only hashed into request signatures
    pub api_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the Strutta REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Strutta API client
///
/// Key and secret must be set before signed calls can succeed; an empty pair
/// still produces a signature, the service just rejects it remotely.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables
    ///
    /// Loads `.env` first, then reads `STRUTTA_API_KEY`, `STRUTTA_API_SECRET`,
    /// `STRUTTA_REST_BASE_URL` and `STRUTTA_REST_TIMEOUT`, falling back to
    /// defaults for the latter two.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("STRUTTA_API_KEY", String::new());
        let api_secret = get_env_or_default("STRUTTA_API_SECRET", String::new());

        if api_key.is_empty() {
            error!("STRUTTA_API_KEY not found in environment variables or .env file");
        }
        if api_secret.is_empty() {
            error!("STRUTTA_API_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                api_key,
                api_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "STRUTTA_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("STRUTTA_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with explicit credentials and default API settings
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
                api_secret: api_secret.into(),
            },
            rest_api: RestApiConfig {
                base_url: String::from(DEFAULT_BASE_URL),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    /// Replaces the API key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.credentials.api_key = api_key.into();
    }

    /// Replaces the API secret
    pub fn set_api_secret(&mut self, api_secret: impl Into<String>) {
        self.credentials.api_secret = api_secret.into();
    }

    /// Replaces the base URL of the REST API
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.rest_api.base_url = base_url.into();
    }

    /// Replaces the per-request timeout, in seconds
    pub fn set_timeout(&mut self, timeout: u64) {
        self.rest_api.timeout = timeout;
    }
}
