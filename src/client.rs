//! Client for the Strutta XML REST API
//!
//! This module provides the client that handles:
//! - Request signing (`apikey` / `authsecret` injection)
//! - Session token injection and invalidation
//! - Parameter placement by HTTP verb (URL path segments for GET, form body
//!   for POST/PUT)
//! - XML response parsing and API error mapping
//!
//! # Example
//! ```ignore
//! use strutta_client::prelude::*;
//!
//! let client = Client::new(Config::with_credentials("key", "secret"));
//!
//! let session = client.login("alice", "wonderland").await?;
//! let games = client.get("games/list", Params::new()).await?;
//! client.logout().await?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as HttpClient, Method};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{INVALID_TOKEN_CODE, USER_AGENT};
use crate::endpoint::{Endpoint, IntoEndpoint};
use crate::error::AppError;
use crate::session::interface::{Authenticator, Session};
use crate::session::response::session_from_login;
use crate::signing;
use crate::xml::{self, Element};

/// Parameter map attached to a call
///
/// Keys are sorted, so URLs and bodies come out in a reproducible order.
pub type Params = BTreeMap<String, String>;

/// Client for the Strutta XML REST API
///
/// Owns the configuration, the HTTP client and at most one user session.
/// Construction does no network traffic; the first signed call does.
pub struct Client {
    config: Arc<Config>,
    http_client: HttpClient,
    session: Arc<RwLock<Option<Session>>>,
}

impl Client {
    /// Creates a new client from the given configuration
    pub fn new(config: Config) -> Self {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("reqwest client");

        Self {
            config: Arc::new(config),
            http_client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Makes a GET request
    ///
    /// Every parameter, including the injected auth ones, travels as
    /// `/name/value` URL path segments; there is no request body.
    pub async fn get(&self, path: impl IntoEndpoint, params: Params) -> Result<Element, AppError> {
        self.call(path, params, Method::GET).await
    }

    /// Makes a POST request with the parameters form-encoded into the body
    pub async fn post(&self, path: impl IntoEndpoint, params: Params) -> Result<Element, AppError> {
        self.call(path, params, Method::POST).await
    }

    /// Makes a PUT request with the parameters form-encoded into the body
    pub async fn put(&self, path: impl IntoEndpoint, params: Params) -> Result<Element, AppError> {
        self.call(path, params, Method::PUT).await
    }

    /// Generic call operation behind the verb wrappers
    ///
    /// Resolves the path, signs the request, dispatches it and interprets the
    /// response. Verbs other than GET/POST/PUT fail with
    /// [`AppError::UnsupportedMethod`].
    ///
    /// # Returns
    /// * `Ok(Element)` - Parsed response document
    /// * `Err(AppError)` - Any failure from resolution to interpretation
    pub async fn call(
        &self,
        path: impl IntoEndpoint,
        params: Params,
        method: Method,
    ) -> Result<Element, AppError> {
        let endpoint = path.into_endpoint()?;
        let mut params = params;
        self.inject_auth(&endpoint, &mut params).await;
        let body = self.dispatch(&endpoint, &params, method).await?;
        self.interpret(&body).await
    }

    /// Injects `apikey` and `authsecret`, plus `authtoken` while a session is
    /// held (explicit caller-supplied tokens win)
    async fn inject_auth(&self, endpoint: &Endpoint, params: &mut Params) {
        let key = &self.config.credentials.api_key;
        let secret = &self.config.credentials.api_secret;

        params.insert("apikey".to_string(), key.clone());
        params.insert(
            "authsecret".to_string(),
            signing::auth_secret(&endpoint.section, &endpoint.method, key, secret),
        );

        if let Some(session) = self.session.read().await.as_ref() {
            params
                .entry("authtoken".to_string())
                .or_insert_with(|| session.auth_token.clone());
        }
    }

    /// Builds the HTTP request for the verb, performs it and returns the raw
    /// body of a non-error response
    async fn dispatch(
        &self,
        endpoint: &Endpoint,
        params: &Params,
        method: Method,
    ) -> Result<String, AppError> {
        let base = self.config.rest_api.base_url.trim_end_matches('/');

        let request = match method {
            Method::GET => {
                let mut url = format!("{}/{}", base, endpoint.path());
                for (name, value) in params {
                    url.push('/');
                    url.push_str(name);
                    url.push('/');
                    url.push_str(&urlencoding::encode(value));
                }
                debug!("GET {}", url);
                self.http_client.get(url)
            }
            Method::POST | Method::PUT => {
                let url = format!("{}/{}", base, endpoint.path());
                debug!("{} {}", method, url);
                self.http_client.request(method, url).form(params)
            }
            other => return Err(AppError::UnsupportedMethod(other.to_string())),
        };

        let response = request.send().await?;
        let status = response.status();
        debug!("response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            let reason = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
            return Err(AppError::Transport { status, reason });
        }

        Ok(response.text().await?)
    }

    /// Parses the body and maps service-reported errors
    ///
    /// The invalid-token code drops the held session before the error is
    /// returned, so a stale token is never retried silently.
    async fn interpret(&self, body: &str) -> Result<Element, AppError> {
        let doc = xml::parse_document(body)?;

        if let Some(code_text) = doc.child_text("errorcode") {
            let code = code_text.parse::<i32>().map_err(|_| {
                AppError::Decode(format!("non-numeric errorcode: {code_text}"))
            })?;
            let message = doc.child_text("errormessage").unwrap_or_default().to_string();

            if code == INVALID_TOKEN_CODE {
                warn!("auth token rejected by the service, dropping session");
                *self.session.write().await = None;
            }

            return Err(AppError::Api { code, message });
        }

        Ok(doc)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[async_trait::async_trait]
impl Authenticator for Client {
    async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::InvalidArgument(
                "username and password must not be empty".to_string(),
            ));
        }
        if self.session.read().await.is_some() {
            return Err(AppError::SessionConflict);
        }

        let mut params = Params::new();
        params.insert("username".to_string(), username.to_string());
        params.insert("password".to_string(), signing::password_hash(password));

        let doc = self.call(("user", "login"), params, Method::POST).await?;
        let session = session_from_login(&doc)?;
        debug!("logged in as {} (user id {})", session.username, session.user_id);

        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn logout(&self) -> Result<(), AppError> {
        // Take the session first: local logout must succeed no matter what
        // the service answers.
        let Some(session) = self.session.write().await.take() else {
            return Err(AppError::NoActiveSession);
        };

        let mut params = Params::new();
        params.insert("authtoken".to_string(), session.auth_token);

        match self.call(("user", "logout"), params, Method::POST).await {
            Ok(_) => debug!("logout acknowledged by the service"),
            Err(e) => warn!("remote logout failed ({e}), session already cleared locally"),
        }
        Ok(())
    }

    async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn set_session(&self, session: Session) -> Result<(), AppError> {
        session.validate()?;
        *self.session.write().await = Some(session);
        Ok(())
    }

    async fn clear_session(&self) {
        *self.session.write().await = None;
    }
}
