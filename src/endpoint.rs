//! Endpoint addressing for the Strutta API.
//!
//! Every remote operation is identified by a `section/method` pair, e.g.
//! `user/login` or `games/show`. Call sites may pass the pair as a tuple or
//! as a single slash-separated string; both resolve to the same [`Endpoint`].

use crate::constants::PATH_SEPARATOR;
use crate::error::AppError;
use std::fmt;

/// A resolved API endpoint address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// API section, the first path component
    pub section: String,
    /// Method inside the section, the second path component
    pub method: String,
}

impl Endpoint {
    /// Creates an endpoint from an already-split section and method
    pub fn new(section: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            method: method.into(),
        }
    }

    /// Relative URL path for this endpoint, without leading slash
    pub fn path(&self) -> String {
        format!("{}{}{}", self.section, PATH_SEPARATOR, self.method)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.section, PATH_SEPARATOR, self.method)
    }
}

/// Conversion into an [`Endpoint`], accepted by every call operation
pub trait IntoEndpoint {
    /// Resolves the value into a section/method pair.
    ///
    /// String forms are trimmed of surrounding slashes and must contain
    /// exactly one separator; any other shape fails with
    /// [`AppError::MalformedPath`].
    fn into_endpoint(self) -> Result<Endpoint, AppError>;
}

impl IntoEndpoint for Endpoint {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        Ok(self)
    }
}

impl IntoEndpoint for (&str, &str) {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        Ok(Endpoint::new(self.0, self.1))
    }
}

impl IntoEndpoint for (String, String) {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        Ok(Endpoint::new(self.0, self.1))
    }
}

impl IntoEndpoint for &str {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        let trimmed = self.trim_matches(PATH_SEPARATOR);
        let mut parts = trimmed.split(PATH_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(section), Some(method), None) => Ok(Endpoint::new(section, method)),
            _ => Err(AppError::MalformedPath(self.to_string())),
        }
    }
}

impl IntoEndpoint for &String {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        self.as_str().into_endpoint()
    }
}

impl IntoEndpoint for String {
    fn into_endpoint(self) -> Result<Endpoint, AppError> {
        self.as_str().into_endpoint()
    }
}
