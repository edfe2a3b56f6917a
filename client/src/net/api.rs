//! REST client for the LiftGrid API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: `ProfileApi` is a trait so a fake can be
//! injected; the HTTP client itself reports `Unavailable` off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ApiError` instead of panics so profile fetch
//! failures degrade to placeholder rendering without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use thiserror::Error;

use super::types::AuthenticatedEntity;
use crate::config::ApiConfig;
use crate::state::role::Role;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("http client not available outside the browser")]
    Unavailable,
}

/// Read access to full entity records.
#[async_trait(?Send)]
pub trait ProfileApi: Send + Sync {
    /// Fetch the full record for `id` in the role's collection.
    async fn fetch_entity(&self, role: Role, id: &str, token: Option<&str>) -> Result<AuthenticatedEntity, ApiError>;
}

fn entity_endpoint(base_url: &str, role: Role, id: &str) -> String {
    format!("{base_url}/{}/{id}", role.collection())
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `ProfileApi` backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpProfileApi {
    config: ApiConfig,
}

impl HttpProfileApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ProfileApi for HttpProfileApi {
    async fn fetch_entity(&self, role: Role, id: &str, token: Option<&str>) -> Result<AuthenticatedEntity, ApiError> {
        let url = entity_endpoint(&self.config.base_url, role, id);
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&url);
            if let Some(token) = token {
                request = request.header("Authorization", &bearer(token));
            }
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<AuthenticatedEntity>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, token.map(bearer));
            Err(ApiError::Unavailable)
        }
    }
}
