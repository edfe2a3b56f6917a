//! Client-side API configuration.
//!
//! The API base URL is fixed at build time through `LIFTGRID_API_URL` so the
//! same bundle can be pointed at a local or deployed backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Base URL for the LiftGrid REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build from the compile-time `LIFTGRID_API_URL`, falling back to `/api`.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LIFTGRID_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: base.trim_end_matches('/').to_owned() }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
