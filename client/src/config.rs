//! Client configuration resolved at build time.
//!
//! The REST base URL is baked into the WASM bundle from
//! `STOCKROOM_API_BASE`; the browser has no process environment to read.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `STOCKROOM_API_BASE` was not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Settings shared by every component that talks to the REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl ClientConfig {
    /// Build from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("STOCKROOM_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Build from an explicit base URL. Blank input falls back to
    /// [`DEFAULT_API_BASE`]; trailing slashes are dropped.
    pub fn with_api_base(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { api_base: api_base.to_owned() }
    }

    /// Absolute URL for an endpoint path such as `/products`.
    pub fn url(&self, path: &str) -> String {
        catalog::endpoint_url(&self.api_base, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
