//! Client configuration resolved at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::CURRENT_IDENTITY_PATH;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every backend path. Empty means same origin, through the
    /// host proxy.
    pub api_base: String,
}

impl ClientConfig {
    /// Read the optional `ADMINBOARD_API_BASE` baked in at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("ADMINBOARD_API_BASE"))
    }

    #[must_use]
    pub fn from_raw(api_base: Option<&str>) -> Self {
        let api_base = api_base.unwrap_or_default().trim().trim_end_matches('/').to_owned();
        Self { api_base }
    }

    /// Absolute URL of the session lookup endpoint.
    #[must_use]
    pub fn session_url(&self) -> String {
        format!("{}{CURRENT_IDENTITY_PATH}", self.api_base)
    }
}
