//! Gateway runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into the gateway. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::constants::{ANALYZE_PATH, API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
use crate::{AnalysisError, PgxResult};

/// Analysis service configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    /// Create a new `GatewayConfig` for the given service base URL.
    ///
    /// The URL is trimmed and any trailing slashes are stripped so endpoint
    /// paths can be joined unambiguously.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidBaseUrl` if the URL is empty or
    /// whitespace-only.
    pub fn new(base_url: impl Into<String>) -> PgxResult<Self> {
        let mut base_url = base_url.into().trim().to_owned();
        if base_url.is_empty() {
            return Err(AnalysisError::InvalidBaseUrl(
                "base URL cannot be empty".into(),
            ));
        }
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url })
    }

    /// Resolve configuration from the environment.
    ///
    /// Honours `PGX_API_BASE_URL` when set; otherwise falls back to the
    /// default local service address.
    pub fn from_env() -> PgxResult<Self> {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(value) => Self::new(value),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the analyze endpoint.
    pub fn analyze_url(&self) -> String {
        format!("{}{}", self.base_url, ANALYZE_PATH)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_owned(),
        }
    }
}
