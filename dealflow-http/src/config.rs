use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "DEALFLOW_API_URL";

/// Base URL used when nothing is configured (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Base URL of the hosted deployment.
pub const PRODUCTION_BASE_URL: &str = "https://ipo-tracker.vercel.app";

/// Where and how the HTTP source reaches the record endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSourceConfig {
    /// Scheme, host and optional port the endpoint paths are resolved against.
    pub base_url: String,
    /// Path of the IPO calendar endpoint.
    pub ipo_path: String,
    /// Path of the angel-investments endpoint.
    pub angel_path: String,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Client-side timeout for a single request, if any.
    pub timeout: Option<Duration>,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ipo_path: "/api/ipo-calendar".to_string(),
            angel_path: "/api/angel-investments".to_string(),
            user_agent: concat!("dealflow-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl HttpSourceConfig {
    /// Defaults with `base_url` taken from `DEALFLOW_API_URL` when set and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            cfg.base_url = url.trim().to_string();
        }
        cfg
    }

    /// Defaults pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
