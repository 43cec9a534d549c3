//! Client configuration.
//!
//! Defaults point at the production API. A TOML file and environment
//! variables can override any field.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::error::{ContentError, Result};

pub const DEFAULT_API_URL: &str = "https://gmk-web-api.chronopulse.com/api";
pub const DEFAULT_BACKEND_ORIGIN: &str = "https://gmk-web-api.chronopulse.com";

const API_URL_ENV: &str = "GYMKHANA_API_URL";
const BACKEND_ORIGIN_ENV: &str = "GYMKHANA_BACKEND_ORIGIN";

/// Where the content API lives and how much to ask it for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base URL every resource path is appended to.
    pub api_url: String,
    /// Scheme and host used to resolve relative image URLs.
    pub backend_origin: String,
    /// `limit` sent to `/news/latest` when the caller does not pick one.
    pub news_limit: u32,
    /// `limit` sent to `/events` when the caller does not pick one.
    pub events_limit: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_string(),
            news_limit: 5,
            events_limit: 5,
        }
    }
}

impl ContentConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(s).map_err(|e| ContentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// Falls back to defaults if the file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| ContentError::Config(format!("{}: {e}", path.display())))
            .and_then(|s| Self::from_toml_str(&s));
        match loaded {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default content configuration");
                Self::default()
            }
        }
    }

    /// Defaults with `GYMKHANA_API_URL` / `GYMKHANA_BACKEND_ORIGIN` applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            config.api_url = api_url;
        }
        if let Ok(origin) = std::env::var(BACKEND_ORIGIN_ENV) {
            config.backend_origin = origin;
        }
        config.validate()?;
        Ok(config)
    }

    /// Both URLs must be absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("api_url", &self.api_url),
            ("backend_origin", &self.backend_origin),
        ] {
            let parsed = Url::parse(value)
                .map_err(|e| ContentError::Config(format!("{name} {value:?}: {e}")))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ContentError::Config(format!(
                    "{name} must use http or https, got {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Full URL for a resource path such as `/slider`.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url.trim_end_matches('/'))
    }

    /// Origin without a trailing slash.
    pub(crate) fn origin(&self) -> &str {
        self.backend_origin.trim_end_matches('/')
    }
}
