//! Configuration for the Resp Search node.

use std::time::Duration;

/// Backend API constants.
pub mod api {
    /// Path of the search endpoint, appended to the credential base URL.
    pub const SEARCH_PATH: &str = "/search";

    /// Placeholder base URL shown in the credential form.
    pub const BASE_URL_PLACEHOLDER: &str = "http://localhost:5000";

    /// Environment variable holding the backend base URL.
    pub const BASE_URL_ENV: &str = "RESP_BASE_URL";

    /// Environment variable holding an optional request timeout in seconds.
    pub const REQUEST_TIMEOUT_ENV: &str = "RESP_REQUEST_TIMEOUT_SECS";

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!("resp-search/", env!("CARGO_PKG_VERSION"));
}

/// Node parameter names and defaults.
pub mod params {
    /// Search query.
    pub const QUERY: &str = "query";
    /// Backend source selector.
    pub const SOURCE: &str = "source";
    /// Maximum results per source.
    pub const LIMIT: &str = "limit";
    /// Lower publication year bound.
    pub const MIN_YEAR: &str = "minYear";
    /// Upper publication year bound.
    pub const MAX_YEAR: &str = "maxYear";

    /// Default result limit.
    pub const DEFAULT_LIMIT: i64 = 5;
    /// Smallest accepted result limit.
    pub const MIN_LIMIT: i64 = 1;

    /// Credential type the node requires.
    pub const CREDENTIAL_NAME: &str = "respApi";
}

/// Runtime configuration for the HTTP client.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Backend base URL used by the standalone host (optional).
    pub base_url: Option<String>,

    /// Overall request timeout. `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url, request_timeout: None }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self { base_url: Some(base_url.to_string()), request_timeout: Some(Duration::from_secs(5)) }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var(api::BASE_URL_ENV).ok().filter(|v| !v.trim().is_empty());
        let raw_timeout = std::env::var(api::REQUEST_TIMEOUT_ENV).ok();

        Ok(Self {
            base_url,
            request_timeout: Self::resolve_request_timeout(None, raw_timeout.as_deref())?,
        })
    }

    /// Pick the request timeout: explicit seconds win, otherwise the raw
    /// environment value is parsed. The environment value is not inspected
    /// when `explicit_secs` is set.
    ///
    /// # Errors
    ///
    /// Returns error if the environment value is consulted and is not a whole
    /// number of seconds.
    pub fn resolve_request_timeout(
        explicit_secs: Option<u64>,
        raw_env: Option<&str>,
    ) -> anyhow::Result<Option<Duration>> {
        if let Some(secs) = explicit_secs {
            return Ok(Some(Duration::from_secs(secs)));
        }
        let Some(raw) = raw_env else {
            return Ok(None);
        };
        let secs: u64 = raw.trim().parse().map_err(|e| {
            anyhow::anyhow!("{} must be a whole number of seconds: {e}", api::REQUEST_TIMEOUT_ENV)
        })?;
        Ok(Some(Duration::from_secs(secs)))
    }

    /// Check if a base URL is configured.
    #[must_use]
    pub const fn has_base_url(&self) -> bool {
        self.base_url.is_some()
    }
}
