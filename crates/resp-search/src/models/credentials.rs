//! Backend credentials (`respApi`).

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::api;
use crate::error::CredentialsError;

/// Connection details for the search backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Backend base URL (e.g. `http://localhost:5000`).
    #[serde(default)]
    pub base_url: String,
}

impl Credentials {
    /// Create credentials for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Full search endpoint URL.
    ///
    /// A trailing `/` on the base URL is dropped before the path is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::InvalidBaseUrl`] for an empty, relative or
    /// non-http(s) base URL.
    pub fn search_url(&self) -> Result<String, CredentialsError> {
        let trimmed = self.base_url.trim();
        let invalid = |reason: &str| CredentialsError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("base URL is empty"));
        }

        let parsed = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }

        Ok(format!("{}{}", trimmed.trim_end_matches('/'), api::SEARCH_PATH))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Base URLs may embed userinfo; only the host is shown.
        let host = Url::parse(self.base_url.trim())
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        f.debug_struct("Credentials").field("host", &host).finish()
    }
}
