//! Request body for the backend search endpoint.

use serde::Serialize;

use super::Source;
use crate::config::params;
use crate::error::ValidationError;

/// Body of `POST {baseUrl}/search`.
///
/// Year bounds are skipped when absent so the backend never sees `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Search query.
    pub query: String,

    /// Source to search.
    pub source: Source,

    /// Maximum results to return.
    pub limit: u32,

    /// Minimum publication year (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_year: Option<i32>,

    /// Maximum publication year (inclusive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_year: Option<i32>,
}

impl SearchRequest {
    /// Create a request with no year bounds.
    #[must_use]
    pub fn new(query: impl Into<String>, source: Source, limit: u32) -> Self {
        Self { query: query.into(), source, limit, min_year: None, max_year: None }
    }

    /// Set the year bounds.
    #[must_use]
    pub fn with_years(mut self, min_year: Option<i32>, max_year: Option<i32>) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Check the invariants the backend relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::YearRange`] when `min_year > max_year` and
    /// [`ValidationError::LimitOutOfRange`] for a zero limit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(min_year), Some(max_year)) = (self.min_year, self.max_year) {
            if min_year > max_year {
                return Err(ValidationError::YearRange { min_year, max_year });
            }
        }
        if i64::from(self.limit) < params::MIN_LIMIT {
            return Err(ValidationError::LimitOutOfRange(i64::from(self.limit)));
        }
        Ok(())
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        let limit = u32::try_from(params::DEFAULT_LIMIT).unwrap_or(5);
        Self::new(String::new(), Source::default(), limit)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_absent_years_are_omitted() {
        let body = serde_json::to_value(SearchRequest::new("llm", Source::Arxiv, 5)).unwrap();
        assert_eq!(body, json!({"query": "llm", "source": "arxiv", "limit": 5}));
        assert!(body.get("min_year").is_none());
        assert!(body.get("max_year").is_none());
    }

    #[test]
    fn test_present_years_are_sent() {
        let body = serde_json::to_value(
            SearchRequest::new("llm", Source::All, 10).with_years(Some(2015), None),
        )
        .unwrap();
        assert_eq!(body["min_year"], 2015);
        assert!(body.get("max_year").is_none());
    }

    #[test]
    fn test_validate_year_range() {
        let req = SearchRequest::default().with_years(Some(2020), Some(2010));
        assert_eq!(
            req.validate(),
            Err(ValidationError::YearRange { min_year: 2020, max_year: 2010 })
        );

        let req = SearchRequest::default().with_years(Some(2010), Some(2010));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_limit() {
        let req = SearchRequest::new("q", Source::All, 0);
        assert_eq!(req.validate(), Err(ValidationError::LimitOutOfRange(0)));
    }

    #[test]
    fn test_default_request() {
        let req = SearchRequest::default();
        assert_eq!(req.query, "");
        assert_eq!(req.source, Source::All);
        assert_eq!(req.limit, 5);
    }
}
