//! Backend response shapes.

use serde_json::Value;

/// A backend answer: one record or a list of records.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    /// Backend returned a single JSON value.
    Single(Value),
    /// Backend returned a JSON array.
    Many(Vec<Value>),
}

impl SearchResponse {
    /// Classify a decoded body. Arrays become [`Self::Many`], anything else [`Self::Single`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(records) => Self::Many(records),
            other => Self::Single(other),
        }
    }

    /// Number of records this response yields.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// True for an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records in backend order.
    #[must_use]
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}

impl From<Value> for SearchResponse {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
