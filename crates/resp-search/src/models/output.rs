//! Output records in the host's execution-data shape.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Link from an output record back to the input item that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    /// Index of the source input item.
    pub item: usize,
}

/// One output row.
///
/// Serializes as `{"json": <payload>, "pairedItem": {"item": <index>}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Backend record, or `{"error": <message>}` for a failed item.
    #[serde(rename = "json")]
    pub payload: Value,

    /// Pairing metadata.
    pub paired_item: PairedItem,
}

impl OutputRecord {
    /// Wrap a backend record.
    #[must_use]
    pub const fn new(payload: Value, item_index: usize) -> Self {
        Self { payload, paired_item: PairedItem { item: item_index } }
    }

    /// Error row for a failed item.
    #[must_use]
    pub fn error(message: impl Into<String>, item_index: usize) -> Self {
        Self::new(json!({ "error": message.into() }), item_index)
    }

    /// Index of the input item this record came from.
    #[must_use]
    pub const fn source_item_index(&self) -> usize {
        self.paired_item.item
    }

    /// Error message if this is an error row.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        let obj = self.payload.as_object()?;
        if obj.len() != 1 {
            return None;
        }
        obj.get("error").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let record = OutputRecord::new(json!({"title": "Paper"}), 2);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"json": {"title": "Paper"}, "pairedItem": {"item": 2}}));
    }

    #[test]
    fn test_error_record() {
        let record = OutputRecord::error("boom", 4);
        assert_eq!(record.payload, json!({"error": "boom"}));
        assert_eq!(record.source_item_index(), 4);
        assert_eq!(record.error_message(), Some("boom"));
    }

    #[test]
    fn test_backend_record_with_error_field_is_not_error_row() {
        let record = OutputRecord::new(json!({"error": "x", "title": "y"}), 0);
        assert_eq!(record.error_message(), None);
    }
}
