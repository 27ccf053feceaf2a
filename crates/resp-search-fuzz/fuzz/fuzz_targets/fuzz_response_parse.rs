#![no_main]

use libfuzzer_sys::fuzz_target;
use resp_search::models::SearchResponse;

fuzz_target!(|data: &[u8]| {
    // Classification must never panic and must agree with the record count
    if let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) {
        let response = SearchResponse::from_value(body);
        let len = response.len();
        assert_eq!(response.into_records().len(), len);
    }
});
