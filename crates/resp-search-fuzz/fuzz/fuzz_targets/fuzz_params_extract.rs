#![no_main]

use libfuzzer_sys::fuzz_target;
use resp_search::params::extract_search_request;

fuzz_target!(|data: &[u8]| {
    // Any JSON object is a possible set of resolved parameters
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(request) = extract_search_request(|name| map.get(name).cloned()) {
            assert!(request.validate().is_ok());
            let body = serde_json::to_value(&request).unwrap();
            assert!(!body.get("min_year").is_some_and(serde_json::Value::is_null));
        }
    }
});
