//! Fuzzing library for resp-search.
//!
//! This crate provides fuzzing targets for backend response classification
//! and node parameter extraction.
//!
//! # Usage
//!
//! ```bash
//! cd crates/resp-search-fuzz
//! cargo +nightly fuzz run fuzz_response_parse -- -max_total_time=60
//! ```

pub use resp_search::{models, params};
