//! Data models for the Resp Search node.
//!
//! Request and credential models use serde; backend records stay as raw
//! `serde_json::Value` because their shape belongs to the backend.

mod credentials;
mod enums;
mod output;
mod request;
mod response;

pub use credentials::Credentials;
pub use enums::{Source, UnknownSource};
pub use output::{OutputRecord, PairedItem};
pub use request::SearchRequest;
pub use response::SearchResponse;
