//! Resp Search
//!
//! A workflow node that searches academic papers through a Resp backend.
//! Each input item becomes one `POST {baseUrl}/search`; the answers are
//! flattened into output records paired with the item that produced them.
//!
//! # Features
//!
//! - **Concurrent**: all items are searched at once, output stays in input order
//! - **Isolated failures**: a failing item becomes an error row or aborts the
//!   batch with its index, depending on `continue_on_fail`
//! - **Host-agnostic**: the node only needs the [`nodes::NodeHost`] capabilities
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use resp_search::{Config, Credentials, RespClient, SearchNode, StaticHost};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RespClient::new(&Config::default())?;
//!     let host = StaticHost::new(vec![serde_json::json!({})], Arc::new(client))
//!         .with_parameter("query", "retrieval augmented generation")
//!         .with_credentials("respApi", Credentials::new("http://localhost:5000"));
//!
//!     let records = host.run(&SearchNode).await?;
//!     println!("{}", serde_json::to_string_pretty(&records)?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod models;
pub mod nodes;
pub mod params;

pub use client::{HttpRequest, HttpTransport, RespClient};
pub use config::Config;
pub use dispatch::dispatch;
pub use error::{ClientError, DispatchError, ItemError, ValidationError};
pub use host::StaticHost;
pub use models::{Credentials, OutputRecord, SearchRequest, SearchResponse, Source};
pub use nodes::{ExecutableNode, NodeHost, SearchNode};
