//! Standalone host for running nodes outside a workflow engine.
//!
//! Node-level parameters come from a fixed map. An input item that is a JSON
//! object overrides any parameter by carrying a non-null field with the same
//! name.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::client::{HttpRequest, HttpTransport};
use crate::error::{ClientResult, CredentialsError, DispatchResult};
use crate::models::{Credentials, OutputRecord};
use crate::nodes::{ExecutableNode, NodeHost};

/// In-process [`NodeHost`] backed by static parameters and a shared transport.
pub struct StaticHost {
    items: Vec<Value>,
    parameters: Map<String, Value>,
    credentials: Option<(String, Credentials)>,
    transport: Arc<dyn HttpTransport>,
    continue_on_fail: bool,
}

impl StaticHost {
    /// Create a host for `items` that sends requests through `transport`.
    #[must_use]
    pub fn new(items: Vec<Value>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            items,
            parameters: Map::new(),
            credentials: None,
            transport,
            continue_on_fail: false,
        }
    }

    /// Set a node-level parameter.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Register credentials under a credential type name.
    #[must_use]
    pub fn with_credentials(mut self, name: impl Into<String>, credentials: Credentials) -> Self {
        self.credentials = Some((name.into(), credentials));
        self
    }

    /// Turn failed items into error rows instead of aborting.
    #[must_use]
    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }

    /// Input items.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Run `node` over this host's items.
    ///
    /// # Errors
    ///
    /// Propagates the node's batch error.
    pub async fn run(&self, node: &dyn ExecutableNode) -> DispatchResult<Vec<OutputRecord>> {
        node.execute(self, &self.items).await
    }
}

#[async_trait]
impl HttpTransport for StaticHost {
    async fn request(&self, request: HttpRequest) -> ClientResult<Value> {
        self.transport.request(request).await
    }
}

#[async_trait]
impl NodeHost for StaticHost {
    fn node_parameter(&self, name: &str, item_index: usize) -> Option<Value> {
        self.items
            .get(item_index)
            .and_then(Value::as_object)
            .and_then(|item| item.get(name))
            .filter(|value| !value.is_null())
            .or_else(|| self.parameters.get(name))
            .cloned()
    }

    async fn credentials(&self, name: &str) -> Result<Credentials, CredentialsError> {
        match &self.credentials {
            Some((registered, credentials)) if registered == name => Ok(credentials.clone()),
            _ => Err(CredentialsError::Missing(name.to_string())),
        }
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }
}

impl std::fmt::Debug for StaticHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticHost")
            .field("items", &self.items.len())
            .field("parameters", &self.parameters.keys().collect::<Vec<_>>())
            .field("continue_on_fail", &self.continue_on_fail)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ClientError;

    struct Offline;

    #[async_trait]
    impl HttpTransport for Offline {
        async fn request(&self, _request: HttpRequest) -> ClientResult<Value> {
            Err(ClientError::server(503, "offline"))
        }
    }

    fn host(items: Vec<Value>) -> StaticHost {
        StaticHost::new(items, Arc::new(Offline))
    }

    #[test]
    fn test_item_fields_override_parameters() {
        let host = host(vec![json!({"query": "from item"}), json!({}), json!("scalar")])
            .with_parameter("query", "from node")
            .with_parameter("limit", 3);

        assert_eq!(host.node_parameter("query", 0), Some(json!("from item")));
        assert_eq!(host.node_parameter("query", 1), Some(json!("from node")));
        assert_eq!(host.node_parameter("query", 2), Some(json!("from node")));
        assert_eq!(host.node_parameter("limit", 0), Some(json!(3)));
        assert_eq!(host.node_parameter("minYear", 0), None);
    }

    #[test]
    fn test_null_item_field_falls_back_to_parameter() {
        let host = host(vec![json!({"query": null, "minYear": null})])
            .with_parameter("query", "from node");

        assert_eq!(host.node_parameter("query", 0), Some(json!("from node")));
        assert_eq!(host.node_parameter("minYear", 0), None);
    }

    #[tokio::test]
    async fn test_credentials_lookup() {
        let host = host(vec![]).with_credentials("respApi", Credentials::new("http://x"));

        assert_eq!(host.credentials("respApi").await.unwrap().base_url, "http://x");
        assert_eq!(
            host.credentials("other").await.unwrap_err(),
            CredentialsError::Missing("other".to_string())
        );
    }

    #[test]
    fn test_continue_on_fail_default_off() {
        assert!(!host(vec![]).continue_on_fail());
        assert!(host(vec![]).with_continue_on_fail(true).continue_on_fail());
    }
}
