//! Workflow node implementations.
//!
//! Each node:
//! 1. Resolves parameters and credentials through the host, per item
//! 2. Calls the backend through the host's transport
//! 3. Returns output records paired with their input items

mod search;

pub use search::SearchNode;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::HttpTransport;
use crate::error::{CredentialsError, DispatchResult};
use crate::models::{Credentials, OutputRecord};

/// Capabilities a workflow host lends to a node.
///
/// The transport capability comes from the [`HttpTransport`] supertrait.
#[async_trait]
pub trait NodeHost: HttpTransport {
    /// Resolved value of a node parameter for one item, or `None` if unset.
    fn node_parameter(&self, name: &str, item_index: usize) -> Option<Value>;

    /// Credentials of the given type.
    async fn credentials(&self, name: &str) -> Result<Credentials, CredentialsError>;

    /// Whether failed items become error rows instead of aborting the batch.
    fn continue_on_fail(&self) -> bool;
}

/// Trait for workflow nodes.
#[async_trait]
pub trait ExecutableNode: Send + Sync {
    /// Internal node name (e.g., "respSearch").
    fn name(&self) -> &'static str;

    /// Name shown in the editor.
    fn display_name(&self) -> &'static str;

    /// One-line description.
    fn description(&self) -> &'static str;

    /// JSON Schema for the node parameters.
    fn parameter_schema(&self) -> Value;

    /// JSON Schema for the credential this node requires.
    fn credential_schema(&self) -> Value;

    /// Run the node over a batch of input items.
    async fn execute(
        &self,
        host: &dyn NodeHost,
        items: &[Value],
    ) -> DispatchResult<Vec<OutputRecord>>;
}

/// Register all nodes.
#[must_use]
pub fn register_all_nodes() -> Vec<Box<dyn ExecutableNode>> {
    vec![Box::new(SearchNode)]
}

/// Find a registered node by name.
#[must_use]
pub fn find_node(name: &str) -> Option<Box<dyn ExecutableNode>> {
    register_all_nodes().into_iter().find(|node| node.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let nodes = register_all_nodes();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name(), "respSearch");
        assert!(find_node("respSearch").is_some());
        assert!(find_node("httpRequest").is_none());
    }
}
