//! Resp Search node: search papers through a Resp backend.

use serde_json::{Value, json};

use super::{ExecutableNode, NodeHost};
use crate::config::{api, params};
use crate::dispatch::{run_batch, search_item};
use crate::error::{DispatchResult, ItemResult};
use crate::models::{OutputRecord, Source};
use crate::params::extract_search_request;

/// Paper search node.
pub struct SearchNode;

#[async_trait::async_trait]
impl ExecutableNode for SearchNode {
    fn name(&self) -> &'static str {
        "respSearch"
    }

    fn display_name(&self) -> &'static str {
        "Resp Search"
    }

    fn description(&self) -> &'static str {
        "Search for papers using the Resp backend"
    }

    fn parameter_schema(&self) -> Value {
        let options: Vec<Value> = Source::ALL
            .iter()
            .map(|s| json!({"name": s.display_name(), "value": s.as_str()}))
            .collect();
        let values: Vec<&str> = Source::ALL.iter().map(|s| s.as_str()).collect();

        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "default": "",
                    "description": "The search query"
                },
                "source": {
                    "type": "string",
                    "enum": values,
                    "options": options,
                    "default": Source::default().as_str(),
                    "description": "The source to search from"
                },
                "limit": {
                    "type": "integer",
                    "minimum": params::MIN_LIMIT,
                    "default": params::DEFAULT_LIMIT,
                    "description": "Max number of results"
                },
                "minYear": {
                    "type": "integer",
                    "description": "Minimum year filter"
                },
                "maxYear": {
                    "type": "integer",
                    "description": "Maximum year filter"
                }
            },
            "required": ["query"]
        })
    }

    fn credential_schema(&self) -> Value {
        json!({
            "name": params::CREDENTIAL_NAME,
            "displayName": "Resp API",
            "type": "object",
            "properties": {
                "baseUrl": {
                    "type": "string",
                    "default": "",
                    "placeholder": api::BASE_URL_PLACEHOLDER,
                    "description": "The URL of the Resp Search Backend"
                }
            },
            "required": ["baseUrl"]
        })
    }

    async fn execute(
        &self,
        host: &dyn NodeHost,
        items: &[Value],
    ) -> DispatchResult<Vec<OutputRecord>> {
        run_batch(items, host.continue_on_fail(), |item_index, _item| {
            execute_item(host, item_index)
        })
            .await
    }
}

async fn execute_item(host: &dyn NodeHost, item_index: usize) -> ItemResult<Vec<Value>> {
    let credentials = host.credentials(params::CREDENTIAL_NAME).await?;
    let request = extract_search_request(|name| host.node_parameter(name, item_index))?;

    tracing::debug!(item_index, "Resolved search parameters");
    search_item(host, &credentials, request).await
}
