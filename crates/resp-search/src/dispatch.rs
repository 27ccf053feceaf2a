//! Batch request dispatcher.
//!
//! One future per input item, all polled together on the calling task and
//! joined before any output is assembled:
//!
//! 1. every item resolves its own parameters and credentials
//! 2. validation failures never reach the network
//! 3. results are flattened in input order, not completion order
//!
//! A failed item either becomes an `{"error": ...}` row (`continue_on_fail`)
//! or aborts the batch as soon as the first failure surfaces. Requests still
//! in flight at that point are dropped and their results discarded.

use std::future::Future;

use futures::future::join_all;
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;

use crate::client::{HttpRequest, HttpTransport};
use crate::error::{DispatchError, DispatchResult, ItemResult, ValidationError};
use crate::models::{Credentials, OutputRecord, SearchRequest, SearchResponse};

/// Dispatch one search per item against `base_url`.
///
/// `extract` builds the request for an item from its index and value.
///
/// # Errors
///
/// With `continue_on_fail` off, returns [`DispatchError::ItemFailed`] for the
/// first item whose failure surfaces.
pub async fn dispatch<T, F>(
    transport: &T,
    items: &[Value],
    base_url: &str,
    continue_on_fail: bool,
    extract: F,
) -> DispatchResult<Vec<OutputRecord>>
where
    T: HttpTransport + ?Sized,
    F: Fn(usize, &Value) -> Result<SearchRequest, ValidationError>,
{
    let credentials = Credentials::new(base_url);
    let credentials = &credentials;
    let extract = &extract;

    run_batch(items, continue_on_fail, |item_index, item| async move {
        let request = extract(item_index, item)?;
        search_item(transport, credentials, request).await
    })
    .await
}

/// Fan out `per_item` over `items`, gather, and apply the failure policy.
///
/// # Errors
///
/// With `continue_on_fail` off, returns the first item failure to complete.
pub async fn run_batch<'a, F, Fut>(
    items: &'a [Value],
    continue_on_fail: bool,
    per_item: F,
) -> DispatchResult<Vec<OutputRecord>>
where
    F: Fn(usize, &'a Value) -> Fut,
    Fut: Future<Output = ItemResult<Vec<Value>>>,
{
    tracing::info!(items = items.len(), continue_on_fail, "Dispatching search batch");

    let tasks = items.iter().enumerate().map(|(item_index, item)| per_item(item_index, item));

    let records = if continue_on_fail {
        collect_records(join_all(tasks).await)
    } else {
        abort_on_first_failure(tasks).await?
    };

    tracing::info!(records = records.len(), "Search batch complete");
    Ok(records)
}

/// Poll every item together and stop at the first failure, in completion order.
///
/// Remaining futures are dropped with the stream.
async fn abort_on_first_failure<I, Fut>(tasks: I) -> DispatchResult<Vec<OutputRecord>>
where
    I: Iterator<Item = Fut>,
    Fut: Future<Output = ItemResult<Vec<Value>>>,
{
    let mut pending: FuturesUnordered<_> = tasks
        .enumerate()
        .map(|(item_index, task)| async move { (item_index, task.await) })
        .collect();

    let mut completed: Vec<Option<Vec<Value>>> = vec![None; pending.len()];

    while let Some((item_index, result)) = pending.next().await {
        match result {
            Ok(payloads) => completed[item_index] = Some(payloads),
            Err(error) => {
                tracing::error!(
                    item_index,
                    error = %error,
                    in_flight = pending.len(),
                    "Search failed, aborting batch"
                );
                return Err(DispatchError::item_failed(item_index, error));
            }
        }
    }

    Ok(completed
        .into_iter()
        .enumerate()
        .flat_map(|(item_index, payloads)| {
            payloads.unwrap_or_default().into_iter().map(move |p| OutputRecord::new(p, item_index))
        })
        .collect())
}

/// Flatten per-item results in index order, turning failures into error rows.
fn collect_records(results: Vec<ItemResult<Vec<Value>>>) -> Vec<OutputRecord> {
    let mut records = Vec::with_capacity(results.len());

    for (item_index, result) in results.into_iter().enumerate() {
        match result {
            Ok(payloads) => {
                records.extend(payloads.into_iter().map(|p| OutputRecord::new(p, item_index)));
            }
            Err(error) => {
                tracing::warn!(item_index, error = %error, "Search failed, continuing");
                records.push(OutputRecord::error(error.to_string(), item_index));
            }
        }
    }

    records
}

/// Validate, send and normalize a single search.
///
/// # Errors
///
/// Validation and credential errors are returned before any request is sent.
pub async fn search_item<T>(
    transport: &T,
    credentials: &Credentials,
    request: SearchRequest,
) -> ItemResult<Vec<Value>>
where
    T: HttpTransport + ?Sized,
{
    request.validate()?;
    let url = credentials.search_url()?;

    tracing::debug!(
        query = %request.query,
        source = %request.source,
        limit = request.limit,
        "Searching"
    );

    let body = serde_json::to_value(&request).map_err(crate::error::ClientError::from)?;
    let response = transport.request(HttpRequest::post(url, body)).await?;

    Ok(SearchResponse::from_value(response).into_records())
}
