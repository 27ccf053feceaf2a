//! Resp Search - Entry Point
//!
//! Runs the search node over a batch of JSON items and prints the output
//! records to stdout.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde_json::{Value, json};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use resp_search::config::{api, params};
use resp_search::{
    Config, Credentials, ExecutableNode, RespClient, SearchNode, Source, StaticHost,
};

#[derive(Parser, Debug)]
#[command(name = "resp-search")]
#[command(about = "Search papers through a Resp backend, one request per input item")]
#[command(version)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "RESP_BASE_URL")]
    base_url: Option<String>,

    /// Search query
    #[arg(long)]
    query: Option<String>,

    /// Source to search
    #[arg(long, value_enum)]
    source: Option<Source>,

    /// Maximum number of results
    #[arg(long)]
    limit: Option<i64>,

    /// Minimum publication year
    #[arg(long)]
    min_year: Option<i32>,

    /// Maximum publication year
    #[arg(long)]
    max_year: Option<i32>,

    /// JSON file with input items (array or single object); "-" reads stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Emit error rows for failed items instead of aborting
    #[arg(long)]
    continue_on_fail: bool,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the node and credential schema and exit
    #[arg(long)]
    describe: bool,

    /// Pretty-print output JSON
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

/// Read input items. Without `--input` the batch is a single empty item.
fn read_items(input: Option<&PathBuf>) -> anyhow::Result<Vec<Value>> {
    let raw = match input {
        None => return Ok(vec![json!({})]),
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read items from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read items from {}", path.display()))?,
    };

    let value: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    Ok(match value {
        Value::Array(items) => items,
        single => vec![single],
    })
}

fn print_json(value: &impl serde::Serialize, pretty: bool) -> anyhow::Result<()> {
    let out =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let node = SearchNode;

    if cli.describe {
        let description = json!({
            "name": node.name(),
            "displayName": node.display_name(),
            "description": node.description(),
            "parameters": node.parameter_schema(),
            "credentials": node.credential_schema(),
        });
        return print_json(&description, cli.pretty);
    }

    let env_timeout = std::env::var(api::REQUEST_TIMEOUT_ENV).ok();
    let config = Config {
        base_url: cli.base_url.clone().filter(|url| !url.trim().is_empty()),
        request_timeout: Config::resolve_request_timeout(cli.timeout_secs, env_timeout.as_deref())?,
    };

    let base_url = config
        .base_url
        .clone()
        .context("no backend base URL: pass --base-url or set RESP_BASE_URL")?;

    let items = read_items(cli.input.as_ref())?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        items = items.len(),
        "Starting Resp search"
    );

    let client = RespClient::new(&config)?;
    let mut host = StaticHost::new(items, Arc::new(client))
        .with_credentials(params::CREDENTIAL_NAME, Credentials::new(base_url))
        .with_continue_on_fail(cli.continue_on_fail);

    if let Some(query) = cli.query {
        host = host.with_parameter(params::QUERY, query);
    }
    if let Some(source) = cli.source {
        host = host.with_parameter(params::SOURCE, source.as_str());
    }
    if let Some(limit) = cli.limit {
        host = host.with_parameter(params::LIMIT, limit);
    }
    if let Some(min_year) = cli.min_year {
        host = host.with_parameter(params::MIN_YEAR, min_year);
    }
    if let Some(max_year) = cli.max_year {
        host = host.with_parameter(params::MAX_YEAR, max_year);
    }

    let records = host.run(&node).await?;
    print_json(&records, cli.pretty)
}
