//! Resp backend HTTP client.
//!
//! Provides an async HTTP client with connection pooling via reqwest. There is
//! no retry, cache or rate-limit layer: each call is exactly one request.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{SearchRequest, SearchResponse};

/// A JSON request as the host describes it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Create a `POST` request with a JSON body.
    #[must_use]
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self { method: Method::POST, url: url.into(), body: Some(body) }
    }
}

/// Transport capability: send a JSON request, get the decoded JSON body back.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request.
    async fn request(&self, request: HttpRequest) -> ClientResult<Value>;
}

/// Resp backend client.
#[derive(Clone)]
pub struct RespClient {
    /// HTTP client.
    client: Client,

    /// Configured request timeout, kept for `Debug`.
    request_timeout: Option<std::time::Duration>,
}

impl RespClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder =
            Client::builder().default_headers(headers).user_agent(api::USER_AGENT).gzip(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()?, request_timeout: config.request_timeout })
    }

    /// Run one search against `url`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status or a malformed body.
    pub async fn search(&self, url: &str, request: &SearchRequest) -> ClientResult<SearchResponse> {
        let body = serde_json::to_value(request)?;
        self.request(HttpRequest::post(url, body)).await.map(SearchResponse::from_value)
    }

    /// Handle backend response status codes and decode the body.
    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await?;
            return serde_json::from_slice(&bytes).map_err(ClientError::from);
        }

        let text = response.text().await.unwrap_or_default();
        match status.as_u16() {
            400 => Err(ClientError::bad_request(text)),
            404 => Err(ClientError::not_found(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
        }
    }
}

#[async_trait]
impl HttpTransport for RespClient {
    async fn request(&self, request: HttpRequest) -> ClientResult<Value> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending backend request");

        let mut builder = self.client.request(request.method, &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::handle_response(response).await
    }
}

impl std::fmt::Debug for RespClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RespClient").field("request_timeout", &self.request_timeout).finish()
    }
}
