//! Error types for the Resp Search node.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Failures are resolved per item: every [`ItemError`] is either turned into an
//! error record or wrapped in a [`DispatchError`] that names the failing item.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the backend
        message: String,
    },

    /// Endpoint not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// HTTP status code, when the backend answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { .. } => Some(400),
            Self::NotFound { .. } => Some(404),
            Self::Server { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

/// Parameter validation failures, detected before any network call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Lower year bound is after the upper one.
    #[error("Min Year ({min_year}) cannot be greater than Max Year ({max_year})")]
    YearRange {
        /// Requested minimum year
        min_year: i32,
        /// Requested maximum year
        max_year: i32,
    },

    /// Result limit below the accepted minimum.
    #[error("Limit must be at least {min} (got {0})", min = crate::config::params::MIN_LIMIT)]
    LimitOutOfRange(i64),

    /// Parameter present with an unusable value.
    #[error("Invalid value for parameter '{name}': {message}")]
    Parameter {
        /// Parameter name as the host knows it
        name: String,
        /// What was wrong with the value
        message: String,
    },
}

impl ValidationError {
    /// Create a parameter error.
    #[must_use]
    pub fn parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parameter { name: name.into(), message: message.into() }
    }
}

/// Credential resolution failures.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// Host has no credentials of the requested type.
    #[error("Credentials '{0}' are not configured")]
    Missing(String),

    /// Base URL is empty or not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Anything that can fail a single item.
#[derive(thiserror::Error, Debug)]
pub enum ItemError {
    /// Parameters failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request to the backend failed
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// Credentials could not be resolved
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
}

impl ItemError {
    /// Returns true if the item failed before reaching the network.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Batch-level failure raised when `continue_on_fail` is off.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    /// An item failed and aborted the batch.
    #[error("{source} [item {item_index}]")]
    ItemFailed {
        /// Index of the failing input item
        item_index: usize,
        /// Underlying cause
        #[source]
        source: ItemError,
    },
}

impl DispatchError {
    /// Wrap an item failure with its index.
    #[must_use]
    pub const fn item_failed(item_index: usize, source: ItemError) -> Self {
        Self::ItemFailed { item_index, source }
    }

    /// Index of the input item that caused the abort.
    #[must_use]
    pub const fn item_index(&self) -> usize {
        match self {
            Self::ItemFailed { item_index, .. } => *item_index,
        }
    }

    /// The per-item cause.
    #[must_use]
    pub const fn cause(&self) -> &ItemError {
        match self {
            Self::ItemFailed { source, .. } => source,
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for a single item.
pub type ItemResult<T> = Result<T, ItemError>;

/// Result type alias for a whole dispatch.
pub type DispatchResult<T> = Result<T, DispatchError>;
