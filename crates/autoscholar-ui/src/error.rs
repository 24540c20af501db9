//! Error types for the AutoScholar view layer.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

/// Errors from the backend client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Backend answered with a non-2xx status
    #[error("Backend error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the `error` field, or a status fallback
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Endpoint could not be built from the configured origin
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ClientError {
    /// Create a backend error.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    /// Status code reported by the backend, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the request never produced a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Middleware(_))
    }

    /// Text shown inline to the user.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Http(_) | Self::Middleware(_) => "Could not reach the backend".to_string(),
            Self::Parse(_) => "Unexpected response from the backend".to_string(),
            Self::InvalidUrl(e) => format!("Invalid backend URL ({e})"),
        }
    }
}

/// Errors from controllers and click delegation.
#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    /// Error from the backend client
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// A save control's index no longer resolves in the result store
    #[error("Could not retrieve article data for index: {index}")]
    RecordNotFound {
        /// Raw index carried by the control
        index: String,
    },
}

impl ViewError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Create a record-not-found error.
    #[must_use]
    pub fn record_not_found(index: impl Into<String>) -> Self {
        Self::RecordNotFound { index: index.into() }
    }

    /// Convert to the text rendered in the display region.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(err) => err.to_user_message(),
            Self::Validation { message, .. } => message.clone(),
            Self::RecordNotFound { .. } => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
