//! Error handling for the SocialPizza client
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the SocialPizza client
#[derive(Error, Debug)]
pub enum SocialPizzaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("{0}")]
    Policy(#[from] PolicyError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while talking to the SocialPizza REST API
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response; the message is the server-provided body, verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Cannot reach server")]
    Unreachable,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the role/status policy before any remote call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Cannot join an event that is not approved yet")]
    EventNotApproved { event_id: i64 },

    #[error("Already participating in this event")]
    AlreadyJoined { event_id: i64 },

    #[error("Event is sold out, no seats left")]
    EventFull { event_id: i64 },

    #[error("A rejection requires a non-empty comment")]
    EmptyRejectionComment,

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },
}

/// Result type alias for SocialPizza operations
pub type Result<T> = std::result::Result<T, SocialPizzaError>;

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl SocialPizzaError {
    /// Check if the error is recoverable by retrying the user action
    pub fn is_recoverable(&self) -> bool {
        match self {
            SocialPizzaError::Config(_) => false,
            SocialPizzaError::Api(_) => true,
            SocialPizzaError::Policy(_) => true,
            SocialPizzaError::Http(_) => true,
            SocialPizzaError::Serialization(_) => false,
            SocialPizzaError::Io(_) => true,
            SocialPizzaError::UrlParse(_) => false,
            SocialPizzaError::Authentication(_) => false,
            SocialPizzaError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SocialPizzaError::Config(_) => ErrorSeverity::Critical,
            SocialPizzaError::Authentication(_) => ErrorSeverity::Warning,
            SocialPizzaError::Policy(_) => ErrorSeverity::Info,
            SocialPizzaError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
