//! Error types for routing and dispatch
//!
//! Every failure in this crate is a [`RouterError`] carrying a typed
//! [`RouterErrorCode`]. Almost all of them come from plugin misconfiguration
//! (an unknown action, an unknown verb), so none of them are retried.
//!
//! # Example
//! ```rust,ignore
//! use hook_router::{RouterError, RouterErrorCode};
//!
//! let error = RouterError::handler_not_found("missing", "BookController");
//! assert_eq!(error.code, RouterErrorCode::HandlerNotFound);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Type-safe error codes for routing operations.
///
/// When serialized to JSON, codes are converted to SCREAMING_SNAKE_CASE
/// (e.g., `HandlerNotFound` becomes `"HANDLER_NOT_FOUND"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum RouterErrorCode {
    // Configuration errors
    /// A controller does not expose the requested action
    HandlerNotFound,
    /// No controller is registered under the requested name
    ControllerNotFound,
    /// A route was declared with a verb outside GET/POST/PUT/DELETE/PATCH
    UnsupportedVerb,
    /// A route pattern could not be compiled
    InvalidPattern,
    /// Router configuration failed validation
    ConfigError,

    // Request errors
    /// No admin page, form hook or route matches the request
    NotFound,
    /// Request parameters could not be interpreted
    BadRequest,

    // Infrastructure errors
    /// Reading or writing the option store failed
    PersistenceError,
    /// JSON serialization/deserialization failed
    SerializationError,
    /// An unexpected internal error occurred
    InternalError,
}

impl RouterErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HandlerNotFound => "HANDLER_NOT_FOUND",
            Self::ControllerNotFound => "CONTROLLER_NOT_FOUND",
            Self::UnsupportedVerb => "UNSUPPORTED_VERB",
            Self::InvalidPattern => "INVALID_PATTERN",
            Self::ConfigError => "CONFIG_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::PersistenceError => "PERSISTENCE_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the error stems from how the plugin declared its
    /// routes and controllers rather than from an incoming request.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::HandlerNotFound
                | Self::ControllerNotFound
                | Self::UnsupportedVerb
                | Self::InvalidPattern
                | Self::ConfigError
        )
    }

    /// Returns true if this is a request error (4xx equivalent).
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::NotFound | Self::BadRequest)
    }
}

impl fmt::Display for RouterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routing error with type-safe code and message.
///
/// # Example
/// ```rust,ignore
/// let error = RouterError::new(RouterErrorCode::NotFound, "No admin page 'book_show'")
///     .with_details(serde_json::json!({"slug": "book_show"}))
///     .with_cause("entity 'book' registers list/create/edit/delete only");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("[{code}] {message}")]
pub struct RouterError {
    /// Type-safe error code
    pub code: RouterErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (JSON value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional cause for debugging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl RouterError {
    /// Create a new error with code and message.
    pub fn new(code: RouterErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            cause: None,
        }
    }

    /// Add details to the error.
    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Add a cause string for debugging.
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Strip details and cause from infrastructure errors before they are
    /// shown on a host error page.
    pub fn sanitize(mut self) -> Self {
        if matches!(
            self.code,
            RouterErrorCode::InternalError | RouterErrorCode::PersistenceError
        ) {
            debug!(
                original_message = %self.message,
                "Sanitizing infrastructure error for display"
            );
            self.message = "An internal error occurred".to_string();
            self.details = None;
            self.cause = None;
        }
        self
    }

    // Convenience constructors

    /// Create a HANDLER_NOT_FOUND error naming both the action and the controller.
    pub fn handler_not_found(action: &str, controller: &str) -> Self {
        Self::new(
            RouterErrorCode::HandlerNotFound,
            format!("Method '{}' not found in controller '{}'", action, controller),
        )
        .with_details(serde_json::json!({
            "action": action,
            "controller": controller,
        }))
    }

    /// Create a CONTROLLER_NOT_FOUND error.
    pub fn controller_not_found(controller: &str) -> Self {
        Self::new(
            RouterErrorCode::ControllerNotFound,
            format!("Controller '{}' is not registered", controller),
        )
        .with_details(serde_json::json!({ "controller": controller }))
    }

    /// Create an UNSUPPORTED_VERB error.
    pub fn unsupported_verb(verb: &str) -> Self {
        Self::new(
            RouterErrorCode::UnsupportedVerb,
            format!(
                "Unsupported verb '{}', expected one of GET, POST, PUT, DELETE, PATCH",
                verb
            ),
        )
    }

    /// Create an INVALID_PATTERN error.
    pub fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::new(
            RouterErrorCode::InvalidPattern,
            format!("Route pattern '{}' cannot be compiled", pattern),
        )
        .with_cause(reason)
    }

    /// Create a CONFIG_ERROR error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::ConfigError, message)
    }

    /// Create a NOT_FOUND error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::NotFound, message)
    }

    /// Create a BAD_REQUEST error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::BadRequest, message)
    }

    /// Create a PERSISTENCE_ERROR error.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::PersistenceError, message)
    }

    /// Create a SERIALIZATION_ERROR error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::SerializationError, message)
    }

    /// Create an INTERNAL_ERROR error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(RouterErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for RouterError {
    fn from(err: std::io::Error) -> Self {
        Self::persistence(format!("IO error: {}", err))
    }
}

/// Result type alias for routing operations.
pub type RouterResult<T> = Result<T, RouterError>;
