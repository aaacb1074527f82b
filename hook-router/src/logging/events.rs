//! Per-request logging: resolution, dispatch and rewrite-cache sync.

use super::DispatchId;
use crate::{RouterErrorCode, Verb};

/// What triggered a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchSource {
    /// A front-end route matched
    Route,
    /// An admin page was opened
    AdminPage,
    /// A form was submitted
    FormSubmission,
    /// Called directly by the host adapter
    Direct,
}

impl std::fmt::Display for DispatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Route => write!(f, "route"),
            Self::AdminPage => write!(f, "admin_page"),
            Self::FormSubmission => write!(f, "form_submission"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Outcome of a dispatch, for logging.
#[derive(Debug, Clone)]
pub enum DispatchLogEvent {
    /// Action returned normally
    Completed,
    /// Action or lookup failed
    Failed {
        /// Error code
        code: RouterErrorCode,
        /// Error message
        message: String,
    },
}

/// Log a dispatch outcome.
///
/// Completed dispatches are logged at Debug level; failures at Warn, or at
/// Error when they stem from misconfiguration.
pub fn log_dispatch(
    id: DispatchId,
    source: DispatchSource,
    controller: &str,
    action: &str,
    event: DispatchLogEvent,
) {
    match event {
        DispatchLogEvent::Completed => {
            tracing::debug!(
                dispatch_id = %id.short(),
                source = %source,
                controller = %controller,
                action = %action,
                "Dispatch completed"
            );
        }
        DispatchLogEvent::Failed { code, message } if code.is_configuration_error() => {
            tracing::error!(
                dispatch_id = %id.short(),
                source = %source,
                controller = %controller,
                action = %action,
                error_code = %code,
                error_message = %message,
                "Dispatch target misconfigured"
            );
        }
        DispatchLogEvent::Failed { code, message } => {
            tracing::warn!(
                dispatch_id = %id.short(),
                source = %source,
                controller = %controller,
                action = %action,
                error_code = %code,
                error_message = %message,
                "Dispatch failed"
            );
        }
    }
}

/// Log a front-end resolution attempt.
///
/// `matched` is the pattern that matched, if any. Logged at Trace level, or
/// Debug when `verbose` is set.
pub fn log_resolution(verb: Verb, path: &str, matched: Option<&str>, verbose: bool) {
    if verbose {
        tracing::debug!(verb = %verb, path = %path, matched = ?matched, "Route resolution");
    } else {
        tracing::trace!(verb = %verb, path = %path, matched = ?matched, "Route resolution");
    }
}

/// Log the result of rewrite-cache change detection.
pub fn log_rewrite_cache_sync(previous: Option<&str>, current: &str, flushed: bool) {
    if flushed {
        tracing::info!(
            previous = ?previous,
            current = %current,
            "Route table changed, rewrite rules flushed"
        );
    } else {
        tracing::debug!(current = %current, "Route table unchanged");
    }
}
