//! Types produced by resolution and change detection, plus the compiled
//! entries the router keeps internally.

use crate::{
    Response, Route, Verb, controller::BoxedAction, host::DispatchTarget, pattern::RoutePattern,
};
use serde::{Deserialize, Serialize};

/// A front-end request matched to a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoute {
    /// Verb of the matching route
    pub verb: Verb,
    /// Pattern of the matching route
    pub pattern: String,
    /// Controller and action the route dispatches to
    pub target: DispatchTarget,
    /// Positional captures, one per placeholder
    pub captures: Vec<String>,
}

/// Outcome of front-end request handling.
///
/// `Unresolved` means no route matched and the host should continue with
/// its default handling. `Resolved` means the request was dispatched and
/// must not be processed further by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No route matched
    Unresolved,
    /// A route matched and its action ran
    Resolved {
        /// The matching route
        route: ResolvedRoute,
        /// What the action returned
        response: Response,
    },
}

impl Resolution {
    /// Whether a route handled the request
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// The action's response, if a route handled the request
    pub fn response(&self) -> Option<&Response> {
        match self {
            Self::Resolved { response, .. } => Some(response),
            Self::Unresolved => None,
        }
    }
}

/// Outcome of rewrite-cache change detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CacheSync {
    /// Stored fingerprint matches; nothing flushed
    Unchanged {
        /// Current fingerprint
        fingerprint: String,
    },
    /// Fingerprint differed or was absent; rewrite rules flushed and the
    /// new fingerprint stored
    Flushed {
        /// Previously stored fingerprint
        previous: Option<String>,
        /// Newly stored fingerprint
        current: String,
    },
    /// Change detection is disabled by configuration
    Skipped,
}

/// A route with its pattern compiled and its action resolved (internal)
pub(crate) struct CompiledRoute {
    pub(crate) route: Route,
    pub(crate) pattern: RoutePattern,
    pub(crate) action: BoxedAction,
}

/// An admin page or form hook with its action resolved (internal)
pub(crate) struct CompiledTarget {
    pub(crate) target: DispatchTarget,
    pub(crate) action: BoxedAction,
}
