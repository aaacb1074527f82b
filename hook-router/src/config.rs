//! Configuration for the router.
//!
//! # Example
//! ```rust,ignore
//! use hook_router::{RouterConfig, ResolutionStrategy};
//!
//! let config = RouterConfig::new()
//!     .with_hash_option_key("bookshelf_routes_hash")
//!     .with_resolution(ResolutionStrategy::RequestMethod)
//!     .with_debug_logging(true);
//! ```

use crate::{RouterError, RouterResult, Verb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// hash_option_key must not be empty
    EmptyHashOptionKey,
    /// query_var must not be empty
    EmptyQueryVar,
    /// admin_capability must not be empty
    EmptyAdminCapability,
    /// verb_order must list at least one verb
    EmptyVerbOrder,
    /// verb_order lists a verb twice
    DuplicateVerb(Verb),
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHashOptionKey => write!(f, "hash_option_key cannot be empty"),
            Self::EmptyQueryVar => write!(f, "query_var cannot be empty"),
            Self::EmptyAdminCapability => write!(f, "admin_capability cannot be empty"),
            Self::EmptyVerbOrder => write!(f, "verb_order must list at least one verb"),
            Self::DuplicateVerb(verb) => write!(f, "verb_order lists {} more than once", verb),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl From<ConfigValidationError> for RouterError {
    fn from(err: ConfigValidationError) -> Self {
        RouterError::config(err.to_string())
    }
}

/// How front-end requests pick the verbs whose routes are tried.
///
/// * `VerbOrder` - the request verb is ignored and verbs are tried in
///   [`RouterConfig::verb_order`] (GET before POST by default); the first
///   structural match wins. Hosts resolve routes from the template layer,
///   where the request method is not consulted.
///
/// * `RequestMethod` - only routes declared for the request's own verb are
///   considered. A `POST cart` request never reaches a `GET cart` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategy {
    /// Try verbs in configured order regardless of the request verb
    #[default]
    VerbOrder,
    /// Match against the request's verb only
    RequestMethod,
}

/// Router configuration.
///
/// # Fields
///
/// * `hash_option_key` - Option key the route-table fingerprint is stored
///   under. Default: `hook_router_routes_hash`.
///
/// * `query_var` - Query variable rewrite rules set so the host knows a
///   request belongs to a declared route. Default: `hook_route`.
///
/// * `admin_capability` - Capability required for generated admin pages.
///   Default: `manage_options`.
///
/// * `resolution` - See [`ResolutionStrategy`]. Default: `VerbOrder`.
///
/// * `verb_order` - Verb order used by `ResolutionStrategy::VerbOrder`.
///   Default: GET, POST, PUT, PATCH, DELETE.
///
/// * `flush_on_change` - Whether change detection may flush the host's
///   rewrite cache. Default: true.
///
/// * `debug_logging` - Log every resolution attempt. Default: false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Option key for the persisted route-table hash
    pub hash_option_key: String,
    /// Query variable set by generated rewrite rules
    pub query_var: String,
    /// Capability required by generated admin pages
    pub admin_capability: String,
    /// Front-end resolution strategy
    pub resolution: ResolutionStrategy,
    /// Verb order for `ResolutionStrategy::VerbOrder`
    pub verb_order: Vec<Verb>,
    /// Flush the rewrite cache when the route table changes
    pub flush_on_change: bool,
    /// Enable debug logging
    pub debug_logging: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            hash_option_key: "hook_router_routes_hash".to_string(),
            query_var: "hook_route".to_string(),
            admin_capability: "manage_options".to_string(),
            resolution: ResolutionStrategy::default(),
            verb_order: Verb::ALL.to_vec(),
            flush_on_change: true,
            debug_logging: false,
        }
    }
}

impl RouterConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> RouterResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.hash_option_key.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHashOptionKey);
        }
        if self.query_var.trim().is_empty() {
            return Err(ConfigValidationError::EmptyQueryVar);
        }
        if self.admin_capability.trim().is_empty() {
            return Err(ConfigValidationError::EmptyAdminCapability);
        }
        if self.verb_order.is_empty() {
            return Err(ConfigValidationError::EmptyVerbOrder);
        }
        for (i, verb) in self.verb_order.iter().enumerate() {
            if self.verb_order[..i].contains(verb) {
                return Err(ConfigValidationError::DuplicateVerb(*verb));
            }
        }
        Ok(())
    }

    /// Verbs to try for a request with the given verb.
    pub(crate) fn candidate_verbs(&self, request_verb: Verb) -> Vec<Verb> {
        match self.resolution {
            ResolutionStrategy::RequestMethod => vec![request_verb],
            ResolutionStrategy::VerbOrder => self.verb_order.clone(),
        }
    }

    /// Set the option key for the persisted route-table hash.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_hash_option_key(mut self, key: impl Into<String>) -> Self {
        self.hash_option_key = key.into();
        self
    }

    /// Set the query variable used by rewrite rules.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_query_var(mut self, query_var: impl Into<String>) -> Self {
        self.query_var = query_var.into();
        self
    }

    /// Set the capability required by generated admin pages.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_admin_capability(mut self, capability: impl Into<String>) -> Self {
        self.admin_capability = capability.into();
        self
    }

    /// Set the resolution strategy.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_resolution(mut self, resolution: ResolutionStrategy) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the verb order for `ResolutionStrategy::VerbOrder`.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_verb_order(mut self, order: impl Into<Vec<Verb>>) -> Self {
        self.verb_order = order.into();
        self
    }

    /// Enable or disable rewrite-cache flushing on change.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_flush_on_change(mut self, enabled: bool) -> Self {
        self.flush_on_change = enabled;
        self
    }

    /// Enable or disable debug logging.
    #[must_use = "This method returns a new RouterConfig and does not modify self"]
    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }

    /// One-line summary for lifecycle logs
    pub(crate) fn summary(&self) -> String {
        format!(
            "resolution={:?}, flush_on_change={}, option_key={}",
            self.resolution, self.flush_on_change, self.hash_option_key
        )
    }
}
