//! Host platform adapter seam
//!
//! The router never calls into a content-management platform directly.
//! Instead, [`CompiledRouter::install`](crate::CompiledRouter::install)
//! describes every registration the platform needs through the
//! [`HostPlatform`] trait, and the platform later calls back into the router
//! (`handle_request`, `handle_admin_page`, `handle_form_submission`) at its
//! own lifecycle points.

use crate::{EntityKind, Verb};
use serde::{Deserialize, Serialize};

/// Target of a registration: which controller action it dispatches to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DispatchTarget {
    /// Controller name
    pub controller: String,
    /// Action name
    pub action: String,
}

impl DispatchTarget {
    /// Create a target
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
        }
    }
}

/// Content-type schema registered for post-type entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeSchema {
    /// Content-type name
    pub name: String,
    /// Publicly queryable
    pub public: bool,
    /// Has an archive page
    pub has_archive: bool,
    /// Editor features the content type supports
    pub supports: Vec<String>,
    /// Shown in the admin menu
    pub show_in_menu: bool,
}

impl ContentTypeSchema {
    /// Schema used for every post-type entity
    pub fn for_entity(name: &str) -> Self {
        Self {
            name: name.to_string(),
            public: true,
            has_archive: true,
            supports: ["title", "editor", "custom-fields"]
                .into_iter()
                .map(String::from)
                .collect(),
            show_in_menu: true,
        }
    }
}

/// Where an admin page appears in the host's menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "placement", content = "parent")]
pub enum MenuPlacement {
    /// Own top-level menu entry
    TopLevel,
    /// Entry under an existing menu, identified by its slug
    Submenu(String),
    /// Reachable by slug only, not listed in any menu
    Hidden,
}

/// An admin menu page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPage {
    /// Entity the page belongs to
    pub entity: String,
    /// Kind of the entity
    pub kind: EntityKind,
    /// Menu placement
    pub placement: MenuPlacement,
    /// Page and menu title
    pub title: String,
    /// Capability required to open the page
    pub capability: String,
    /// Unique page slug, e.g. `book_list`
    pub slug: String,
    /// Action rendered by the page
    pub target: DispatchTarget,
}

/// An authenticated form-submission hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormHook {
    /// Entity the hook belongs to
    pub entity: String,
    /// Hook name, e.g. `admin_post_save_book`
    pub hook: String,
    /// Action run on submission
    pub target: DispatchTarget,
}

/// A rewrite rule routing a front-end URL to the router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    /// Verb of the route that produced the rule
    pub verb: Verb,
    /// Pattern as declared
    pub pattern: String,
    /// Anchored regular expression matched against the request path
    pub expression: String,
    /// Internal query the host rewrites matching requests to
    pub redirect: String,
}

/// Registration callbacks a host platform adapter implements.
pub trait HostPlatform {
    /// Register a content-type schema (initialization phase)
    fn register_content_type(&mut self, schema: ContentTypeSchema);

    /// Register an admin menu page (admin-menu phase)
    fn add_admin_page(&mut self, page: AdminPage);

    /// Subscribe a form-submission hook
    fn add_form_hook(&mut self, hook: FormHook);

    /// Register a rewrite rule (initialization phase)
    fn add_rewrite_rule(&mut self, rule: RewriteRule);

    /// Invalidate the host's cached rewrite rules
    fn flush_rewrite_rules(&mut self);
}

/// A host that records every registration in memory.
///
/// Useful for tests and for hosts that read registrations back in bulk
/// (for instance to generate a configuration file).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingHost {
    /// Registered content types
    pub content_types: Vec<ContentTypeSchema>,
    /// Registered admin pages
    pub admin_pages: Vec<AdminPage>,
    /// Registered form hooks
    pub form_hooks: Vec<FormHook>,
    /// Registered rewrite rules
    pub rewrite_rules: Vec<RewriteRule>,
    /// Number of rewrite-cache flushes
    pub flush_count: usize,
}

impl RecordingHost {
    /// Create an empty host
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an admin page by slug
    pub fn admin_page(&self, slug: &str) -> Option<&AdminPage> {
        self.admin_pages.iter().find(|p| p.slug == slug)
    }

    /// Find a form hook by name
    pub fn form_hook(&self, hook: &str) -> Option<&FormHook> {
        self.form_hooks.iter().find(|h| h.hook == hook)
    }
}

impl HostPlatform for RecordingHost {
    fn register_content_type(&mut self, schema: ContentTypeSchema) {
        self.content_types.push(schema);
    }

    fn add_admin_page(&mut self, page: AdminPage) {
        self.admin_pages.push(page);
    }

    fn add_form_hook(&mut self, hook: FormHook) {
        self.form_hooks.push(hook);
    }

    fn add_rewrite_rule(&mut self, rule: RewriteRule) {
        self.rewrite_rules.push(rule);
    }

    fn flush_rewrite_rules(&mut self) {
        self.flush_count += 1;
    }
}
