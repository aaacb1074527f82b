//! Router lifecycle logging functions.
//!
//! Registration events are logged at Trace level, compilation at Debug and
//! installation into a host at Info.

use crate::{EntityKind, Verb};

/// Log registration of an explicit route.
///
/// `replaced` is true when an earlier route with the same verb and pattern
/// was overwritten; that is logged at Debug so silent overwrites stay
/// visible when debugging.
pub fn log_route_registered(verb: Verb, pattern: &str, controller: &str, action: &str, replaced: bool) {
    if replaced {
        tracing::debug!(
            verb = %verb,
            pattern = %pattern,
            controller = %controller,
            action = %action,
            "Route replaced"
        );
    } else {
        tracing::trace!(
            verb = %verb,
            pattern = %pattern,
            controller = %controller,
            action = %action,
            "Route registered"
        );
    }
}

/// Log registration of a post type or admin resource.
pub fn log_entity_registered(name: &str, kind: EntityKind, controller: &str) {
    tracing::trace!(
        entity = %name,
        kind = %kind,
        controller = %controller,
        "Entity registered"
    );
}

/// Log router compilation.
pub fn log_router_compiled(route_count: usize, entity_count: usize, controller_count: usize) {
    tracing::debug!(
        route_count = %route_count,
        entity_count = %entity_count,
        controller_count = %controller_count,
        "Router compiled"
    );
}

/// Log installation of the router's registrations into a host.
pub fn log_host_installed(config_summary: &str, rewrite_rules: usize, admin_pages: usize, form_hooks: usize) {
    tracing::info!(
        config = %config_summary,
        rewrite_rules = %rewrite_rules,
        admin_pages = %admin_pages,
        form_hooks = %form_hooks,
        "Router installed into host"
    );
}
