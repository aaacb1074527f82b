//! Registration bridge
//!
//! Translates a compiled router into host registrations and keeps the
//! host's rewrite cache in step with the route table.

use super::{core::CompiledRouter, types::CacheSync};
use crate::{
    AdminOperation, EntityKind, FormIntent, RouterResult,
    host::{AdminPage, ContentTypeSchema, DispatchTarget, FormHook, HostPlatform, MenuPlacement, RewriteRule},
    logging::{log_host_installed, log_rewrite_cache_sync},
    store::OptionStore,
};

impl CompiledRouter {
    /// Content-type schemas for every post-type entity
    pub fn content_types(&self) -> Vec<ContentTypeSchema> {
        self.table
            .entities()
            .iter()
            .filter(|e| e.kind == EntityKind::PostType)
            .map(|e| ContentTypeSchema::for_entity(&e.name))
            .collect()
    }

    /// Admin pages for every entity, four per entity
    pub fn admin_pages(&self) -> Vec<AdminPage> {
        self.table
            .entities()
            .iter()
            .flat_map(|entity| {
                AdminOperation::ALL.into_iter().map(move |op| {
                    let placement = match (op, entity.kind) {
                        (AdminOperation::Index, EntityKind::PostType) => {
                            MenuPlacement::Submenu(format!("edit.php?post_type={}", entity.name))
                        }
                        (AdminOperation::Index, EntityKind::Resource) => MenuPlacement::TopLevel,
                        _ => MenuPlacement::Hidden,
                    };
                    AdminPage {
                        entity: entity.name.clone(),
                        kind: entity.kind,
                        placement,
                        title: op.title(&entity.name),
                        capability: self.config.admin_capability.clone(),
                        slug: op.slug(&entity.name),
                        target: DispatchTarget::new(&entity.controller, op.action()),
                    }
                })
            })
            .collect()
    }

    /// Form hooks for every entity, three per entity
    pub fn form_hooks(&self) -> Vec<FormHook> {
        self.table
            .entities()
            .iter()
            .flat_map(|entity| {
                FormIntent::ALL.into_iter().map(move |intent| FormHook {
                    entity: entity.name.clone(),
                    hook: intent.hook(&entity.name),
                    target: DispatchTarget::new(&entity.controller, intent.action()),
                })
            })
            .collect()
    }

    /// Rewrite rules for every explicit route
    pub fn rewrite_rules(&self) -> Vec<RewriteRule> {
        let redirect = format!("index.php?{}=1", self.config.query_var);
        self.table
            .routes()
            .filter_map(|route| {
                self.pattern(route.verb, &route.pattern).map(|compiled| RewriteRule {
                    verb: route.verb,
                    pattern: route.pattern.clone(),
                    expression: compiled.expression().to_string(),
                    redirect: redirect.clone(),
                })
            })
            .collect()
    }

    /// Register everything the host needs to drive this router.
    ///
    /// Content types come first so that admin pages can nest under them.
    pub fn install<H: HostPlatform + ?Sized>(&self, host: &mut H) {
        for schema in self.content_types() {
            host.register_content_type(schema);
        }

        let pages = self.admin_pages();
        let page_count = pages.len();
        for page in pages {
            host.add_admin_page(page);
        }

        let hooks = self.form_hooks();
        let hook_count = hooks.len();
        for hook in hooks {
            host.add_form_hook(hook);
        }

        let rules = self.rewrite_rules();
        let rule_count = rules.len();
        for rule in rules {
            host.add_rewrite_rule(rule);
        }

        log_host_installed(&self.config.summary(), rule_count, page_count, hook_count);
    }

    /// Flush the host's rewrite cache if the route table changed since the
    /// fingerprint was last stored.
    ///
    /// Safe to call on every request: an unchanged table only costs one
    /// hash and one option read.
    pub fn sync_rewrite_cache<H, S>(&self, host: &mut H, store: &mut S) -> RouterResult<CacheSync>
    where
        H: HostPlatform + ?Sized,
        S: OptionStore + ?Sized,
    {
        if !self.config.flush_on_change {
            return Ok(CacheSync::Skipped);
        }

        let current = self.fingerprint()?;
        let previous = store.get_option(&self.config.hash_option_key)?;

        if previous.as_deref() == Some(current.as_str()) {
            log_rewrite_cache_sync(previous.as_deref(), &current, false);
            return Ok(CacheSync::Unchanged {
                fingerprint: current,
            });
        }

        host.flush_rewrite_rules();
        store.set_option(&self.config.hash_option_key, &current)?;
        log_rewrite_cache_sync(previous.as_deref(), &current, true);

        Ok(CacheSync::Flushed { previous, current })
    }
}
