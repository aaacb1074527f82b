//! Console host adapter
//!
//! Stands in for the content-management platform: records every
//! registration and logs it so the CLI can show what a real host would
//! have been asked to do.

use hook_router::{
    AdminPage, ContentTypeSchema, FormHook, HostPlatform, RecordingHost, RewriteRule,
};
use tracing::info;

#[derive(Debug, Default)]
pub struct ConsoleHost {
    pub recorded: RecordingHost,
}

impl ConsoleHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostPlatform for ConsoleHost {
    fn register_content_type(&mut self, schema: ContentTypeSchema) {
        info!(name = %schema.name, "register_post_type");
        self.recorded.register_content_type(schema);
    }

    fn add_admin_page(&mut self, page: AdminPage) {
        info!(slug = %page.slug, placement = ?page.placement, "add_menu_page");
        self.recorded.add_admin_page(page);
    }

    fn add_form_hook(&mut self, hook: FormHook) {
        info!(hook = %hook.hook, "add_action");
        self.recorded.add_form_hook(hook);
    }

    fn add_rewrite_rule(&mut self, rule: RewriteRule) {
        info!(expression = %rule.expression, redirect = %rule.redirect, "add_rewrite_rule");
        self.recorded.add_rewrite_rule(rule);
    }

    fn flush_rewrite_rules(&mut self) {
        info!("flush_rewrite_rules");
        self.recorded.flush_rewrite_rules();
    }
}
