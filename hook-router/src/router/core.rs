//! Core router implementations
//!
//! This module contains the `Router` registration builder and the
//! `CompiledRouter` that resolves and dispatches requests.

use super::types::{CompiledRoute, CompiledTarget, Resolution, ResolvedRoute};
use crate::{
    AdminOperation, EntityKind, EntityRegistration, FormIntent, Params, Response, Route,
    RouteTable, RouterConfig, RouterError, RouterErrorCode, RouterResult, Verb,
    controller::{BoxedAction, ControllerDef, ControllerRegistry},
    host::DispatchTarget,
    logging::{
        DispatchId, DispatchLogEvent, DispatchSource, log_dispatch, log_entity_registered,
        log_resolution, log_route_registered, log_router_compiled,
    },
    pattern::RoutePattern,
};
use std::collections::HashMap;

// =============================================================================
// Compiled Router
// =============================================================================

/// A router whose patterns are compiled and whose targets are resolved.
///
/// Created by [`Router::compile`]. Every route, admin page and form hook
/// already points at a concrete controller action, so resolution never
/// looks anything up by string at request time.
///
/// # Example
/// ```rust,ignore
/// let router = Router::new()
///     .controller(books)
///     .get("book/{id}", "BookController", "show")
///     .compile()?;
///
/// match router.handle_request(Verb::Get, "/book/42")? {
///     Resolution::Resolved { response, .. } => render(response),
///     Resolution::Unresolved => fall_through(),
/// }
/// ```
pub struct CompiledRouter {
    pub(crate) config: RouterConfig,
    pub(crate) table: RouteTable,
    pub(crate) controllers: ControllerRegistry,
    /// Compiled routes per verb, in registration order
    routes: HashMap<Verb, Vec<CompiledRoute>>,
    /// Admin pages by entity name and operation
    admin_pages: HashMap<(String, AdminOperation), CompiledTarget>,
    /// Form hooks by entity name and intent
    form_hooks: HashMap<(String, FormIntent), CompiledTarget>,
}

impl CompiledRouter {
    /// Router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The route table the router was compiled from
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Registered controllers
    pub fn controllers(&self) -> &ControllerRegistry {
        &self.controllers
    }

    /// Content hash of the route table
    pub fn fingerprint(&self) -> RouterResult<String> {
        self.table.fingerprint()
    }

    /// Resolve a front-end request to a route without dispatching it.
    ///
    /// Verbs are tried according to [`RouterConfig::resolution`]; within a
    /// verb, patterns are tried in registration order and the first match
    /// wins.
    pub fn resolve(&self, verb: Verb, path: &str) -> Option<ResolvedRoute> {
        let resolved = self
            .match_route(verb, path)
            .map(|(compiled, captures)| ResolvedRoute {
                verb: compiled.route.verb,
                pattern: compiled.route.pattern.clone(),
                target: DispatchTarget::new(&compiled.route.controller, &compiled.route.action),
                captures,
            });

        log_resolution(
            verb,
            path,
            resolved.as_ref().map(|r| r.pattern.as_str()),
            self.config.debug_logging,
        );
        resolved
    }

    fn match_route(&self, verb: Verb, path: &str) -> Option<(&CompiledRoute, Vec<String>)> {
        self.config
            .candidate_verbs(verb)
            .into_iter()
            .filter_map(|candidate| self.routes.get(&candidate))
            .flatten()
            .find_map(|compiled| compiled.pattern.captures(path).map(|caps| (compiled, caps)))
    }

    /// Resolve a front-end request and, if a route matches, dispatch it with
    /// the route's captures as positional params.
    pub fn handle_request(&self, verb: Verb, path: &str) -> RouterResult<Resolution> {
        let Some((compiled, captures)) = self.match_route(verb, path) else {
            log_resolution(verb, path, None, self.config.debug_logging);
            return Ok(Resolution::Unresolved);
        };
        log_resolution(
            verb,
            path,
            Some(compiled.route.pattern.as_str()),
            self.config.debug_logging,
        );

        let params = Params::new(captures.clone()).with_names(compiled.pattern.names().to_vec());
        let target = DispatchTarget::new(&compiled.route.controller, &compiled.route.action);
        let response = run(DispatchSource::Route, &target, &compiled.action, params)?;

        Ok(Resolution::Resolved {
            route: ResolvedRoute {
                verb: compiled.route.verb,
                pattern: compiled.route.pattern.clone(),
                target,
                captures,
            },
            response,
        })
    }

    /// Run the action behind an admin page slug such as `book_list`.
    pub fn handle_admin_page(&self, slug: &str) -> RouterResult<Response> {
        let compiled = self
            .admin_page(slug)
            .ok_or_else(|| RouterError::not_found(format!("No admin page '{}'", slug)))?;
        run(
            DispatchSource::AdminPage,
            &compiled.target,
            &compiled.action,
            Params::none(),
        )
    }

    /// Run the action behind a form-submission hook.
    ///
    /// Accepts either the full hook name (`admin_post_save_book`) or the
    /// form's `action` value (`save_book`).
    pub fn handle_form_submission(&self, hook: &str) -> RouterResult<Response> {
        let compiled = self
            .form_hook(hook)
            .ok_or_else(|| RouterError::not_found(format!("No form hook '{}'", hook)))?;
        run(
            DispatchSource::FormSubmission,
            &compiled.target,
            &compiled.action,
            Params::none(),
        )
    }

    /// Build one instance of `controller` and run `action` on it.
    ///
    /// Fails with `HANDLER_NOT_FOUND` when the controller has no such action
    /// and `CONTROLLER_NOT_FOUND` when the controller is unknown.
    pub fn dispatch(&self, controller: &str, action: &str, params: Params) -> RouterResult<Response> {
        let target = DispatchTarget::new(controller, action);
        let boxed = match self.controllers.lookup(controller, action) {
            Ok(boxed) => boxed,
            Err(err) => {
                log_dispatch(
                    DispatchId::new(),
                    DispatchSource::Direct,
                    controller,
                    action,
                    DispatchLogEvent::Failed {
                        code: err.code,
                        message: err.message.clone(),
                    },
                );
                return Err(err);
            }
        };
        run(DispatchSource::Direct, &target, &boxed, params)
    }

    fn admin_page(&self, slug: &str) -> Option<&CompiledTarget> {
        self.table.entities().iter().find_map(|entity| {
            let op = entity.admin_operation(slug)?;
            self.admin_pages.get(&(entity.name.clone(), op))
        })
    }

    fn form_hook(&self, hook: &str) -> Option<&CompiledTarget> {
        self.table.entities().iter().find_map(|entity| {
            let intent = entity.form_intent(hook)?;
            self.form_hooks.get(&(entity.name.clone(), intent))
        })
    }

    /// Admin page slugs, sorted
    pub fn admin_page_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<_> = self
            .admin_pages
            .keys()
            .map(|(entity, op)| op.slug(entity))
            .collect();
        slugs.sort();
        slugs
    }

    /// Form hook names, sorted
    pub fn form_hook_names(&self) -> Vec<String> {
        let mut hooks: Vec<_> = self
            .form_hooks
            .keys()
            .map(|(entity, intent)| intent.hook(entity))
            .collect();
        hooks.sort();
        hooks
    }

    /// Target behind an admin page slug
    pub fn admin_page_target(&self, slug: &str) -> Option<&DispatchTarget> {
        self.admin_page(slug).map(|c| &c.target)
    }

    /// Target behind a form hook name or form `action` value
    pub fn form_hook_target(&self, hook: &str) -> Option<&DispatchTarget> {
        self.form_hook(hook).map(|c| &c.target)
    }

    /// Compiled pattern of a route, if registered
    pub fn pattern(&self, verb: Verb, pattern: &str) -> Option<&RoutePattern> {
        let route = self.table.route(verb, pattern)?;
        self.routes
            .get(&verb)?
            .iter()
            .find(|c| c.route.pattern == route.pattern)
            .map(|c| &c.pattern)
    }
}

/// Run a resolved action and log the outcome.
fn run(
    source: DispatchSource,
    target: &DispatchTarget,
    action: &BoxedAction,
    params: Params,
) -> RouterResult<Response> {
    let id = DispatchId::new();
    let result = action(params);
    let event = match &result {
        Ok(_) => DispatchLogEvent::Completed,
        Err(err) => DispatchLogEvent::Failed {
            code: err.code,
            message: err.message.clone(),
        },
    };
    log_dispatch(id, source, &target.controller, &target.action, event);
    result
}

// =============================================================================
// Router
// =============================================================================

/// Registration builder for routes, content types and admin resources.
///
/// # Example
/// ```rust,ignore
/// let router = Router::new()
///     .controller(books)
///     .controller(pages)
///     .post_type("book", "BookController")
///     .get("about", "PageController", "about")
///     .post("contact", "PageController", "contact");
/// ```
#[derive(Clone, Default)]
pub struct Router {
    pub(crate) config: RouterConfig,
    pub(crate) table: RouteTable,
    pub(crate) controllers: ControllerRegistry,
}

impl Router {
    /// Create a router with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the router configuration.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Router configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Register a controller definition.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn controller<C: 'static>(mut self, def: ControllerDef<C>) -> Self {
        self.controllers.register(def);
        self
    }

    /// Declare a route. A later route with the same verb and pattern replaces
    /// this one.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn route(
        mut self,
        verb: Verb,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        let route = Route::new(verb, pattern, controller, action);
        let (verb, pattern, controller, action) = (
            route.verb,
            route.pattern.clone(),
            route.controller.clone(),
            route.action.clone(),
        );
        let replaced = self.table.insert_route(route).is_some();
        log_route_registered(verb, &pattern, &controller, &action, replaced);
        self
    }

    /// Declare a route with the verb given as a string.
    ///
    /// Fails with `UNSUPPORTED_VERB` for anything but GET, POST, PUT, DELETE
    /// and PATCH (case-insensitive).
    pub fn route_named(
        self,
        verb: &str,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> RouterResult<Self> {
        let verb: Verb = verb.parse()?;
        Ok(self.route(verb, pattern, controller, action))
    }

    /// Declare a GET route.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn get(
        self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.route(Verb::Get, pattern, controller, action)
    }

    /// Declare a POST route.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn post(
        self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.route(Verb::Post, pattern, controller, action)
    }

    /// Declare a PUT route.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn put(
        self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.route(Verb::Put, pattern, controller, action)
    }

    /// Declare a DELETE route.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn delete(
        self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.route(Verb::Delete, pattern, controller, action)
    }

    /// Declare a PATCH route.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn patch(
        self,
        pattern: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        self.route(Verb::Patch, pattern, controller, action)
    }

    /// Declare a content type handled by `controller`.
    ///
    /// Registers the content-type schema, four admin pages
    /// (index/create/edit/delete) and three form hooks (store/update/delete).
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn post_type(self, name: impl Into<String>, controller: impl Into<String>) -> Self {
        self.entity(EntityRegistration::new(name, controller, EntityKind::PostType))
    }

    /// Declare admin CRUD screens over data that is not a content type.
    ///
    /// Same as [`Router::post_type`] without the content-type schema.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn resource_admin(self, name: impl Into<String>, controller: impl Into<String>) -> Self {
        self.entity(EntityRegistration::new(name, controller, EntityKind::Resource))
    }

    fn entity(mut self, entity: EntityRegistration) -> Self {
        log_entity_registered(&entity.name, entity.kind, &entity.controller);
        self.table.insert_entity(entity);
        self
    }

    /// Merge another router's controllers, routes and entities into this
    /// one. Entries from `other` win on conflict; this router's
    /// configuration is kept.
    #[must_use = "This method returns a new Router and does not modify self"]
    pub fn merge(mut self, other: Router) -> Self {
        self.controllers.extend(other.controllers);
        self.table.extend(other.table);
        self
    }

    /// The route table built so far
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// All declared routes
    pub fn routes(&self) -> Vec<&Route> {
        self.table.routes().collect()
    }

    /// All declared entities
    pub fn entities(&self) -> &[EntityRegistration] {
        self.table.entities()
    }

    /// Validate every declaration and compile the router.
    ///
    /// Fails when the configuration is invalid, when a route or entity names
    /// a controller or action that was never registered, or when a pattern
    /// cannot be compiled.
    pub fn compile(self) -> RouterResult<CompiledRouter> {
        self.config.validate()?;

        let mut routes: HashMap<Verb, Vec<CompiledRoute>> = HashMap::new();
        for route in self.table.routes() {
            let action = self
                .controllers
                .lookup(&route.controller, &route.action)
                .map_err(|e| e.with_cause(format!("route {} {}", route.verb, route.pattern)))?;
            let pattern = RoutePattern::compile(&route.pattern)?;
            routes.entry(route.verb).or_default().push(CompiledRoute {
                route: route.clone(),
                pattern,
                action,
            });
        }

        let mut admin_pages = HashMap::new();
        let mut form_hooks = HashMap::new();
        for entity in self.table.entities() {
            self.check_entity_controller(entity)?;
            let resolve = |action: &str| -> RouterResult<CompiledTarget> {
                let boxed = self
                    .controllers
                    .lookup(&entity.controller, action)
                    .map_err(|e| e.with_cause(format!("{} '{}'", entity.kind, entity.name)))?;
                Ok(CompiledTarget {
                    target: DispatchTarget::new(&entity.controller, action),
                    action: boxed,
                })
            };

            for op in AdminOperation::ALL {
                admin_pages.insert((entity.name.clone(), op), resolve(op.action())?);
            }
            for intent in FormIntent::ALL {
                form_hooks.insert((entity.name.clone(), intent), resolve(intent.action())?);
            }
        }

        log_router_compiled(
            self.table.route_count(),
            self.table.entities().len(),
            self.controllers.controllers().len(),
        );

        Ok(CompiledRouter {
            config: self.config,
            table: self.table,
            controllers: self.controllers,
            routes,
            admin_pages,
            form_hooks,
        })
    }

    /// Report every action an entity needs but its controller lacks in one
    /// error, rather than stopping at the first.
    fn check_entity_controller(&self, entity: &EntityRegistration) -> RouterResult<()> {
        let cause = format!("{} '{}'", entity.kind, entity.name);
        self.controllers
            .actions(&entity.controller)
            .map_err(|e| e.with_cause(cause.clone()))?;

        let missing: Vec<&str> = entity
            .required_actions()
            .into_iter()
            .filter(|action| !self.controllers.has_action(&entity.controller, action))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        Err(RouterError::new(
            RouterErrorCode::HandlerNotFound,
            format!(
                "Controller '{}' lacks actions required by {}: {}",
                entity.controller,
                cause,
                missing.join(", ")
            ),
        )
        .with_details(serde_json::json!({
            "controller": entity.controller,
            "missing": missing,
        }))
        .with_cause(cause))
    }
}
