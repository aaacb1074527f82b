//! Controller definitions and the controller registry
//!
//! A controller is any type that can be built by a factory and exposes a
//! set of named actions. Actions are declared explicitly when the
//! controller is defined, so unknown actions are caught when the router is
//! compiled rather than when a request arrives.
//!
//! # Example
//! ```rust,ignore
//! #[derive(Default)]
//! struct BookController;
//!
//! impl BookController {
//!     fn index(&mut self, _: Params) -> RouterResult<Vec<Book>> { ... }
//!     fn show(&mut self, params: Params) -> RouterResult<Book> { ... }
//! }
//!
//! let books = ControllerDef::new("BookController", BookController::default)
//!     .action("index", BookController::index)
//!     .action("show", BookController::show);
//! ```

use crate::{Params, Response, RouterError, RouterResult};
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Type-erased action: builds a fresh controller and runs one method on it
pub(crate) type BoxedAction = Arc<dyn Fn(Params) -> RouterResult<Response> + Send + Sync>;

type Factory<C> = Arc<dyn Fn() -> C + Send + Sync>;

/// Trait for controller actions
///
/// Automatically implemented for functions and closures with the signature
/// `fn(&mut C, Params) -> RouterResult<Output>`, which includes methods
/// referenced as `Controller::method`.
pub trait Action<C, Output>: Clone + Send + Sync + 'static
where
    Output: Serialize,
{
    /// Run the action on a controller instance
    fn call(&self, controller: &mut C, params: Params) -> RouterResult<Output>;
}

impl<C, Output, F> Action<C, Output> for F
where
    Output: Serialize,
    F: Fn(&mut C, Params) -> RouterResult<Output> + Clone + Send + Sync + 'static,
{
    fn call(&self, controller: &mut C, params: Params) -> RouterResult<Output> {
        (self)(controller, params)
    }
}

/// Declaration of a controller: its name, factory and actions.
pub struct ControllerDef<C> {
    name: String,
    factory: Factory<C>,
    actions: HashMap<String, BoxedAction>,
    _controller: PhantomData<fn() -> C>,
}

impl<C: 'static> ControllerDef<C> {
    /// Start a controller definition.
    ///
    /// `factory` is called once per dispatch; instances are never reused.
    pub fn new<N, F>(name: N, factory: F) -> Self
    where
        N: Into<String>,
        F: Fn() -> C + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
            actions: HashMap::new(),
            _controller: PhantomData,
        }
    }

    /// Expose an action under `name`. A later action with the same name
    /// replaces the earlier one.
    #[must_use = "This method returns a new ControllerDef and does not modify self"]
    pub fn action<N, Output, A>(mut self, name: N, action: A) -> Self
    where
        N: Into<String>,
        Output: Serialize + 'static,
        A: Action<C, Output>,
    {
        let factory = self.factory.clone();
        let boxed: BoxedAction = Arc::new(move |params| {
            let mut controller = factory();
            let output = action.call(&mut controller, params)?;
            Ok(serde_json::to_value(output)?)
        });
        self.actions.insert(name.into(), boxed);
        self
    }

    /// Controller name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Erase the controller type for storage in a registry
    pub(crate) fn into_boxed(self) -> BoxedController {
        BoxedController {
            name: self.name,
            actions: self.actions,
        }
    }
}

/// Type-erased controller
#[derive(Clone)]
pub(crate) struct BoxedController {
    name: String,
    actions: HashMap<String, BoxedAction>,
}

impl BoxedController {
    pub(crate) fn action(&self, action: &str) -> RouterResult<&BoxedAction> {
        self.actions
            .get(action)
            .ok_or_else(|| RouterError::handler_not_found(action, &self.name))
    }

    pub(crate) fn action_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.actions.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Controllers known to a router, keyed by name.
#[derive(Clone, Default)]
pub struct ControllerRegistry {
    controllers: HashMap<String, BoxedController>,
}

impl ControllerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller, replacing any controller with the same name.
    pub fn register<C: 'static>(&mut self, def: ControllerDef<C>) {
        let controller = def.into_boxed();
        self.controllers.insert(controller.name.clone(), controller);
    }

    /// Fold another registry into this one; later definitions win.
    pub fn extend(&mut self, other: ControllerRegistry) {
        self.controllers.extend(other.controllers);
    }

    /// Resolve a (controller, action) pair to its boxed action.
    pub(crate) fn lookup(&self, controller: &str, action: &str) -> RouterResult<BoxedAction> {
        let boxed = self
            .controllers
            .get(controller)
            .ok_or_else(|| RouterError::controller_not_found(controller))?;
        boxed.action(action).cloned()
    }

    /// Whether `controller` is registered and exposes `action`
    pub fn has_action(&self, controller: &str, action: &str) -> bool {
        self.lookup(controller, action).is_ok()
    }

    /// Registered controller names, sorted
    pub fn controllers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.controllers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Action names of one controller, sorted
    pub fn actions(&self, controller: &str) -> RouterResult<Vec<String>> {
        self.controllers
            .get(controller)
            .map(BoxedController::action_names)
            .ok_or_else(|| RouterError::controller_not_found(controller))
    }

    /// Build one controller instance and run `action` on it.
    pub fn dispatch(&self, controller: &str, action: &str, params: Params) -> RouterResult<Response> {
        let boxed = self.lookup(controller, action)?;
        boxed(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouterErrorCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counter {
        hits: u32,
    }

    impl Counter {
        fn bump(&mut self, _: Params) -> RouterResult<u32> {
            self.hits += 1;
            Ok(self.hits)
        }
    }

    #[test]
    fn test_every_dispatch_builds_one_instance() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = built.clone();

        let mut registry = ControllerRegistry::new();
        registry.register(
            ControllerDef::new("Counter", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Counter { hits: 0 }
            })
            .action("bump", Counter::bump),
        );

        for _ in 0..3 {
            let out = registry.dispatch("Counter", "bump", Params::none()).unwrap();
            // Fresh instance each time, so the count never accumulates
            assert_eq!(out, serde_json::json!(1));
        }
        assert_eq!(built.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_missing_action_names_action_and_controller() {
        let mut registry = ControllerRegistry::new();
        registry.register(ControllerDef::new("SomeController", || Counter { hits: 0 }));

        let err = registry
            .dispatch("SomeController", "missing", Params::none())
            .unwrap_err();
        assert_eq!(err.code, RouterErrorCode::HandlerNotFound);
        assert!(err.message.contains("missing"));
        assert!(err.message.contains("SomeController"));
    }

    #[test]
    fn test_missing_controller() {
        let registry = ControllerRegistry::new();
        let err = registry
            .dispatch("Ghost", "index", Params::none())
            .unwrap_err();
        assert_eq!(err.code, RouterErrorCode::ControllerNotFound);
    }

    #[test]
    fn test_closure_actions_receive_params() {
        let mut registry = ControllerRegistry::new();
        registry.register(ControllerDef::new("Echo", || ()).action(
            "echo",
            |_: &mut (), params: Params| -> RouterResult<Vec<String>> {
                Ok(params.values().to_vec())
            },
        ));

        let out = registry
            .dispatch("Echo", "echo", Params::new(vec!["a".into(), "b".into()]))
            .unwrap();
        assert_eq!(out, serde_json::json!(["a", "b"]));
        assert_eq!(registry.actions("Echo").unwrap(), vec!["echo"]);
    }
}
