#![warn(missing_docs)]
//! # Hook Router
//!
//! Declarative routing and controller dispatch for plugins running inside a
//! hook-driven content-management host.
//!
//! ## Overview
//!
//! A plugin declares, in one place:
//! - **Routes**: verb + URL pattern bound to a controller action
//! - **Post types**: a content type plus its admin CRUD screens and form hooks
//! - **Resources**: admin CRUD screens and form hooks without a content type
//!
//! The router then translates those declarations into host registrations,
//! resolves incoming front-end requests, and keeps the host's rewrite cache
//! fresh by fingerprinting the route table.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       Plugin code                        │
//! │   Router::new().controller(..).post_type(..).get(..)     │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ compile()
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                     CompiledRouter                       │
//! │  ┌────────────┐  ┌──────────────┐  ┌──────────────────┐  │
//! │  │ RouteTable │  │ RoutePattern │  │ ControllerRegistry│ │
//! │  └─────┬──────┘  └──────┬───────┘  └────────┬─────────┘  │
//! └────────┼────────────────┼───────────────────┼────────────┘
//!          │ install()      │ handle_request()  │ dispatch()
//!          ▼                ▼                   ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │          HostPlatform  /  OptionStore (adapters)         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ### 1. Define a Controller
//!
//! ```rust,ignore
//! use hook_router::prelude::*;
//!
//! #[derive(Default)]
//! struct BookController;
//!
//! impl BookController {
//!     fn index(&mut self, _: Params) -> RouterResult<Vec<Book>> { .. }
//!     fn show(&mut self, params: Params) -> RouterResult<Book> {
//!         let id: u32 = params.parse(0)?;
//!         ..
//!     }
//! }
//!
//! fn books() -> ControllerDef<BookController> {
//!     ControllerDef::new("BookController", BookController::default)
//!         .action("index", BookController::index)
//!         .action("show", BookController::show)
//! }
//! ```
//!
//! ### 2. Declare Routes
//!
//! ```rust,ignore
//! let router = Router::new()
//!     .controller(books())
//!     .post_type("book", "BookController")
//!     .get("book/{id}", "BookController", "show")
//!     .compile()?;
//! ```
//!
//! ### 3. Wire It Into the Host
//!
//! ```rust,ignore
//! router.install(&mut host);
//! router.sync_rewrite_cache(&mut host, &mut options)?;
//!
//! match router.handle_request(Verb::Get, request_path)? {
//!     Resolution::Resolved { response, .. } => render(response),
//!     Resolution::Unresolved => { /* host continues normally */ }
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`RouterResult`]. Declaration mistakes
//! (unknown verb, missing action, unknown controller) surface from
//! [`Router::route_named`] and [`Router::compile`], before any request is
//! served.

mod config;
mod controller;
mod entity;
mod error;
mod host;
pub mod logging;
pub mod pattern;
mod router;
mod store;
mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::{ConfigValidationError, ResolutionStrategy, RouterConfig};
pub use controller::{Action, ControllerDef, ControllerRegistry};
pub use entity::{AdminOperation, EntityKind, EntityRegistration, FormIntent};
pub use error::{RouterError, RouterErrorCode, RouterResult};
pub use host::{
    AdminPage, ContentTypeSchema, DispatchTarget, FormHook, HostPlatform, MenuPlacement,
    RecordingHost, RewriteRule,
};
pub use logging::DispatchId;
pub use pattern::{RoutePattern, to_match_expression};
pub use router::{CacheSync, CompiledRouter, Resolution, ResolvedRoute, Router};
pub use store::{JsonFileOptionStore, MemoryOptionStore, OptionStore};
pub use table::{Route, RouteTable};
pub use types::*;

/// Prelude for convenient imports
///
/// ```rust,ignore
/// use hook_router::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Declarations
        AdminOperation, ControllerDef, EntityKind, FormIntent, Params, Router, Verb,
        // Resolution
        CacheSync, CompiledRouter, Resolution, Response, SuccessResponse,
        // Host adapters
        HostPlatform, JsonFileOptionStore, MemoryOptionStore, OptionStore, RecordingHost,
        // Configuration
        ResolutionStrategy, RouterConfig,
        // Errors
        RouterError, RouterErrorCode, RouterResult,
    };
}
