//! Router implementation with builder pattern
//!
//! This module provides the [`Router`] and [`CompiledRouter`] types.
//!
//! # Router
//!
//! The [`Router`] type collects controllers, routes and entity
//! registrations:
//!
//! ```rust,ignore
//! let router = Router::new()
//!     .controller(books)
//!     .post_type("book", "BookController")
//!     .get("book/{id}", "BookController", "show");
//! ```
//!
//! # Compiled Router
//!
//! Compiling validates every target and pre-compiles every pattern:
//!
//! ```rust,ignore
//! let compiled = router.compile()?;
//! compiled.install(&mut host);
//! compiled.sync_rewrite_cache(&mut host, &mut options)?;
//! ```

mod bridge;
mod core;
mod types;

pub use self::core::{CompiledRouter, Router};
pub use types::{CacheSync, Resolution, ResolvedRoute};

#[cfg(test)]
mod tests;
