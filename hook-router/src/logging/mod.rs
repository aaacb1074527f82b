//! Structured logging for registration, installation and dispatch
//!
//! All events go through `tracing`; installing a subscriber is left to the
//! host binary.
//!
//! - **types**: [`DispatchId`] for correlating resolution and dispatch
//! - **lifecycle**: registration, compilation and installation events
//! - **events**: per-request resolution, dispatch and cache-sync events

mod events;
mod lifecycle;
mod types;

pub use events::{DispatchLogEvent, DispatchSource, log_dispatch, log_resolution, log_rewrite_cache_sync};
pub use lifecycle::{log_entity_registered, log_host_installed, log_route_registered, log_router_compiled};
pub use types::{DispatchId, SHORT_ID_LENGTH};
