//! Test module for hook-router
//!
//! Property-based tests for configuration and error handling. Router
//! behaviour is covered next to the router in `router/tests`.


#[cfg(test)]
pub mod error_tests;
