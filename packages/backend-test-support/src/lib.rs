//! Backend test support utilities
//!
//! Shared helpers for the backend's integration tests: logging bootstrap
//! and assertions over the Problem Details error contract.

pub mod logging;
pub mod problem_details;
