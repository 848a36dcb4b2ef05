//! Shared utilities for the finrep workspace
//!
//! Currently limited to tracing initialization for the server binary.

pub mod logging;

pub use logging::init_tracing;
