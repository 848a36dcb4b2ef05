//! Tool framework for finrep
//!
//! This crate provides the trait and registry used to expose financial-report
//! lookup functions as callable tools for an agent-tool server.

pub mod error;
pub mod registry;
pub mod tool;

pub use error::{Error, Result};
pub use registry::ToolRegistry;
pub use tool::Tool;
