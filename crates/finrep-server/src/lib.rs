//! Financial report tool server
//!
//! This crate packages financial-report lookup functions as callable tools
//! for an agent-tool server:
//!
//! - `get_financial_report`: Hong Kong financial statements (income, balance,
//!   cash flow) from the Eastmoney datacenter
//! - `get_financial_indicators`: Hong Kong financial analysis indicators
//! - `get_stock_financial_statement`: statements from the Yahoo fundamentals
//!   timeseries, with an opt-in raw CSV dump
//!
//! Each tool validates its enumerated parameters locally, calls its provider,
//! orients the returned table so rows are reporting periods, and answers with
//! one uniform JSON envelope for success and failure alike.
//!
//! # Example
//!
//! ```rust,ignore
//! use finrep_server::{ServerConfig, register_tools};
//! use finrep_tools::ToolRegistry;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::default());
//!     let registry = ToolRegistry::new();
//!     register_tools(&registry, &config)?;
//!
//!     let tool = registry.get("get_financial_report").expect("registered");
//!     let envelope = tool
//!         .execute(json!({
//!             "stock_code": "00700",
//!             "report_type": "income",
//!             "period_type": "year",
//!             "period": 3
//!         }))
//!         .await?;
//!     println!("{envelope}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod request;
pub mod table;
pub mod tools;

// Re-export main types for convenience
pub use config::ServerConfig;
pub use envelope::ReportPayload;
pub use error::{ReportError, Result};
pub use request::{PeriodKind, ReportKind};
pub use table::{PeriodRow, RawTable};
pub use tools::{
    FinancialIndicatorsTool, FinancialReportTool, FinancialStatementTool, register_tools,
};
