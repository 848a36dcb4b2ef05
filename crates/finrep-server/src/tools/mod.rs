//! Financial report tools

pub mod hk_indicators;
pub mod hk_report;
pub mod statement;

pub use hk_indicators::FinancialIndicatorsTool;
pub use hk_report::FinancialReportTool;
pub use statement::FinancialStatementTool;

use crate::config::ServerConfig;
use crate::error::Result;
use finrep_tools::ToolRegistry;
use std::sync::Arc;

/// Register every report tool into an explicitly provided registry
pub fn register_tools(registry: &ToolRegistry, config: &Arc<ServerConfig>) -> Result<()> {
    registry.register(Arc::new(FinancialReportTool::new(config.clone())?));
    registry.register(Arc::new(FinancialIndicatorsTool::new(config.clone())?));
    registry.register(Arc::new(FinancialStatementTool::new(config.clone())?));
    Ok(())
}
