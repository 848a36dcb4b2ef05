//! Tool for fetching Hong Kong financial statements

use async_trait::async_trait;
use finrep_tools::{Result as ToolResult, Tool};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::EastmoneyClient;
use crate::config::ServerConfig;
use crate::envelope::{self, ReportPayload};
use crate::error::{ReportError, Result};
use crate::request::{PeriodKind, ReportKind, normalize_hk_code};

/// Tool for fetching Hong Kong financial statements
pub struct FinancialReportTool {
    client: EastmoneyClient,
    _config: Arc<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct ReportParams {
    stock_code: String,
    report_type: String,
    period_type: String,
    #[serde(default = "default_period")]
    period: usize,
}

fn default_period() -> usize {
    5
}

impl FinancialReportTool {
    /// Create a new financial report tool
    pub fn new(config: Arc<ServerConfig>) -> Result<Self> {
        Ok(Self {
            client: EastmoneyClient::new(&config)?,
            _config: config,
        })
    }

    /// Validate, fetch, and normalize one statement request
    async fn fetch_report(&self, params: ReportParams) -> Result<ReportPayload> {
        // Enum validation runs before the provider is touched
        let kind = ReportKind::parse("report_type", &params.report_type)?;
        let period = PeriodKind::parse("period_type", &params.period_type)?;
        let stock_code = normalize_hk_code(&params.stock_code);

        let table = self.client.hk_report(&stock_code, kind, period).await?;
        let rows = table.into_period_rows();
        if rows.is_empty() {
            return Err(ReportError::EmptyResult { symbol: stock_code });
        }

        Ok(ReportPayload::from_rows(
            stock_code,
            kind.as_str(),
            period.as_report_str(),
            rows,
            params.period,
        ))
    }
}

#[async_trait]
impl Tool for FinancialReportTool {
    async fn execute(&self, params: Value) -> ToolResult<Value> {
        let params: ReportParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(envelope::error(&ReportError::InvalidParams(e.to_string())));
            }
        };

        Ok(envelope::from_result(self.fetch_report(params).await))
    }

    fn name(&self) -> &str {
        "get_financial_report"
    }

    fn description(&self) -> &str {
        "Fetch a Hong Kong stock's financial statement as a JSON envelope. \
         Supports the income statement, balance sheet, and cash-flow statement, \
         at annual ('year') or reporting-period ('report') granularity, \
         returning the most recent periods first."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "stock_code": {
                    "type": "string",
                    "description": "Hong Kong stock code, e.g. '00700'"
                },
                "report_type": {
                    "type": "string",
                    "description": "Statement to fetch",
                    "enum": ["income", "balance", "cash"]
                },
                "period_type": {
                    "type": "string",
                    "description": "Reporting cadence: 'year' for annual reports, 'report' for all reporting periods",
                    "enum": ["year", "report"]
                },
                "period": {
                    "type": "integer",
                    "description": "Number of periods to return",
                    "minimum": 0,
                    "default": 5
                }
            },
            "required": ["stock_code", "report_type", "period_type"]
        })
    }
}
