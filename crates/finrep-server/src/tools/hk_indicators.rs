//! Tool for fetching Hong Kong financial analysis indicators

use async_trait::async_trait;
use finrep_tools::{Result as ToolResult, Tool};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::EastmoneyClient;
use crate::config::ServerConfig;
use crate::envelope::{self, ReportPayload};
use crate::error::{ReportError, Result};
use crate::request::normalize_hk_code;

/// Tool for fetching Hong Kong financial analysis indicators
///
/// Indicators (margins, returns, per-share figures) have no period-count
/// parameter on the provider side; every available period is returned.
pub struct FinancialIndicatorsTool {
    client: EastmoneyClient,
    _config: Arc<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct IndicatorParams {
    stock_code: String,
    period: String,
}

impl FinancialIndicatorsTool {
    /// Create a new financial indicators tool
    pub fn new(config: Arc<ServerConfig>) -> Result<Self> {
        Ok(Self {
            client: EastmoneyClient::new(&config)?,
            _config: config,
        })
    }

    async fn fetch_indicators(&self, params: IndicatorParams) -> Result<ReportPayload> {
        let stock_code = normalize_hk_code(&params.stock_code);

        let table = self
            .client
            .hk_indicators(&stock_code, &params.period)
            .await?;
        let rows = table.into_period_rows();
        if rows.is_empty() {
            return Err(ReportError::EmptyResult { symbol: stock_code });
        }

        Ok(ReportPayload::from_all_rows(
            stock_code,
            "indicators",
            params.period,
            rows,
        ))
    }
}

#[async_trait]
impl Tool for FinancialIndicatorsTool {
    async fn execute(&self, params: Value) -> ToolResult<Value> {
        let params: IndicatorParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(envelope::error(&ReportError::InvalidParams(e.to_string())));
            }
        };

        Ok(envelope::from_result(self.fetch_indicators(params).await))
    }

    fn name(&self) -> &str {
        "get_financial_indicators"
    }

    fn description(&self) -> &str {
        "Fetch financial analysis indicators for a Hong Kong stock as a JSON \
         envelope: profitability, solvency, and per-share metrics across \
         reporting periods."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "stock_code": {
                    "type": "string",
                    "description": "Hong Kong stock code, e.g. '00700'"
                },
                "period": {
                    "type": "string",
                    "description": "Period selector passed to the provider, e.g. '年报' for annual reports"
                }
            },
            "required": ["stock_code", "period"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool() -> FinancialIndicatorsTool {
        FinancialIndicatorsTool::new(Arc::new(ServerConfig::default())).expect("client builds")
    }

    #[test]
    fn test_tool_metadata() {
        let tool = tool();
        assert_eq!(tool.name(), "get_financial_indicators");
        assert!(!tool.description().is_empty());
        assert_eq!(
            tool.input_schema()["required"],
            json!(["stock_code", "period"])
        );
    }

    #[tokio::test]
    async fn test_rejects_malformed_params() {
        let tool = tool();
        let envelope = tool
            .execute(json!({"stock_code": "00700"}))
            .await
            .expect("failures are enveloped");

        assert_eq!(envelope["status"], "error");
        assert_eq!(envelope["code"], 400);
        assert!(envelope["message"].as_str().unwrap().contains("period"));
    }
}
