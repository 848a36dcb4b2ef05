//! Tool for fetching financial statements from the fundamentals timeseries

use async_trait::async_trait;
use finrep_tools::{Result as ToolResult, Tool};
use serde::Deserialize;
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;

use crate::api::YahooFundamentalsClient;
use crate::config::ServerConfig;
use crate::envelope::{self, ReportPayload};
use crate::error::{ReportError, Result};
use crate::request::{PeriodKind, ReportKind};
use crate::table::RawTable;

/// Tool for fetching financial statements via the fundamentals timeseries
///
/// When a CSV dump directory is configured, the raw (still item-oriented)
/// table is also written to `<symbol>+<report_table>_<period_type>.csv`
/// there. The dump happens only after a successful provider call and never
/// fails the request.
pub struct FinancialStatementTool {
    client: YahooFundamentalsClient,
    config: Arc<ServerConfig>,
}

#[derive(Debug, Deserialize)]
struct StatementParams {
    symbol: String,
    report_table: String,
    period_type: String,
    #[serde(default = "default_period")]
    period: usize,
}

fn default_period() -> usize {
    5
}

impl FinancialStatementTool {
    /// Create a new financial statement tool
    pub fn new(config: Arc<ServerConfig>) -> Result<Self> {
        Ok(Self {
            client: YahooFundamentalsClient::new(&config)?,
            config,
        })
    }

    async fn fetch_statement(&self, params: StatementParams) -> Result<ReportPayload> {
        // Enum validation runs before the provider is touched
        let kind = ReportKind::parse("report_table", &params.report_table)?;
        let period = PeriodKind::parse("period_type", &params.period_type)?;
        let symbol = params.symbol.trim().to_uppercase();

        let table = self.client.statement(&symbol, kind, period).await?;

        if let Some(dir) = &self.config.csv_dump_dir {
            dump_raw_table(dir, &symbol, kind, period, &table);
        }

        let rows = table.into_period_rows();
        if rows.is_empty() {
            return Err(ReportError::EmptyResult { symbol });
        }

        Ok(ReportPayload::from_rows(
            symbol,
            kind.as_str(),
            period.as_statement_str(),
            rows,
            params.period,
        ))
    }
}

/// Write the raw provider table to the dump directory, logging failures
fn dump_raw_table(dir: &Path, symbol: &str, kind: ReportKind, period: PeriodKind, table: &RawTable) {
    let path = dir.join(format!(
        "{symbol}+{}_{}.csv",
        kind.as_str(),
        period.as_statement_str()
    ));
    if let Err(err) = write_csv(&path, table) {
        tracing::warn!("CSV dump to {} failed: {err}", path.display());
    }
}

fn write_csv(path: &Path, table: &RawTable) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    match table {
        RawTable::ItemRows { periods, items } => {
            let mut header = vec!["item".to_string()];
            header.extend(periods.iter().cloned());
            writer.write_record(&header)?;

            for item in items {
                let mut record = vec![item.name.clone()];
                record.extend(item.values.iter().map(csv_cell));
                writer.write_record(&record)?;
            }
        }
        RawTable::PeriodRows(rows) => {
            // Column union in first-seen order
            let mut columns: Vec<String> = Vec::new();
            for row in rows {
                for key in row.fields.keys() {
                    if !columns.contains(key) {
                        columns.push(key.clone());
                    }
                }
            }

            let mut header = vec!["period".to_string()];
            header.extend(columns.iter().cloned());
            writer.write_record(&header)?;

            for row in rows {
                let mut record = vec![row.period.clone()];
                record.extend(
                    columns
                        .iter()
                        .map(|c| csv_cell(row.fields.get(c).unwrap_or(&Value::Null))),
                );
                writer.write_record(&record)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl Tool for FinancialStatementTool {
    async fn execute(&self, params: Value) -> ToolResult<Value> {
        let params: StatementParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return Ok(envelope::error(&ReportError::InvalidParams(e.to_string())));
            }
        };

        Ok(envelope::from_result(self.fetch_statement(params).await))
    }

    fn name(&self) -> &str {
        "get_stock_financial_statement"
    }

    fn description(&self) -> &str {
        "Fetch a stock's financial statement (income, balance, or cash) from \
         the fundamentals timeseries as a JSON envelope, at annual or \
         quarterly granularity, newest periods first."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol, e.g. 'AAPL' or '0700.HK'"
                },
                "report_table": {
                    "type": "string",
                    "description": "Statement to fetch",
                    "enum": ["income", "balance", "cash"]
                },
                "period_type": {
                    "type": "string",
                    "description": "Reporting cadence",
                    "enum": ["annual", "quarterly"]
                },
                "period": {
                    "type": "integer",
                    "description": "Number of periods to return",
                    "minimum": 0,
                    "default": 5
                }
            },
            "required": ["symbol", "report_table", "period_type"]
        })
    }
}
