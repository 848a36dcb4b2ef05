//! Yahoo Finance fundamentals timeseries client
//!
//! The table-selection provider shape: each (report kind, period
//! granularity) pair maps to a precomputed list of prefixed line-item types
//! for the fundamentals-timeseries endpoint. The response is one series per
//! line item, so the resulting table is item-oriented and gets transposed by
//! the shared normalization step.

use crate::config::ServerConfig;
use crate::error::{ReportError, Result};
use crate::request::{PeriodKind, ReportKind};
use crate::table::{ItemRow, RawTable};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

const BASE_URL: &str =
    "https://query2.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries";

/// How far back statements are requested; quarterly histories are shorter in
/// practice, the provider simply returns what it has
const LOOKBACK_DAYS: i64 = 7 * 365;

/// Yahoo Finance fundamentals timeseries client
#[derive(Debug, Clone)]
pub struct YahooFundamentalsClient {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TimeseriesResponse {
    timeseries: TimeseriesBody,
}

#[derive(Debug, Deserialize)]
struct TimeseriesBody {
    #[serde(default)]
    result: Vec<TimeseriesEntry>,
    error: Option<Value>,
}

/// One series per requested type; the series values live under a key equal
/// to the type name, so they are captured through the flattened remainder
#[derive(Debug, Deserialize)]
struct TimeseriesEntry {
    meta: TimeseriesMeta,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesMeta {
    #[serde(rename = "type", default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesPoint {
    #[serde(rename = "asOfDate")]
    as_of_date: String,
    #[serde(rename = "reportedValue")]
    reported_value: Option<ReportedValue>,
}

#[derive(Debug, Deserialize)]
struct ReportedValue {
    raw: Option<f64>,
    fmt: Option<String>,
}

impl YahooFundamentalsClient {
    /// Create a new client using the configured timeout and user agent
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch one financial statement as an item-oriented table
    pub async fn statement(
        &self,
        symbol: &str,
        kind: ReportKind,
        period: PeriodKind,
    ) -> Result<RawTable> {
        let types = statement_types(kind, period).join(",");
        let now = Utc::now();
        let period1 = (now - chrono::Duration::days(LOOKBACK_DAYS)).timestamp().to_string();
        let period2 = now.timestamp().to_string();

        let params = [
            ("symbol", symbol),
            ("type", types.as_str()),
            ("period1", period1.as_str()),
            ("period2", period2.as_str()),
            ("merge", "false"),
            ("padTimeSeries", "false"),
        ];
        tracing::debug!(symbol, types = types.as_str(), "fetching fundamentals timeseries");

        let url = format!("{BASE_URL}/{symbol}");
        let response = self.client.get(url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(ReportError::Provider(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body: TimeseriesResponse = response.json().await?;
        build_table(body, period.yahoo_prefix())
    }
}

/// The six precomputed accessor type lists, keyed by (kind, period)
fn statement_types(kind: ReportKind, period: PeriodKind) -> Vec<String> {
    kind.yahoo_items()
        .iter()
        .map(|item| format!("{}{item}", period.yahoo_prefix()))
        .collect()
}

/// Assemble the item-oriented table from the timeseries response
///
/// Period columns are established in first-seen order, iterating each series
/// newest-first because the endpoint reports oldest-first while statements
/// are consumed newest-first, like the per-report accessors this mirrors.
fn build_table(body: TimeseriesResponse, prefix: &str) -> Result<RawTable> {
    if let Some(error) = body.timeseries.error {
        if !error.is_null() {
            return Err(ReportError::Provider(error.to_string()));
        }
    }

    let mut periods: Vec<String> = Vec::new();
    let mut parsed: Vec<(String, HashMap<String, Value>)> = Vec::new();

    for entry in body.timeseries.result {
        let Some(type_name) = entry.meta.types.first() else {
            continue;
        };
        let Some(series) = entry.rest.get(type_name) else {
            continue;
        };

        let points: Vec<Option<TimeseriesPoint>> = serde_json::from_value(series.clone())?;
        let item_name = type_name
            .strip_prefix(prefix)
            .unwrap_or(type_name.as_str())
            .to_string();

        let mut by_period: HashMap<String, Value> = HashMap::new();
        for point in points.into_iter().rev().flatten() {
            if !periods.contains(&point.as_of_date) {
                periods.push(point.as_of_date.clone());
            }
            by_period.insert(point.as_of_date, reported_value(point.reported_value));
        }
        parsed.push((item_name, by_period));
    }

    let items = parsed
        .into_iter()
        .map(|(name, by_period)| ItemRow {
            name,
            values: periods
                .iter()
                .map(|p| by_period.get(p).cloned().unwrap_or(Value::Null))
                .collect(),
        })
        .collect();

    Ok(RawTable::ItemRows { periods, items })
}

/// Prefer the raw figure; fall back to the formatted string
fn reported_value(value: Option<ReportedValue>) -> Value {
    match value {
        Some(ReportedValue { raw: Some(raw), .. }) => Value::from(raw),
        Some(ReportedValue { fmt: Some(fmt), .. }) => Value::String(fmt),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statement_types() {
        let types = statement_types(ReportKind::Income, PeriodKind::Annual);
        assert!(types.contains(&"annualTotalRevenue".to_string()));

        let types = statement_types(ReportKind::CashFlow, PeriodKind::Quarterly);
        assert!(types.contains(&"quarterlyOperatingCashFlow".to_string()));
        assert_eq!(types.len(), ReportKind::CashFlow.yahoo_items().len());
    }

    #[test]
    fn test_build_table_orients_items() {
        let body: TimeseriesResponse = serde_json::from_value(json!({
            "timeseries": {
                "result": [
                    {
                        "meta": {"symbol": ["AAPL"], "type": ["annualTotalRevenue"]},
                        "timestamp": [1632960000, 1664496000],
                        "annualTotalRevenue": [
                            {"asOfDate": "2021-09-30", "periodType": "12M",
                             "reportedValue": {"raw": 365817000000.0, "fmt": "365.82B"}},
                            {"asOfDate": "2022-09-30", "periodType": "12M",
                             "reportedValue": {"raw": 394328000000.0, "fmt": "394.33B"}}
                        ]
                    },
                    {
                        "meta": {"symbol": ["AAPL"], "type": ["annualNetIncome"]},
                        "timestamp": [1664496000],
                        "annualNetIncome": [
                            {"asOfDate": "2022-09-30", "periodType": "12M",
                             "reportedValue": {"raw": 99803000000.0, "fmt": "99.80B"}}
                        ]
                    }
                ],
                "error": null
            }
        }))
        .unwrap();

        let table = build_table(body, "annual").unwrap();
        let RawTable::ItemRows { periods, items } = table else {
            panic!("expected item-oriented table");
        };

        // Newest period leads
        assert_eq!(periods, vec!["2022-09-30".to_string(), "2021-09-30".to_string()]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "TotalRevenue");
        assert_eq!(items[0].values[0], json!(394328000000.0));
        assert_eq!(items[0].values[1], json!(365817000000.0));
        // Gap in the shorter series becomes a null
        assert_eq!(items[1].name, "NetIncome");
        assert_eq!(items[1].values[1], Value::Null);
    }

    #[test]
    fn test_build_table_surfaces_provider_error() {
        let body: TimeseriesResponse = serde_json::from_value(json!({
            "timeseries": {
                "result": [],
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }))
        .unwrap();

        let err = build_table(body, "annual").unwrap_err();
        assert!(err.to_string().contains("No data found"));
        assert_eq!(err.code(), 500);
    }

    #[test]
    fn test_build_table_null_points_skipped() {
        let body: TimeseriesResponse = serde_json::from_value(json!({
            "timeseries": {
                "result": [
                    {
                        "meta": {"symbol": ["AAPL"], "type": ["quarterlyFreeCashFlow"]},
                        "timestamp": [1672444800],
                        "quarterlyFreeCashFlow": [
                            null,
                            {"asOfDate": "2022-12-31", "periodType": "3M",
                             "reportedValue": {"raw": 30218000000.0, "fmt": "30.22B"}}
                        ]
                    }
                ],
                "error": null
            }
        }))
        .unwrap();

        let table = build_table(body, "quarterly").unwrap();
        let RawTable::ItemRows { periods, items } = table else {
            panic!("expected item-oriented table");
        };
        assert_eq!(periods, vec!["2022-12-31".to_string()]);
        assert_eq!(items[0].name, "FreeCashFlow");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_statement() {
        let config = ServerConfig::default();
        let client = YahooFundamentalsClient::new(&config).unwrap();
        let table = client
            .statement("AAPL", ReportKind::Income, PeriodKind::Annual)
            .await
            .unwrap();
        assert!(!table.is_empty());
    }
}
