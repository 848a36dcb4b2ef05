//! Eastmoney datacenter API client
//!
//! Serves Hong Kong financial statements and analysis indicators. The
//! statement endpoint is the triple-parameter provider shape: stock code,
//! localized statement name, localized indicator, passed as independent
//! query arguments. Rows come back already period-oriented, labeled by
//! `REPORT_DATE`.

use crate::config::ServerConfig;
use crate::error::{ReportError, Result};
use crate::request::{PeriodKind, ReportKind};
use crate::table::RawTable;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

const BASE_URL: &str = "https://datacenter.eastmoney.com/securities/api/data/v1/get";
const PAGE_SIZE: &str = "200";

const REPORT_NAME_STATEMENT: &str = "RPT_HKF10_FN_REPORT";
const REPORT_NAME_INDICATOR: &str = "RPT_HKF10_FN_MAININDICATOR";

/// Eastmoney datacenter API client
#[derive(Debug, Clone)]
pub struct EastmoneyClient {
    client: Client,
}

/// Response envelope of the datacenter endpoint
#[derive(Debug, Deserialize)]
struct DataCenterResponse {
    success: bool,
    message: Option<String>,
    result: Option<DataCenterResult>,
}

#[derive(Debug, Deserialize)]
struct DataCenterResult {
    #[serde(default)]
    data: Vec<Map<String, Value>>,
}

impl EastmoneyClient {
    /// Create a new client using the configured timeout and user agent
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a Hong Kong financial statement
    ///
    /// One row per reporting period, newest first as the provider returns
    /// them, labeled by `REPORT_DATE`.
    pub async fn hk_report(
        &self,
        symbol: &str,
        kind: ReportKind,
        period: PeriodKind,
    ) -> Result<RawTable> {
        let filter = format!(
            r#"(SECUCODE="{symbol}.HK")(STATEMENT_NAME="{}")(REPORT_TYPE="{}")"#,
            kind.eastmoney_statement(),
            period.eastmoney_indicator(),
        );
        tracing::debug!(symbol, statement = kind.eastmoney_statement(), "fetching HK report");

        let rows = self.fetch(REPORT_NAME_STATEMENT, &filter).await?;
        Ok(RawTable::from_labeled_rows(rows, "REPORT_DATE"))
    }

    /// Fetch Hong Kong financial analysis indicators
    ///
    /// The period string is passed through to the provider unvalidated; it
    /// has no fixed enumeration on this endpoint.
    pub async fn hk_indicators(&self, symbol: &str, period: &str) -> Result<RawTable> {
        let filter = format!(r#"(SECUCODE="{symbol}.HK")(REPORT_TYPE="{period}")"#);
        tracing::debug!(symbol, period, "fetching HK indicators");

        let rows = self.fetch(REPORT_NAME_INDICATOR, &filter).await?;
        Ok(RawTable::from_labeled_rows(rows, "REPORT_DATE"))
    }

    async fn fetch(&self, report_name: &str, filter: &str) -> Result<Vec<Map<String, Value>>> {
        let params = [
            ("reportName", report_name),
            ("columns", "ALL"),
            ("filter", filter),
            ("pageNumber", "1"),
            ("pageSize", PAGE_SIZE),
            ("sortColumns", "REPORT_DATE"),
            ("sortTypes", "-1"),
            ("source", "F10"),
            ("client", "PC"),
        ];

        let response = self.client.get(BASE_URL).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(ReportError::Provider(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body: DataCenterResponse = response.json().await?;
        parse_rows(body)
    }
}

/// Unpack the datacenter envelope, surfacing provider-side rejections
fn parse_rows(body: DataCenterResponse) -> Result<Vec<Map<String, Value>>> {
    if !body.success {
        return Err(ReportError::Provider(
            body.message
                .unwrap_or_else(|| "datacenter request rejected".to_string()),
        ));
    }

    Ok(body.result.map(|r| r.data).unwrap_or_default())
}
