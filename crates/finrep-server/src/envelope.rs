//! Uniform JSON response envelope
//!
//! Every tool outcome — success, validation failure, empty result, provider
//! failure — is reported through this one shape. Serialization goes through
//! `serde_json`, which leaves non-ASCII text unescaped, so localized field
//! names and values round-trip as readable characters.

use crate::error::ReportError;
use crate::table::PeriodRow;
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Successful report payload: request echo plus period-oriented records
#[derive(Debug, Clone, Serialize)]
pub struct ReportPayload {
    pub stock_code: String,
    pub report_type: String,
    pub period_type: String,
    pub periods: Vec<String>,
    pub data: Vec<Map<String, Value>>,
}

impl ReportPayload {
    /// Assemble a payload from normalized rows, keeping at most `limit` rows
    /// in the order the provider returned them
    pub fn from_rows(
        stock_code: impl Into<String>,
        report_type: impl Into<String>,
        period_type: impl Into<String>,
        mut rows: Vec<PeriodRow>,
        limit: usize,
    ) -> Self {
        rows.truncate(limit);
        let (periods, data) = rows
            .into_iter()
            .map(|row| (row.period, row.fields))
            .unzip();
        Self {
            stock_code: stock_code.into(),
            report_type: report_type.into(),
            period_type: period_type.into(),
            periods,
            data,
        }
    }

    /// Assemble a payload from all normalized rows, untruncated
    pub fn from_all_rows(
        stock_code: impl Into<String>,
        report_type: impl Into<String>,
        period_type: impl Into<String>,
        rows: Vec<PeriodRow>,
    ) -> Self {
        let limit = rows.len();
        Self::from_rows(stock_code, report_type, period_type, rows, limit)
    }
}

/// Success envelope as a JSON value
pub fn success(payload: &ReportPayload) -> Value {
    json!({
        "status": "success",
        "data": payload,
    })
}

/// Error envelope as a JSON value
pub fn error(err: &ReportError) -> Value {
    json!({
        "status": "error",
        "code": err.code(),
        "message": err.to_string(),
        "hint": err.hint(),
    })
}

/// Convert a tool outcome into the envelope
pub fn from_result(result: Result<ReportPayload, ReportError>) -> Value {
    match result {
        Ok(payload) => success(&payload),
        Err(err) => error(&err),
    }
}

/// Serialize an envelope to its JSON string form
pub fn to_string(envelope: &Value) -> String {
    serde_json::to_string(envelope).unwrap_or_else(|_| {
        r#"{"status":"error","code":500,"message":"Envelope serialization failed","hint":"Report this as a server bug"}"#.to_string()
    })
}
