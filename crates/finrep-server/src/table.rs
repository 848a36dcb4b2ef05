//! Tabular provider payloads and orientation normalization
//!
//! Providers disagree on table orientation: the HK report endpoint returns
//! one row per reporting period, while the fundamentals timeseries returns
//! one row per line item with a column per period. Every provider call is
//! followed by exactly one [`RawTable::into_period_rows`] so the rest of the
//! pipeline only ever sees period-oriented rows.

use serde_json::{Map, Value};

/// One reporting period with its line-item fields
///
/// The period label is hoisted out of `fields`; it appears only in the
/// top-level `periods` list of the response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub period: String,
    pub fields: Map<String, Value>,
}

/// One line item across periods; `values` is parallel to the table's period
/// list, with `Value::Null` where the provider reported no figure
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub values: Vec<Value>,
}

/// Raw provider table, in whichever orientation the provider uses
#[derive(Debug, Clone)]
pub enum RawTable {
    /// Rows are already one-per-period
    PeriodRows(Vec<PeriodRow>),
    /// Rows are line items, columns are periods
    ItemRows {
        periods: Vec<String>,
        items: Vec<ItemRow>,
    },
}

impl RawTable {
    /// Build a period-oriented table from provider records carrying their
    /// period label inline under `label_field`
    ///
    /// The label field is removed from each record; records without it are
    /// dropped. Timestamps like "2023-12-31 00:00:00" keep only the date.
    pub fn from_labeled_rows(rows: Vec<Map<String, Value>>, label_field: &str) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|mut fields| {
                let label = fields.remove(label_field)?;
                Some(PeriodRow {
                    period: period_label(&label),
                    fields,
                })
            })
            .collect();
        Self::PeriodRows(rows)
    }

    /// Whether the table holds no rows at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::PeriodRows(rows) => rows.is_empty(),
            Self::ItemRows { periods, items } => periods.is_empty() || items.is_empty(),
        }
    }

    /// Orient the table so rows are periods
    ///
    /// Period-oriented tables pass through unchanged; item-oriented tables
    /// are transposed. Row order follows the provider's period order; no
    /// date sort is applied.
    pub fn into_period_rows(self) -> Vec<PeriodRow> {
        match self {
            Self::PeriodRows(rows) => rows,
            Self::ItemRows { periods, items } => periods
                .iter()
                .enumerate()
                .map(|(idx, period)| {
                    let mut fields = Map::new();
                    for item in &items {
                        let value = item.values.get(idx).cloned().unwrap_or(Value::Null);
                        fields.insert(item.name.clone(), value);
                    }
                    PeriodRow {
                        period: period.clone(),
                        fields,
                    }
                })
                .collect(),
        }
    }
}

/// Render a period label value as a plain string
///
/// Provider date stamps carry a midnight time component; only the date part
/// is kept.
fn period_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.split_whitespace().next().unwrap_or(s.as_str()).to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_labeled_rows_hoist_period() {
        let table = RawTable::from_labeled_rows(
            vec![
                record(&[
                    ("REPORT_DATE", json!("2023-12-31 00:00:00")),
                    ("营业收入", json!(609_015_000_000.0)),
                ]),
                record(&[
                    ("REPORT_DATE", json!("2022-12-31 00:00:00")),
                    ("营业收入", json!(554_552_000_000.0)),
                ]),
            ],
            "REPORT_DATE",
        );

        let rows = table.into_period_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2023-12-31");
        assert!(!rows[0].fields.contains_key("REPORT_DATE"));
        assert!(rows[0].fields.contains_key("营业收入"));
    }

    #[test]
    fn test_labeled_rows_drop_unlabeled() {
        let table = RawTable::from_labeled_rows(
            vec![record(&[("营业收入", json!(1.0))])],
            "REPORT_DATE",
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_transpose_item_rows() {
        let table = RawTable::ItemRows {
            periods: vec!["2023-09-30".to_string(), "2022-09-30".to_string()],
            items: vec![
                ItemRow {
                    name: "TotalRevenue".to_string(),
                    values: vec![json!(383_285_000_000.0), json!(394_328_000_000.0)],
                },
                ItemRow {
                    name: "NetIncome".to_string(),
                    values: vec![json!(96_995_000_000.0)],
                },
            ],
        };

        let rows = table.into_period_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2023-09-30");
        assert_eq!(rows[0].fields["TotalRevenue"], json!(383_285_000_000.0));
        // Missing figures become explicit nulls after transposition
        assert_eq!(rows[1].fields["NetIncome"], Value::Null);
    }

    #[test]
    fn test_transpose_preserves_provider_order() {
        let periods: Vec<String> = ["2021-12-31", "2023-12-31", "2022-12-31"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let table = RawTable::ItemRows {
            periods: periods.clone(),
            items: vec![ItemRow {
                name: "TotalAssets".to_string(),
                values: vec![json!(1.0), json!(2.0), json!(3.0)],
            }],
        };

        let rows = table.into_period_rows();
        let labels: Vec<String> = rows.iter().map(|r| r.period.clone()).collect();
        assert_eq!(labels, periods);
    }

    #[test]
    fn test_empty_tables() {
        assert!(RawTable::PeriodRows(vec![]).is_empty());
        assert!(
            RawTable::ItemRows {
                periods: vec![],
                items: vec![],
            }
            .is_empty()
        );
        assert!(!RawTable::PeriodRows(vec![PeriodRow {
            period: "2023".to_string(),
            fields: Map::new(),
        }])
        .is_empty());
    }
}
