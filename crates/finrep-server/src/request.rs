//! Request parameter enumerations and provider-literal mappings
//!
//! Both selectors are validated locally before any provider call is made; an
//! unrecognized token yields a [`ReportError::Validation`] naming the field
//! and the accepted values.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};

/// Category of financial statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Income statement
    Income,
    /// Balance sheet
    Balance,
    /// Cash-flow statement
    CashFlow,
}

impl ReportKind {
    /// Human-readable list of accepted tokens, used in validation errors
    pub const ALLOWED: &'static str = "'income', 'balance', 'cash'";

    /// Parse a caller-supplied token, naming `field` on failure
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match value {
            "income" => Ok(Self::Income),
            "balance" => Ok(Self::Balance),
            "cash" | "cashflow" => Ok(Self::CashFlow),
            other => Err(ReportError::Validation {
                field: field.to_string(),
                value: other.to_string(),
                allowed: Self::ALLOWED.to_string(),
            }),
        }
    }

    /// Canonical token echoed back in the response envelope
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::CashFlow => "cash",
        }
    }

    /// Statement name expected by the Eastmoney HK report endpoint
    pub fn eastmoney_statement(&self) -> &'static str {
        match self {
            Self::Income => "利润表",
            Self::Balance => "资产负债表",
            Self::CashFlow => "现金流量表",
        }
    }

    /// Line-item types queried from the Yahoo fundamentals timeseries
    pub fn yahoo_items(&self) -> &'static [&'static str] {
        match self {
            Self::Income => &[
                "TotalRevenue",
                "CostOfRevenue",
                "GrossProfit",
                "OperatingExpense",
                "OperatingIncome",
                "PretaxIncome",
                "TaxProvision",
                "NetIncome",
                "BasicEPS",
                "DilutedEPS",
            ],
            Self::Balance => &[
                "TotalAssets",
                "CurrentAssets",
                "CashAndCashEquivalents",
                "Inventory",
                "TotalLiabilitiesNetMinorityInterest",
                "CurrentLiabilities",
                "LongTermDebt",
                "StockholdersEquity",
            ],
            Self::CashFlow => &[
                "OperatingCashFlow",
                "InvestingCashFlow",
                "FinancingCashFlow",
                "CapitalExpenditure",
                "FreeCashFlow",
                "EndCashPosition",
            ],
        }
    }
}

/// Reporting cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Annual reports
    Annual,
    /// Quarterly / interim reporting periods
    Quarterly,
}

impl PeriodKind {
    /// Human-readable list of accepted tokens, used in validation errors
    pub const ALLOWED: &'static str = "'year', 'report', 'annual', 'quarterly'";

    /// Parse a caller-supplied token, naming `field` on failure
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        match value {
            "year" | "yearly" | "annual" => Ok(Self::Annual),
            "report" | "quarterly" => Ok(Self::Quarterly),
            other => Err(ReportError::Validation {
                field: field.to_string(),
                value: other.to_string(),
                allowed: Self::ALLOWED.to_string(),
            }),
        }
    }

    /// Canonical token for the HK report surface
    pub fn as_report_str(&self) -> &'static str {
        match self {
            Self::Annual => "year",
            Self::Quarterly => "report",
        }
    }

    /// Canonical token for the statement surface
    pub fn as_statement_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }

    /// Indicator name expected by the Eastmoney HK report endpoint
    pub fn eastmoney_indicator(&self) -> &'static str {
        match self {
            Self::Annual => "年报",
            Self::Quarterly => "报告期",
        }
    }

    /// Type prefix used by the Yahoo fundamentals timeseries
    pub fn yahoo_prefix(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Quarterly => "quarterly",
        }
    }
}

/// Normalize a Hong Kong stock code to the five-digit form providers expect
///
/// Codes like "700" become "00700"; anything non-numeric is passed through
/// unchanged so the provider reports the failure for truly bad input.
pub fn normalize_hk_code(code: &str) -> String {
    let trimmed = code.trim();
    if !trimmed.is_empty() && trimmed.len() < 5 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        format!("{trimmed:0>5}")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_tokens() {
        assert_eq!(
            ReportKind::parse("report_type", "income").unwrap(),
            ReportKind::Income
        );
        assert_eq!(
            ReportKind::parse("report_type", "cash").unwrap(),
            ReportKind::CashFlow
        );
        assert_eq!(
            ReportKind::parse("report_type", "cashflow").unwrap(),
            ReportKind::CashFlow
        );
    }

    #[test]
    fn test_report_kind_rejects_unknown() {
        let err = ReportKind::parse("report_type", "equity").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("report_type"));
        assert!(message.contains("equity"));
        assert!(message.contains("'income', 'balance', 'cash'"));
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_period_kind_tokens() {
        assert_eq!(
            PeriodKind::parse("period_type", "year").unwrap(),
            PeriodKind::Annual
        );
        assert_eq!(
            PeriodKind::parse("period_type", "yearly").unwrap(),
            PeriodKind::Annual
        );
        assert_eq!(
            PeriodKind::parse("period_type", "annual").unwrap(),
            PeriodKind::Annual
        );
        assert_eq!(
            PeriodKind::parse("period_type", "report").unwrap(),
            PeriodKind::Quarterly
        );
        assert_eq!(
            PeriodKind::parse("period_type", "quarterly").unwrap(),
            PeriodKind::Quarterly
        );
    }

    #[test]
    fn test_period_kind_rejects_unknown() {
        let err = PeriodKind::parse("period_type", "weekly").unwrap_err();
        assert!(err.to_string().contains("period_type"));
        assert_eq!(err.code(), 400);
    }

    #[test]
    fn test_provider_literals() {
        assert_eq!(ReportKind::Income.eastmoney_statement(), "利润表");
        assert_eq!(PeriodKind::Annual.eastmoney_indicator(), "年报");
        assert_eq!(PeriodKind::Quarterly.yahoo_prefix(), "quarterly");
        assert!(ReportKind::Balance.yahoo_items().contains(&"TotalAssets"));
    }

    #[test]
    fn test_normalize_hk_code() {
        assert_eq!(normalize_hk_code("700"), "00700");
        assert_eq!(normalize_hk_code("00700"), "00700");
        assert_eq!(normalize_hk_code(" 1378 "), "01378");
        assert_eq!(normalize_hk_code("AAPL"), "AAPL");
    }
}
