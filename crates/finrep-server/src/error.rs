//! Error types for financial report operations

use thiserror::Error;

/// Financial report specific errors
#[derive(Debug, Error)]
pub enum ReportError {
    /// A request parameter is outside its enumeration
    #[error("Unsupported {field}: '{value}', valid choices are {allowed}")]
    Validation {
        field: String,
        value: String,
        allowed: String,
    },

    /// Tool parameters did not deserialize against the input schema
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Provider returned no rows for the request
    #[error("No data returned for {symbol}")]
    EmptyResult { symbol: String },

    /// Provider-side failure (unknown symbol, schema change, upstream error)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// HTTP-style status code carried in the error envelope
    pub fn code(&self) -> u16 {
        match self {
            Self::Validation { .. } | Self::InvalidParams(_) => 400,
            Self::EmptyResult { .. } => 404,
            Self::Provider(_) | Self::Network(_) | Self::Json(_) | Self::Config(_) => 500,
        }
    }

    /// Short guidance attached to the error envelope
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Pick one of the listed values and retry",
            Self::InvalidParams(_) => "Check the parameter names and types against the tool's input schema",
            Self::EmptyResult { .. } => {
                "Check that the stock code is correct, or try a different period type"
            }
            Self::Provider(_) | Self::Network(_) | Self::Json(_) => {
                "The data provider did not return a usable result; retry later or verify the stock code"
            }
            Self::Config(_) => "Fix the server configuration and restart",
        }
    }
}

/// Convert ReportError to the tool framework error
impl From<ReportError> for finrep_tools::Error {
    fn from(err: ReportError) -> Self {
        finrep_tools::Error::ExecutionFailed(err.to_string())
    }
}
