//! Tool trait definition

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for callable report tools
///
/// A tool is a single lookup function exposed to a tool-serving framework.
/// Each tool declares a name, a description, and a JSON schema for its input,
/// and produces a JSON response envelope when executed.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// The response envelope as a JSON value. Domain failures (validation,
    /// empty results, provider errors) are reported inside the envelope, not
    /// as an `Err`; `Err` is reserved for faults the tool cannot convert.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the calling agent decide when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// Describes the parameters this tool expects, including the enumerated
    /// values accepted for report and period selectors.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// // Example schema for a report tool:
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "stock_code": { "type": "string" },
    ///         "report_type": {
    ///             "type": "string",
    ///             "enum": ["income", "balance", "cash"]
    ///         },
    ///         "period": { "type": "integer" }
    ///     },
    ///     "required": ["stock_code", "report_type"]
    /// });
    /// ```
    fn input_schema(&self) -> Value;
}
