//! Generic procedure call
//!
//! Input and output of the configurable two-parameter database function.

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Validated parameters for the procedure call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureParams {
    pub param1: String,
    pub param2: String,
}

impl ProcedureParams {
    /// Both parameters are required and may not be blank.
    ///
    /// Values are passed to the function exactly as sent; whitespace only matters
    /// for the blank check.
    pub fn new(param1: Option<&str>, param2: Option<&str>) -> Result<Self, String> {
        let missing: Vec<&str> = [("param1", param1), ("param2", param2)]
            .into_iter()
            .filter(|(_, value)| value.map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect();

        if !missing.is_empty() {
            return Err(format!(
                "Faltan parámetros requeridos: {}",
                missing.join(", ")
            ));
        }

        Ok(Self {
            param1: param1.unwrap_or_default().to_string(),
            param2: param2.unwrap_or_default().to_string(),
        })
    }
}

/// Rows produced by the procedure, one JSON object per row
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcedureOutcome {
    pub rows: Vec<JsonValue>,
}
