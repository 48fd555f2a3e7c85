//! JSON output envelope.

use longhand_solver::StepRecord;
use serde::Serialize;

/// Current schema version for JSON output.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug, Clone)]
pub struct SolveJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    pub kind: &'static str,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub steps: Vec<StepRecord>,
}
