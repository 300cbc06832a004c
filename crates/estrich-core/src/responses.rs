//! Response and record types returned as JSON by `estrich` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `estrich classify`, `estrich designation validate`, and
//! `estrich conformity batch`, plus the input record of a batch file.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::conformity::ConformityVerdict;
use crate::enums::{BinderType, IntendedUse, PropertyFamily, WearResistanceMethod};

/// Response from `estrich classify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassificationResponse {
    pub property: String,
    pub method: Option<WearResistanceMethod>,
    pub value: f64,
    /// Class label or out-of-range sentinel.
    pub class: String,
}

/// Response from `estrich classes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WearClassesResponse {
    pub method: WearResistanceMethod,
    pub unit: String,
    /// Best class first.
    pub classes: Vec<String>,
}

/// Response from `estrich designation compose` and `describe`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DesignationResponse {
    pub designation: String,
    pub description: String,
}

/// Response from `estrich designation validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResponse {
    pub designation: String,
    pub valid: bool,
    pub errors: Vec<String>,
    pub intended_use: IntendedUse,
    pub missing_required: Vec<PropertyFamily>,
}

/// Response from `estrich designation requirements`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RequirementsResponse {
    pub binder_type: BinderType,
    pub intended_use: IntendedUse,
    pub required: Vec<PropertyFamily>,
}

/// One measurement in a batch evaluation file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConformityRecord {
    /// Free-form reference such as a batch or sample number.
    #[serde(default)]
    pub label: Option<String>,
    pub measured: f64,
    pub declared_class: String,
    /// Test type identifier, e.g. `compressive_strength` or `wear_bca`.
    pub test_type: String,
}

/// Outcome for one record of a batch file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchEntry {
    /// Zero-based position in the input file.
    pub index: usize,
    pub label: Option<String>,
    pub verdict: ConformityVerdict,
}

/// Response from `estrich conformity batch`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BatchReport {
    pub evaluated_at: DateTime<Utc>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    #[must_use]
    pub fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let passed = entries.iter().filter(|entry| entry.verdict.passed).count();
        Self {
            evaluated_at: Utc::now(),
            total: entries.len(),
            passed,
            failed: entries.len() - passed,
            entries,
        }
    }
}
