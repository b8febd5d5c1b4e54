//! Reduced report shape produced by the field filter.
//!
//! Structurally parallel to the raw report, minus the verbose fields: the
//! raw finding-type tag, the short-code identifier, the query text, the
//! reference list (the primary URL stays), and the embedded source snippet.

use super::report::{MisconfSummary, Occurrence};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilteredReport {
    pub schema_version: i64,
    pub created_at: String,
    pub artifact_name: String,
    pub artifact_type: String,
    pub results: Vec<FilteredResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilteredResult {
    pub target: String,
    pub class: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub misconf_summary: MisconfSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub misconfigurations: Vec<FilteredMisconfiguration>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilteredMisconfiguration {
    #[serde(rename = "ID")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub message: String,
    pub namespace: String,
    pub resolution: String,
    pub severity: String,
    #[serde(rename = "PrimaryURL")]
    pub primary_url: String,
    pub status: String,
    pub cause_metadata: FilteredCauseMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Cause location without the source snippet; cross-file occurrences stay.
pub struct FilteredCauseMetadata {
    pub resource: String,
    pub provider: String,
    pub service: String,
    pub start_line: u32,
    pub end_line: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
}
