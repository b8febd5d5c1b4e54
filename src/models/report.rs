//! Raw scan report schema as emitted by the scanner.
//!
//! Field names keep the scanner's JSON spelling (`SchemaVersion`,
//! `PrimaryURL`, `AVDID`, ...). Every struct tolerates absent fields so a
//! report from an older scanner version still decodes; missing values fall
//! back to their zero forms.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Top-level report envelope: schema metadata plus one entry per scanned
/// target.
pub struct ScanReport {
    pub schema_version: i64,
    pub created_at: String,
    pub artifact_name: String,
    pub artifact_type: String,
    pub results: Vec<ScanResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// One scanned unit, typically a source file.
pub struct ScanResult {
    pub target: String,
    pub class: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub misconf_summary: MisconfSummary,
    pub misconfigurations: Vec<Misconfiguration>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Pass/fail counts for a target. `failures` is redefined downstream by the
/// grouping pass; `successes` is always carried through untouched.
pub struct MisconfSummary {
    pub successes: usize,
    pub failures: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// One detected misconfiguration.
pub struct Misconfiguration {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "AVDID")]
    pub avd_id: String,
    pub title: String,
    pub description: String,
    pub message: String,
    pub namespace: String,
    pub query: String,
    pub resolution: String,
    pub severity: String,
    #[serde(rename = "PrimaryURL")]
    pub primary_url: String,
    pub references: Vec<String>,
    pub status: String,
    pub cause_metadata: CauseMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Where a misconfiguration was caused, with an optional embedded source
/// snippet and cross-file occurrences.
pub struct CauseMetadata {
    pub resource: String,
    pub provider: String,
    pub service: String,
    pub start_line: u32,
    pub end_line: u32,
    pub code: Option<CodeBlock>,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// Embedded source snippet attached to a cause.
pub struct CodeBlock {
    pub lines: Vec<CodeLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CodeLine {
    pub number: u32,
    pub content: String,
    pub is_cause: bool,
    pub annotation: String,
    pub truncated: bool,
    pub highlighted: String,
    pub first_cause: bool,
    pub last_cause: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
/// A cross-file occurrence of the same cause.
pub struct Occurrence {
    pub resource: String,
    pub filename: String,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Location {
    pub start_line: u32,
    pub end_line: u32,
}
