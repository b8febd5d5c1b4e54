//! Grouped report shape: one entry per policy identifier with the
//! per-occurrence detail folded into a `Violations` array.

use super::report::MisconfSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Report envelope after grouping. `severity_summary` is present only on
/// split-bucket outputs.
pub struct GroupedReport {
    pub schema_version: i64,
    pub created_at: String,
    pub artifact_name: String,
    pub artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity_summary: Option<SeveritySummary>,
    pub results: Vec<GroupedResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupedResult {
    pub target: String,
    pub class: String,
    #[serde(rename = "Type")]
    pub kind: String,
    pub misconf_summary: MisconfSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub misconfigurations: Vec<PolicyGroup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
/// All findings for one policy identifier within one target. Metadata comes
/// from the first finding seen for the identifier.
pub struct PolicyGroup {
    #[serde(rename = "ID")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub namespace: String,
    pub resolution: String,
    pub severity: String,
    #[serde(rename = "PrimaryURL")]
    pub primary_url: String,
    pub status: String,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
/// One originating finding, reduced to its cause location and message.
pub struct Violation {
    pub resource: String,
    pub provider: String,
    pub service: String,
    pub start_line: u32,
    pub end_line: u32,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Per-tier counts over one scope. Tiers are compared case-insensitively;
/// unrecognized severity strings count toward no tier.
pub struct SeveritySummary {
    #[serde(rename = "CRITICAL")]
    pub critical: usize,
    #[serde(rename = "HIGH")]
    pub high: usize,
    #[serde(rename = "MEDIUM")]
    pub medium: usize,
    #[serde(rename = "LOW")]
    pub low: usize,
}

impl SeveritySummary {
    /// Count one entry under its severity tier, if recognized.
    pub fn record(&mut self, severity: &str) {
        match severity.to_ascii_uppercase().as_str() {
            "CRITICAL" => self.critical += 1,
            "HIGH" => self.high += 1,
            "MEDIUM" => self.medium += 1,
            "LOW" => self.low += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_case_insensitive_and_drops_unknown() {
        let mut tally = SeveritySummary::default();
        for sev in ["critical", "CRITICAL", "High", "medium", "LOW", "UNKNOWN", ""] {
            tally.record(sev);
        }
        assert_eq!(tally.critical, 2);
        assert_eq!(tally.high, 1);
        assert_eq!(tally.medium, 1);
        assert_eq!(tally.low, 1);
    }

    #[test]
    fn test_summary_serializes_with_tier_keys() {
        let tally = SeveritySummary {
            critical: 1,
            high: 2,
            medium: 0,
            low: 3,
        };
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json["CRITICAL"], 1);
        assert_eq!(json["HIGH"], 2);
        assert_eq!(json["LOW"], 3);
    }
}
