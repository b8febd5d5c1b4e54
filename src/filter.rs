//! Field filter: project a raw report down to its reduced field set.
//!
//! Drops the raw finding-type tag, the short-code identifier, the query
//! text, and the reference list (the primary URL stays), and strips the
//! embedded source snippet from each cause while keeping cross-file
//! occurrences. Cardinality-preserving: target and finding counts are
//! unchanged, and nothing is reordered or reclassified.

use crate::models::filtered::{
    FilteredCauseMetadata, FilteredMisconfiguration, FilteredReport, FilteredResult,
};
use crate::models::report::{Misconfiguration, ScanReport, ScanResult};

/// Produce the reduced form of a whole report.
pub fn filter_report(input: &ScanReport) -> FilteredReport {
    FilteredReport {
        schema_version: input.schema_version,
        created_at: input.created_at.clone(),
        artifact_name: input.artifact_name.clone(),
        artifact_type: input.artifact_type.clone(),
        results: input.results.iter().map(filter_result).collect(),
    }
}

fn filter_result(result: &ScanResult) -> FilteredResult {
    FilteredResult {
        target: result.target.clone(),
        class: result.class.clone(),
        kind: result.kind.clone(),
        misconf_summary: result.misconf_summary,
        misconfigurations: result
            .misconfigurations
            .iter()
            .map(filter_misconfiguration)
            .collect(),
    }
}

fn filter_misconfiguration(misconf: &Misconfiguration) -> FilteredMisconfiguration {
    FilteredMisconfiguration {
        id: misconf.id.clone(),
        title: misconf.title.clone(),
        description: misconf.description.clone(),
        message: misconf.message.clone(),
        namespace: misconf.namespace.clone(),
        resolution: misconf.resolution.clone(),
        severity: misconf.severity.clone(),
        primary_url: misconf.primary_url.clone(),
        status: misconf.status.clone(),
        cause_metadata: FilteredCauseMetadata {
            resource: misconf.cause_metadata.resource.clone(),
            provider: misconf.cause_metadata.provider.clone(),
            service: misconf.cause_metadata.service.clone(),
            start_line: misconf.cause_metadata.start_line,
            end_line: misconf.cause_metadata.end_line,
            occurrences: misconf.cause_metadata.occurrences.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_report() -> ScanReport {
        serde_json::from_value(json!({
            "SchemaVersion": 2,
            "CreatedAt": "2024-03-01T09:00:00Z",
            "ArtifactName": "infra",
            "ArtifactType": "filesystem",
            "Results": [
                {
                    "Target": "net.tf",
                    "Class": "config",
                    "Type": "terraform",
                    "MisconfSummary": {"Successes": 3, "Failures": 2},
                    "Misconfigurations": [
                        {
                            "Type": "Terraform Security Check",
                            "ID": "AVD-AWS-0057",
                            "AVDID": "AVD-AWS-0057",
                            "Title": "IAM policy too permissive",
                            "Description": "Wildcard actions grant more than needed.",
                            "Message": "Policy allows '*'",
                            "Namespace": "builtin.aws.iam",
                            "Query": "data.builtin.aws.iam.deny",
                            "Resolution": "Scope the policy down",
                            "Severity": "HIGH",
                            "PrimaryURL": "https://avd.example/avd-aws-0057",
                            "References": ["https://avd.example/avd-aws-0057"],
                            "Status": "FAIL",
                            "CauseMetadata": {
                                "Resource": "aws_iam_policy.x",
                                "Provider": "AWS",
                                "Service": "iam",
                                "StartLine": 3,
                                "EndLine": 9,
                                "Code": {"Lines": [{"Number": 3, "Content": "resource ...", "IsCause": true}]},
                                "Occurrences": [{"Resource": "module.x", "Filename": "mod/net.tf",
                                                 "Location": {"StartLine": 1, "EndLine": 4}}]
                            }
                        },
                        {
                            "ID": "USER-0001",
                            "Title": "Tag missing",
                            "Namespace": "user.tags",
                            "Severity": "LOW",
                            "CauseMetadata": {"Resource": "aws_vpc.main", "StartLine": 1, "EndLine": 5}
                        }
                    ]
                },
                {
                    "Target": ".",
                    "Class": "config",
                    "Type": "terraform",
                    "MisconfSummary": {"Successes": 1, "Failures": 0}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_preserves_counts() {
        let input = sample_report();
        let out = filter_report(&input);
        assert_eq!(out.results.len(), input.results.len());
        for (fr, raw) in out.results.iter().zip(input.results.iter()) {
            assert_eq!(fr.misconfigurations.len(), raw.misconfigurations.len());
            assert_eq!(fr.target, raw.target);
        }
        // Summary counts pass through untouched
        assert_eq!(out.results[0].misconf_summary.failures, 2);
        assert_eq!(out.results[0].misconf_summary.successes, 3);
    }

    #[test]
    fn test_filter_drops_verbose_fields_keeps_occurrences() {
        let out = filter_report(&sample_report());
        let json = serde_json::to_value(&out).unwrap();
        let m = &json["Results"][0]["Misconfigurations"][0];
        assert!(m.get("Type").is_none());
        assert!(m.get("AVDID").is_none());
        assert!(m.get("Query").is_none());
        assert!(m.get("References").is_none());
        assert_eq!(m["PrimaryURL"], "https://avd.example/avd-aws-0057");
        let cause = &m["CauseMetadata"];
        assert!(cause.get("Code").is_none());
        assert_eq!(cause["Occurrences"][0]["Filename"], "mod/net.tf");
    }

    #[test]
    fn test_findingless_target_serializes_without_misconfigurations_key() {
        let out = filter_report(&sample_report());
        let json = serde_json::to_value(&out).unwrap();
        assert!(json["Results"][1].get("Misconfigurations").is_none());
    }
}
