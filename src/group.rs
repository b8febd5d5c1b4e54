//! Policy grouper: merge findings sharing a policy identifier.
//!
//! Grouping is strictly per target. The first finding seen for an
//! identifier seeds the group's metadata (namespace included, which later
//! decides the split bucket); every finding, first included, contributes
//! one violation. The target's failure count is redefined to the distinct
//! group count while the success count passes through.
//!
//! Targets are independent, so the pass runs across them in parallel and
//! collects in input order; group order inside a target is made
//! deterministic by sorting on the policy identifier when the accumulation
//! map is flattened.

use crate::models::grouped::{GroupedReport, GroupedResult, PolicyGroup, Violation};
use crate::models::report::{Misconfiguration, MisconfSummary, ScanReport, ScanResult};
use rayon::prelude::*;
use std::collections::HashMap;

/// Group every target's findings by policy identifier.
pub fn group_by_policy(input: &ScanReport) -> GroupedReport {
    GroupedReport {
        schema_version: input.schema_version,
        created_at: input.created_at.clone(),
        artifact_name: input.artifact_name.clone(),
        artifact_type: input.artifact_type.clone(),
        severity_summary: None,
        results: input.results.par_iter().map(group_result).collect(),
    }
}

fn group_result(result: &ScanResult) -> GroupedResult {
    let mut groups: HashMap<&str, PolicyGroup> = HashMap::new();
    for misconf in &result.misconfigurations {
        groups
            .entry(misconf.id.as_str())
            .and_modify(|group| group.violations.push(violation(misconf)))
            .or_insert_with(|| seed_group(misconf));
    }

    let mut misconfigurations: Vec<PolicyGroup> = groups.into_values().collect();
    misconfigurations.sort_by(|a, b| a.id.cmp(&b.id));

    GroupedResult {
        target: result.target.clone(),
        class: result.class.clone(),
        kind: result.kind.clone(),
        misconf_summary: MisconfSummary {
            successes: result.misconf_summary.successes,
            failures: misconfigurations.len(),
        },
        misconfigurations,
    }
}

fn seed_group(misconf: &Misconfiguration) -> PolicyGroup {
    PolicyGroup {
        id: misconf.id.clone(),
        title: misconf.title.clone(),
        description: misconf.description.clone(),
        namespace: misconf.namespace.clone(),
        resolution: misconf.resolution.clone(),
        severity: misconf.severity.clone(),
        primary_url: misconf.primary_url.clone(),
        status: misconf.status.clone(),
        violations: vec![violation(misconf)],
    }
}

fn violation(misconf: &Misconfiguration) -> Violation {
    Violation {
        resource: misconf.cause_metadata.resource.clone(),
        provider: misconf.cause_metadata.provider.clone(),
        service: misconf.cause_metadata.service.clone(),
        start_line: misconf.cause_metadata.start_line,
        end_line: misconf.cause_metadata.end_line,
        message: misconf.message.clone(),
    }
}
