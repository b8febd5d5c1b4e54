//! Target splitter: partition a grouped report into per-target,
//! per-policy-origin buckets, plus the severity roll-up and the bucket
//! file-name derivation.
//!
//! Targets with no file-level identity (`""` or `"."`) and targets that are
//! not `.tf` sources are skipped. Each surviving target contributes up to
//! two buckets, keyed by the origin marker concatenated with the target
//! path (`[TV]net.tf`, `[KB]net.tf`). Buckets are created lazily, fragment
//! failure counts are corrected to the per-bucket group count, and one
//! severity tally is computed per bucket once all targets are in.
//!
//! The returned map is unordered; callers needing stable output order sort
//! by bucket key at the boundary.

use crate::classify::PolicyOrigin;
use crate::error::Error;
use crate::group::group_by_policy;
use crate::models::grouped::{GroupedReport, GroupedResult, PolicyGroup, SeveritySummary};
use crate::models::report::ScanReport;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extension recognized as a source-file target.
pub const SOURCE_FILE_EXT: &str = "tf";

/// The full group-and-split pass over a raw report. Zero eligible buckets
/// is reported as an error so callers can tell "nothing matched" from an
/// empty write set.
pub fn preprocess(report: &ScanReport) -> Result<HashMap<String, GroupedReport>, Error> {
    let buckets = split_by_target(&group_by_policy(report));
    if buckets.is_empty() {
        return Err(Error::EmptyResult);
    }
    Ok(buckets)
}

/// Partition a grouped report into origin-classified per-target buckets.
pub fn split_by_target(input: &GroupedReport) -> HashMap<String, GroupedReport> {
    let mut buckets: HashMap<String, GroupedReport> = HashMap::new();

    for result in &input.results {
        if result.target.is_empty() || result.target == "." {
            continue;
        }
        if !is_source_file(&result.target) {
            continue;
        }

        let mut builtin: Vec<PolicyGroup> = Vec::new();
        let mut custom: Vec<PolicyGroup> = Vec::new();
        for group in &result.misconfigurations {
            match PolicyOrigin::of_namespace(&group.namespace) {
                PolicyOrigin::Builtin => builtin.push(group.clone()),
                PolicyOrigin::Custom => custom.push(group.clone()),
            }
        }

        append_fragment(&mut buckets, input, result, PolicyOrigin::Builtin, builtin);
        append_fragment(&mut buckets, input, result, PolicyOrigin::Custom, custom);
    }

    for bucket in buckets.values_mut() {
        bucket.severity_summary = Some(severity_summary(bucket));
    }
    buckets
}

/// Count each retained policy group under its severity tier.
pub fn severity_summary(report: &GroupedReport) -> SeveritySummary {
    let mut tally = SeveritySummary::default();
    for result in &report.results {
        for group in &result.misconfigurations {
            tally.record(&group.severity);
        }
    }
    tally
}

/// Derive the output file name for a bucket key (or plain target path):
/// extension stripped, path separators replaced with `%`, `.json` appended,
/// joined onto the output directory. Deterministic and pure; paths that
/// differ only in separator style collapse to the same name by design.
pub fn target_filename(output_dir: &Path, target: &str) -> PathBuf {
    let stem = match Path::new(target).extension() {
        Some(ext) => &target[..target.len() - ext.len() - 1],
        None => target,
    };
    let name = stem.replace(['/', '\\'], "%");
    output_dir.join(format!("{name}.json"))
}

fn is_source_file(target: &str) -> bool {
    Path::new(target)
        .extension()
        .is_some_and(|ext| ext == SOURCE_FILE_EXT)
}

fn append_fragment(
    buckets: &mut HashMap<String, GroupedReport>,
    input: &GroupedReport,
    result: &GroupedResult,
    origin: PolicyOrigin,
    groups: Vec<PolicyGroup>,
) {
    if groups.is_empty() {
        return;
    }
    let key = format!("{}{}", origin.marker(), result.target);
    let bucket = buckets.entry(key).or_insert_with(|| GroupedReport {
        schema_version: input.schema_version,
        created_at: input.created_at.clone(),
        artifact_name: input.artifact_name.clone(),
        artifact_type: input.artifact_type.clone(),
        severity_summary: None,
        results: Vec::new(),
    });

    let mut fragment = result.clone();
    fragment.misconf_summary.failures = groups.len();
    fragment.misconfigurations = groups;
    bucket.results.push(fragment);
}
