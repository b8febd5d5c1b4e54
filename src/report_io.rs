//! Reading the input report and writing output documents.
//!
//! Thin I/O adapters around the core transforms. Both directions report the
//! byte size in MB so the run summary can show the size reduction.

use crate::error::Error;
use crate::models::report::ScanReport;
use serde::Serialize;
use std::fs;
use std::path::Path;

const MEGABYTE: f64 = 1024.0 * 1024.0;

/// Read and decode the input report; returns the report and its size in MB.
pub fn read_report(path: &str) -> Result<(ScanReport, f64), Error> {
    let data = fs::read(path).map_err(|source| Error::Input {
        path: path.to_string(),
        source,
    })?;
    let report = serde_json::from_slice(&data).map_err(|source| Error::Parse {
        path: path.to_string(),
        source,
    })?;
    Ok((report, data.len() as f64 / MEGABYTE))
}

/// Serialize a document to JSON and persist it; returns the written size in
/// MB. `pretty` switches to indented output.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<f64, Error> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(|source| Error::Write {
        path: path.display().to_string(),
        source: source.into(),
    })?;

    fs::write(path, &bytes).map_err(|source| Error::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(bytes.len() as f64 / MEGABYTE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(
            &input,
            json!({
                "SchemaVersion": 2,
                "ArtifactName": "infra",
                "Results": [{"Target": "net.tf", "MisconfSummary": {"Successes": 1, "Failures": 0}}]
            })
            .to_string(),
        )
        .unwrap();

        let (report, size_mb) = read_report(input.to_str().unwrap()).unwrap();
        assert_eq!(report.artifact_name, "infra");
        assert_eq!(report.results.len(), 1);
        assert!(size_mb > 0.0);

        let out = dir.path().join("out.json");
        let written_mb = write_json(&out, &json!({"a": 1}), true).unwrap();
        assert!(written_mb > 0.0);
        let text = fs::read_to_string(&out).unwrap();
        // pretty output is indented
        assert!(text.contains("\n  \"a\": 1"));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let err = read_report("/nonexistent/report.json").unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{not json").unwrap();
        let err = read_report(input.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
