//! Configuration discovery and effective settings resolution.
//!
//! scanform reads `scanform.toml|yaml|yml` from the working directory and
//! merges it with CLI flags to produce an `Effective` config. The file can
//! only supply defaults for the toggles (`pretty`, `removeCode`); paths and
//! mode flags are CLI-only.
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::cli::Cli;
use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `scanform.toml|yaml|yml`.
pub struct FileConfig {
    pub pretty: Option<bool>,
    #[serde(rename = "removeCode")]
    pub remove_code: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The single pipeline selected for this run.
pub enum Mode {
    /// Drop verbose fields, one output document.
    Filter,
    /// Group findings per policy, one output document.
    Group,
    /// Group, then split per target and policy origin, one file per bucket.
    GroupSplit,
    /// Render raw findings into a two-sheet workbook.
    Excel,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub input: String,
    pub output: String,
    pub mode: Mode,
    pub pretty: bool,
}

/// Load the optional config file from `dir`, trying TOML then YAML forms.
pub fn load_config(dir: &Path) -> Option<FileConfig> {
    let toml_path = dir.join("scanform.toml");
    if let Ok(s) = fs::read_to_string(&toml_path) {
        if let Ok(cfg) = toml::from_str::<FileConfig>(&s) {
            return Some(cfg);
        }
    }
    for name in ["scanform.yaml", "scanform.yml"] {
        if let Ok(s) = fs::read_to_string(dir.join(name)) {
            if let Ok(cfg) = serde_yaml::from_str::<FileConfig>(&s) {
                return Some(cfg);
            }
        }
    }
    None
}

/// Merge CLI flags with the config file and validate the mode selection.
pub fn resolve_effective(cli: &Cli, dir: &Path) -> Result<Effective, Error> {
    let file_cfg = load_config(dir).unwrap_or_default();

    let input = cli
        .input
        .clone()
        .ok_or_else(|| Error::Config("missing required option --input <PATH>".into()))?;
    let output = cli
        .output
        .clone()
        .ok_or_else(|| Error::Config("missing required option --output <PATH>".into()))?;

    let pretty = cli.pretty.or(file_cfg.pretty).unwrap_or(false);
    let remove_code = cli.remove_code.or(file_cfg.remove_code).unwrap_or(true);
    let mode = resolve_mode(cli, remove_code)?;

    Ok(Effective {
        input,
        output,
        mode,
        pretty,
    })
}

/// Exactly one of filter, group[+split], or excel must be active.
fn resolve_mode(cli: &Cli, remove_code: bool) -> Result<Mode, Error> {
    if cli.excel && (cli.group_by_policy || cli.split_by_target) {
        return Err(Error::Config(
            "--excel cannot be combined with --group-by-policy or --split-by-target".into(),
        ));
    }
    if cli.excel {
        return Ok(Mode::Excel);
    }
    // --split-by-target implies grouping
    if cli.split_by_target {
        return Ok(Mode::GroupSplit);
    }
    if cli.group_by_policy {
        return Ok(Mode::Group);
    }
    if remove_code {
        return Ok(Mode::Filter);
    }
    Err(Error::Config(
        "no mode selected: enable --remove-code, --group-by-policy, --split-by-target, or --excel"
            .into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cli_with_paths() -> Cli {
        Cli {
            input: Some("report.json".into()),
            output: Some("out.json".into()),
            ..Cli::default()
        }
    }

    #[test]
    fn test_defaults_select_filter_mode() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(&cli_with_paths(), dir.path()).unwrap();
        assert_eq!(eff.mode, Mode::Filter);
        assert!(!eff.pretty);
    }

    #[test]
    fn test_config_file_supplies_toggle_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("scanform.toml"),
            "pretty = true\nremoveCode = false\n",
        )
        .unwrap();

        // File disables the filter default; with no other mode this is a
        // configuration error
        let err = resolve_effective(&cli_with_paths(), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        // CLI wins over the file
        let mut cli = cli_with_paths();
        cli.remove_code = Some(true);
        let eff = resolve_effective(&cli, dir.path()).unwrap();
        assert_eq!(eff.mode, Mode::Filter);
        assert!(eff.pretty);
    }

    #[test]
    fn test_yaml_config_is_discovered() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("scanform.yaml"), "pretty: true\n").unwrap();
        let eff = resolve_effective(&cli_with_paths(), dir.path()).unwrap();
        assert!(eff.pretty);
    }

    #[test]
    fn test_split_implies_grouping() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_paths();
        cli.split_by_target = true;
        let eff = resolve_effective(&cli, dir.path()).unwrap();
        assert_eq!(eff.mode, Mode::GroupSplit);
    }

    #[test]
    fn test_excel_conflicts_with_grouping() {
        let dir = tempdir().unwrap();
        let mut cli = cli_with_paths();
        cli.excel = true;
        cli.group_by_policy = true;
        let err = resolve_effective(&cli, dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_paths_are_config_errors() {
        let dir = tempdir().unwrap();
        let err = resolve_effective(&Cli::default(), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
