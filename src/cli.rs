//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "scanform",
    version,
    about = "Re-shape IaC misconfiguration scan reports",
    long_about = "scanform — a small, fast CLI that re-shapes a scanner's misconfiguration report for downstream consumers: strip verbose fields, merge duplicate findings per policy, split results per target and policy origin, or export findings to a spreadsheet.\n\nConfiguration precedence: CLI > scanform.toml > defaults.",
    after_help = "Examples:\n  # Drop verbose fields only\n  scanform --input report.json --output report-filtered.json --pretty\n\n  # Merge findings sharing a policy ID\n  scanform --input report.json --output report-grouped.json --group-by-policy\n\n  # One file per target and policy origin, with severity roll-ups\n  scanform --input report.json --output out/ --split-by-target\n\n  # Spreadsheet with Custom and Built-in sheets\n  scanform --input report.json --output findings.xlsx --excel",
    arg_required_else_help = true
)]
/// Top-level CLI options. Mode validation happens in `config`, not here.
pub struct Cli {
    #[arg(long, help = "Input scan report JSON path (required)")]
    pub input: Option<String>,
    #[arg(
        long,
        help = "Output file path, or output directory with --split-by-target (required)"
    )]
    pub output: Option<String>,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Drop verbose finding fields (default: true)"
    )]
    pub remove_code: Option<bool>,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Merge findings sharing a policy ID into one entry with violations"
    )]
    pub group_by_policy: bool,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Write one file per target and policy origin (implies grouping)"
    )]
    pub split_by_target: bool,
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Indent JSON output"
    )]
    pub pretty: Option<bool>,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Export findings to an .xlsx workbook (Custom and Built-in sheets)"
    )]
    pub excel: bool,
}
