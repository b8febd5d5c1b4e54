//! Human-facing output for transformation runs.
//!
//! Colored prefixes for stderr diagnostics plus per-mode run summaries on
//! stdout. Colors are dropped when `NO_COLOR` is set.

use owo_colors::OwoColorize;
use std::path::PathBuf;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal and per-bucket error lines on stderr.
pub fn error_prefix() -> String {
    if use_colors() {
        "✖ error:".red().bold().to_string()
    } else {
        "✖ error:".to_string()
    }
}

/// Prefix for non-fatal notes on stderr.
pub fn note_prefix() -> String {
    if use_colors() {
        "◆ note:".blue().bold().to_string()
    } else {
        "◆ note:".to_string()
    }
}

/// Announce the input document and its size.
pub fn print_input(path: &str, size_mb: f64) {
    println!("Input:  {} ({:.2} MB)", path, size_mb);
}

/// Summary for single-document modes (filter, group).
pub fn print_single_output(path: &str, input_mb: f64, output_mb: f64) {
    println!("Output: {} ({:.2} MB)", path, output_mb);
    print_reduction(input_mb, output_mb);
}

/// Summary for split mode: every bucket file written plus the totals.
pub fn print_split_summary(dir: &str, written: &[PathBuf], input_mb: f64, output_mb: f64) {
    println!("Output: {} files -> {}", written.len(), dir);
    for path in written {
        println!("  - {}", path.display());
    }
    print_reduction(input_mb, output_mb);
}

/// Summary for spreadsheet mode.
pub fn print_excel_output(path: &str) {
    println!("Output: {} (Excel format)", path);
}

fn print_reduction(input_mb: f64, output_mb: f64) {
    let reduction = if input_mb > 0.0 {
        (input_mb - output_mb) / input_mb * 100.0
    } else {
        0.0
    };
    let line = format!(
        "Size reduction: {:.1}% ({:.2} MB -> {:.2} MB)",
        reduction, input_mb, output_mb
    );
    if use_colors() {
        println!("{}", line.bold());
    } else {
        println!("{}", line);
    }
}
