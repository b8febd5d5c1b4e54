//! scanform binary entry point.
//! Resolves configuration, reads the report, and drives the selected
//! pipeline.

use clap::Parser;
use scanform::cli::Cli;
use scanform::config::{self, Effective, Mode};
use scanform::error::Error;
use scanform::models::grouped::GroupedReport;
use scanform::{excel, filter, group, output, report_io, split};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(&cli, Path::new(".")) {
        Ok(eff) => eff,
        Err(err) => {
            eprintln!("{} {}", output::error_prefix(), err);
            process::exit(err.exit_code());
        }
    };
    if config::load_config(Path::new(".")).is_none() {
        eprintln!(
            "{} {}",
            output::note_prefix(),
            "No scanform.toml found; using defaults."
        );
    }
    if let Err(err) = run(&eff) {
        eprintln!("{} {}", output::error_prefix(), err);
        process::exit(err.exit_code());
    }
}

fn run(eff: &Effective) -> Result<(), Error> {
    let (report, input_mb) = report_io::read_report(&eff.input)?;
    output::print_input(&eff.input, input_mb);

    match eff.mode {
        Mode::Filter => {
            let filtered = filter::filter_report(&report);
            let output_mb = report_io::write_json(Path::new(&eff.output), &filtered, eff.pretty)?;
            output::print_single_output(&eff.output, input_mb, output_mb);
        }
        Mode::Group => {
            let grouped = group::group_by_policy(&report);
            let output_mb = report_io::write_json(Path::new(&eff.output), &grouped, eff.pretty)?;
            output::print_single_output(&eff.output, input_mb, output_mb);
        }
        Mode::GroupSplit => {
            let buckets = split::preprocess(&report)?;
            write_buckets(eff, &buckets, input_mb)?;
        }
        Mode::Excel => {
            let rows = excel::prepare_rows(&report);
            excel::write_workbook(&eff.output, &rows)?;
            output::print_excel_output(&eff.output);
        }
    }
    Ok(())
}

/// Write one file per bucket under the output directory. A failed bucket is
/// reported and skipped; siblings still get written and the summary counts
/// only successes.
fn write_buckets(
    eff: &Effective,
    buckets: &HashMap<String, GroupedReport>,
    input_mb: f64,
) -> Result<(), Error> {
    let out_dir = Path::new(&eff.output);
    fs::create_dir_all(out_dir).map_err(|source| Error::Write {
        path: eff.output.clone(),
        source,
    })?;

    // Stable emission order: sort by bucket key at the map boundary
    let mut keys: Vec<&String> = buckets.keys().collect();
    keys.sort();

    let mut written = Vec::new();
    let mut total_mb = 0.0;
    for key in keys {
        let path = split::target_filename(out_dir, key);
        match report_io::write_json(&path, &buckets[key], eff.pretty) {
            Ok(size_mb) => {
                total_mb += size_mb;
                written.push(path);
            }
            Err(err) => eprintln!("{} {}", output::error_prefix(), err),
        }
    }
    output::print_split_summary(&eff.output, &written, input_mb, total_mb);
    Ok(())
}
