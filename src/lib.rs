#![recursion_limit = "256"]
//! scanform core library.
//!
//! This crate re-shapes one materialized IaC-misconfiguration scan report
//! for downstream consumption. The transformation pipeline is the core:
//! field filtering, per-target policy grouping, target/origin splitting,
//! severity roll-ups, and deterministic bucket file naming. File reading,
//! writing, and spreadsheet rendering are thin adapters around it.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `classify`: Built-in vs. custom policy origin, the single source of
//!   truth for both the splitter and the spreadsheet export.
//! - `filter`: Verbose-field projection, cardinality-preserving.
//! - `group`: Per-target merging of findings sharing a policy identifier.
//! - `split`: Per-target/per-origin bucketing, severity tallies, bucket
//!   file naming.
//! - `excel`: Two-sheet workbook export of raw findings.
//! - `models`: Raw report schema and the derived output shapes.
//! - `report_io`: Report reading and document writing.
//! - `output`: Human printers for run summaries and diagnostics.
//! - `error`: Error taxonomy and exit-code mapping.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod filter;
pub mod group;
pub mod models;
pub mod output;
pub mod report_io;
pub mod split;
