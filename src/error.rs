//! Error taxonomy for the transformation pipelines.
//!
//! Input and configuration problems abort before any transformation; an
//! empty split result is reported distinctly so callers can tell "bad
//! input" from "nothing matched". Write failures are fatal in single-file
//! modes and recovered per bucket in split mode.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be read.
    #[error("failed to read input {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Input file is not a valid scan report.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Bad or missing command-line options.
    #[error("{0}")]
    Config(String),

    /// The split pipeline matched no source-file targets.
    #[error("no .tf targets found to process")]
    EmptyResult,

    /// An output document could not be serialized or persisted.
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Workbook rendering or saving failed.
    #[error("failed to export workbook {path}: {source}")]
    Spreadsheet {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl Error {
    /// Process exit code for the binary surface: configuration problems
    /// exit 2, every other fatal error exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            _ => 1,
        }
    }
}
