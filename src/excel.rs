//! Spreadsheet export: raw findings flattened into two origin-classified
//! sheets.
//!
//! Row preparation is pure and classified through `classify`; only
//! `write_workbook` touches the filesystem.

use crate::classify::PolicyOrigin;
use crate::error::Error;
use crate::models::report::ScanReport;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 8] = [
    "Target",
    "Title",
    "Resource",
    "Severity",
    "Resolution",
    "StartLine",
    "EndLine",
    "PrimaryURL",
];

#[derive(Debug, Clone)]
/// One flattened finding, ready to become a worksheet row.
pub struct ExportRow {
    pub target: String,
    pub title: String,
    pub resource: String,
    pub severity: String,
    pub resolution: String,
    pub start_line: u32,
    pub end_line: u32,
    pub primary_url: String,
}

#[derive(Debug, Clone, Default)]
/// Rows partitioned by policy origin, one bucket per sheet.
pub struct SheetRows {
    pub custom: Vec<ExportRow>,
    pub builtin: Vec<ExportRow>,
}

/// Flatten every finding into a row and partition by policy origin.
pub fn prepare_rows(report: &ScanReport) -> SheetRows {
    let mut rows = SheetRows::default();
    for result in &report.results {
        for misconf in &result.misconfigurations {
            let row = ExportRow {
                target: result.target.clone(),
                title: misconf.title.clone(),
                resource: misconf.cause_metadata.resource.clone(),
                severity: misconf.severity.clone(),
                resolution: misconf.resolution.clone(),
                start_line: misconf.cause_metadata.start_line,
                end_line: misconf.cause_metadata.end_line,
                primary_url: misconf.primary_url.clone(),
            };
            match PolicyOrigin::of_namespace(&misconf.namespace) {
                PolicyOrigin::Builtin => rows.builtin.push(row),
                PolicyOrigin::Custom => rows.custom.push(row),
            }
        }
    }
    rows
}

/// Render the two sheets (`Custom` first, then `Built-in`) and save the
/// workbook.
pub fn write_workbook(path: &str, rows: &SheetRows) -> Result<(), Error> {
    let spreadsheet_err = |source: XlsxError| Error::Spreadsheet {
        path: path.to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Custom").map_err(spreadsheet_err)?;
    write_sheet(sheet, &rows.custom).map_err(spreadsheet_err)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("Built-in").map_err(spreadsheet_err)?;
    write_sheet(sheet, &rows.builtin).map_err(spreadsheet_err)?;

    workbook.save(path).map_err(spreadsheet_err)
}

fn write_sheet(sheet: &mut Worksheet, rows: &[ExportRow]) -> Result<(), XlsxError> {
    let header = Format::new().set_bold().set_background_color(Color::Yellow);
    let flagged = Format::new().set_font_color(Color::Red);

    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.target)?;
        sheet.write_string(r, 1, &row.title)?;
        sheet.write_string(r, 2, &row.resource)?;
        if matches!(
            row.severity.to_ascii_uppercase().as_str(),
            "CRITICAL" | "HIGH"
        ) {
            sheet.write_string_with_format(r, 3, &row.severity, &flagged)?;
        } else {
            sheet.write_string(r, 3, &row.severity)?;
        }
        sheet.write_string(r, 4, &row.resolution)?;
        sheet.write_number(r, 5, row.start_line)?;
        sheet.write_number(r, 6, row.end_line)?;
        sheet.write_string(r, 7, &row.primary_url)?;
    }
    Ok(())
}
