//! Report command implementation.
//!
//! Writes the CSV analysis report for one scan.

use std::path::{Path, PathBuf};

use pulsepilot::report::{build_rows, ReportError};
use pulsepilot::{CsvReportWriter, NetworkRecord, ReportWriter};

use super::scan::{build_scan_source, take_snapshot};
use crate::config::Config;

/// Saves `records` through `writer`.
pub fn save_report<W: ReportWriter>(
    writer: &mut W,
    records: &[NetworkRecord],
) -> Result<usize, ReportError> {
    let rows = build_rows(records);
    writer.write(&rows)?;
    Ok(rows.len())
}

/// Saves the CSV report to `path` and prints where it went.
pub fn save_csv_report(path: &Path, records: &[NetworkRecord]) -> Result<(), ReportError> {
    let mut writer = CsvReportWriter::new(path);
    let rows = save_report(&mut writer, records)?;
    println!(
        "\n💾 Analysis report saved as {} ({} rows)",
        writer.path().display(),
        rows
    );
    Ok(())
}

/// Scans once and saves the CSV analysis report.
pub fn command_report(
    output: Option<PathBuf>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_scan_source(config)?;
    let records = take_snapshot(source.as_ref())?;
    let path = output.unwrap_or_else(|| config.report_file());
    save_csv_report(&path, &records)?;
    Ok(())
}
