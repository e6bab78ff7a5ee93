//! CSV analysis report.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::analysis::{record_band, FrequencyBand};
use crate::scan::NetworkRecord;

pub const DEFAULT_REPORT_FILE: &str = "pulsepilot_report.csv";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Csv(#[from] csv::Error),
}

/// One report line: a scanned network plus its derived band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "SSID")]
    pub ssid: String,
    #[serde(rename = "Signal")]
    pub signal: Option<u8>,
    #[serde(rename = "Channel")]
    pub channel: Option<String>,
    #[serde(rename = "BSSID")]
    pub bssid: Option<String>,
    #[serde(rename = "Security")]
    pub security: Option<String>,
    #[serde(rename = "Frequency Band")]
    pub frequency_band: Option<FrequencyBand>,
}

impl From<&NetworkRecord> for ReportRow {
    fn from(record: &NetworkRecord) -> Self {
        Self {
            ssid: record.ssid.clone(),
            signal: record.signal,
            channel: record.channel.clone(),
            bssid: record.bssid.clone(),
            security: record.security.clone(),
            frequency_band: record_band(record),
        }
    }
}

/// Builds report rows in scan order.
pub fn build_rows(records: &[NetworkRecord]) -> Vec<ReportRow> {
    records.iter().map(ReportRow::from).collect()
}

/// Report persistence capability.
pub trait ReportWriter {
    fn write(&mut self, rows: &[ReportRow]) -> Result<(), ReportError>;
}

/// Writes rows to a CSV file, replacing any previous content.
#[derive(Debug, Clone)]
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportWriter for CsvReportWriter {
    fn write(&mut self, rows: &[ReportRow]) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        if rows.is_empty() {
            writer.write_record([
                "SSID",
                "Signal",
                "Channel",
                "BSSID",
                "Security",
                "Frequency Band",
            ])?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        info!("Wrote {} report rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<NetworkRecord> {
        vec![
            NetworkRecord {
                ssid: "HomeNet".into(),
                signal: Some(82),
                channel: Some("36".into()),
                bssid: Some("a4:2b:b0:10:20:30".into()),
                security: Some("WPA2".into()),
            },
            NetworkRecord {
                ssid: "Partial".into(),
                signal: Some(10),
                ..NetworkRecord::default()
            },
        ]
    }

    #[test]
    fn test_rows_carry_band() {
        let rows = build_rows(&sample_records());
        assert_eq!(rows[0].frequency_band, Some(FrequencyBand::Band5GHz));
        assert_eq!(rows[1].frequency_band, None);
    }

    #[test]
    fn test_csv_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let mut writer = CsvReportWriter::new(&path);
        assert_eq!(writer.path(), path.as_path());
        writer.write(&build_rows(&sample_records())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "SSID,Signal,Channel,BSSID,Security,Frequency Band");
        assert_eq!(lines[1], "HomeNet,82,36,a4:2b:b0:10:20:30,WPA2,5GHz");
        assert_eq!(lines[2], "Partial,10,,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let mut writer = CsvReportWriter::new(&path);
        writer.write(&build_rows(&sample_records())).unwrap();
        writer.write(&build_rows(&sample_records()[..1])).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_report_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        CsvReportWriter::new(&path).write(&[]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "SSID,Signal,Channel,BSSID,Security,Frequency Band");
    }
}
