//! PulsePilot WiFi Scanner Library
//!
//! This library scans nearby wireless networks through the tools the operating
//! system already provides (`nmcli` on Linux, `netsh` on Windows), normalizes
//! their output into [`NetworkRecord`]s and tracks one network's signal over
//! time.
//!
//! # Features
//!
//! - **Cross-platform parsing**: colon-delimited `nmcli` lines and free-text `netsh` blocks
//! - **Signal tracking**: fixed-cadence sampling with an injectable clock
//! - **Analysis**: frequency bands, channel crowding, open networks
//! - **Reporting**: CSV report, terminal charts, MAC vendor lookup
//!
//! # Usage
//!
//! ```rust
//! use pulsepilot::{parse, Platform};
//!
//! let raw = "HomeNet:82:6:A4\\:2B\\:B0\\:10\\:20\\:30:WPA2\n";
//! let records = parse(raw, Platform::Linux).unwrap();
//!
//! assert_eq!(records[0].ssid, "HomeNet");
//! assert_eq!(records[0].signal, Some(82));
//! assert_eq!(records[0].bssid.as_deref(), Some("A4:2B:B0:10:20:30"));
//! ```

pub mod analysis;
pub mod chart;
pub mod report;
pub mod scan;
pub mod tracker;
pub mod vendor;

// Re-export main types for convenience
pub use analysis::{determine_frequency_band, FrequencyBand};
pub use report::{CsvReportWriter, ReportRow, ReportWriter};
pub use scan::{
    parse, CaptureFileScanner, CommandScanner, NetworkRecord, Platform, ScanError, ScanSource,
};
pub use tracker::{
    Clock, SignalSummary, SignalTracker, SystemClock, TrackingSample, TrackingSession,
};
pub use vendor::{HttpFetch, ReqwestFetcher, VendorError, VendorLookup};
