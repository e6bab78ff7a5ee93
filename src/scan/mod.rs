//! WiFi scan pipeline: OS scan command invocation and output parsing.
//!
//! This module provides:
//! - `platform`: Host OS selection and scan command execution
//! - `parser`: Conversion of raw `nmcli` / `netsh` text into `NetworkRecord`s

pub mod parser;
pub mod platform;

use serde::Serialize;
use std::fmt;

// Re-export commonly used types
pub use parser::{parse, parse_linux, parse_windows, WindowsParser, WindowsState};
pub use platform::{CaptureFileScanner, CommandScanner, Platform, ScanSource};

/// One observed access point at one scan instant.
///
/// Fields other than `ssid` are optional because a partial `netsh` block may
/// not carry every line. Records produced from `nmcli` output are always
/// complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkRecord {
    pub ssid: String,
    pub signal: Option<u8>,
    pub channel: Option<String>,
    pub bssid: Option<String>,
    pub security: Option<String>,
}

impl NetworkRecord {
    /// Creates an empty record for the given SSID.
    pub fn new(ssid: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            ..Self::default()
        }
    }

    /// Returns true when every field has been populated.
    pub fn is_complete(&self) -> bool {
        self.signal.is_some()
            && self.channel.is_some()
            && self.bssid.is_some()
            && self.security.is_some()
    }

    /// Channel coerced to an integer, if present and numeric.
    pub fn channel_number(&self) -> Option<u32> {
        self.channel.as_deref().and_then(|c| c.trim().parse().ok())
    }
}

impl fmt::Display for NetworkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let signal = self
            .signal
            .map(|s| format!("{s}%"))
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{:<30} {:<18} {:>6}  Ch {:>3}  {}",
            self.ssid,
            self.bssid.as_deref().unwrap_or("-"),
            signal,
            self.channel.as_deref().unwrap_or("-"),
            self.security.as_deref().unwrap_or("-")
        )
    }
}

/// Errors raised while selecting a platform or extracting records from scan output.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Unsupported platform '{0}': only Linux and Windows are supported")]
    UnsupportedPlatform(String),

    #[error("Malformed {field} value '{value}'")]
    MalformedField { field: &'static str, value: String },

    #[error("Failed to read scan capture: {0}")]
    Io(#[from] std::io::Error),
}
