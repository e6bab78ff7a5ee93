//! Config command implementation.
//!
//! Generates configuration files in various formats.

use std::fs;
use std::path::PathBuf;

use crate::cli::ConfigFormat;
use crate::config::{render_config, Config};

/// Generates configuration files.
pub fn command_config(
    output: Option<PathBuf>,
    format: ConfigFormat,
    commented: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let output = match output {
        Some(path) => path,
        None => PathBuf::from(match format {
            ConfigFormat::Json => "pulsepilot.json",
            ConfigFormat::Toml => "pulsepilot.toml",
            ConfigFormat::Yaml => "pulsepilot.yaml",
        }),
    };

    let mut content = render_config(&config, &format)?;
    if commented && matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, content)?;
        println!("✅ Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# PulsePilot WiFi Scanner Configuration
# =====================================
#
# Scanning
# --------
# platform: null               # "linux", "windows" or null to detect the host OS
# scan_file: null              # Replay a captured nmcli/netsh output instead of scanning
#
# Tracking
# --------
# track_duration_seconds: 30   # How long to track the selected network
# track_interval_ms: 1000      # Sampling cadence
#
# Reporting
# ---------
# report_file: "pulsepilot_report.csv"  # CSV report path (overwritten on every save)
# chart_width: 50              # Width of terminal charts in characters
#
# Manufacturer Lookup
# -------------------
# enable_vendor_lookup: true   # Query a MAC vendor service for each BSSID
# vendor_api_url: "https://macvendors.co/api"
# vendor_timeout_seconds: 5
#
# Logging
# -------
# log_level: "info"            # off, error, warn, info, debug, trace
"#;

    format!("{comments}\n{yaml}")
}
