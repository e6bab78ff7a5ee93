//! Scan command implementation.
//!
//! Runs one scan and prints the network table, plus the helpers every other
//! command uses to obtain a snapshot.

use std::time::Instant;

use pulsepilot::chart::signal_bar_chart;
use pulsepilot::{
    parse, CaptureFileScanner, CommandScanner, NetworkRecord, Platform, ScanError, ScanSource,
};
use tracing::{debug, info};

use crate::config::Config;

/// Builds the scan source selected by the configuration.
///
/// The platform is resolved first, so an unsupported OS fails here before any
/// process is spawned.
pub fn build_scan_source(config: &Config) -> Result<Box<dyn ScanSource>, ScanError> {
    let platform = match config.platform.as_deref() {
        Some(name) => Platform::from_os_name(name)?,
        None => Platform::detect()?,
    };

    Ok(match &config.scan_file {
        Some(path) => {
            let scanner = CaptureFileScanner::new(platform, path);
            info!(
                "Replaying {} scan capture from {}",
                platform,
                scanner.path().display()
            );
            Box::new(scanner)
        }
        None => {
            debug!("Using {} scan command", platform);
            Box::new(CommandScanner::new(platform))
        }
    })
}

/// Runs one scan and parses it into a snapshot.
pub fn take_snapshot(source: &dyn ScanSource) -> Result<Vec<NetworkRecord>, ScanError> {
    let start = Instant::now();
    let raw = source.scan()?;
    let records = parse(&raw, source.platform())?;
    debug!(
        "Scan returned {} networks in {:.2}ms",
        records.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(records)
}

/// Prints the numbered network table.
pub fn print_network_table(records: &[NetworkRecord]) {
    if records.is_empty() {
        println!("No networks found.");
        return;
    }

    println!(
        "\n{:<4} {:<30} {:<18} {:>6}  {:<6}  {}",
        "#", "SSID", "BSSID", "Signal", "Ch", "Security"
    );
    println!("{}", "─".repeat(90));
    for (idx, record) in records.iter().enumerate() {
        println!("{:<4} {}", idx + 1, record);
    }

    let incomplete = records.iter().filter(|r| !r.is_complete()).count();
    if incomplete > 0 {
        println!("\n⚠️  {} networks reported incomplete data", incomplete);
    }
}

/// Scans once and lists visible networks.
pub fn command_scan(chart: bool, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_scan_source(config)?;
    let records = take_snapshot(source.as_ref())?;

    println!("📡 Available Networks:");
    print_network_table(&records);

    if chart && !records.is_empty() {
        println!();
        print!("{}", signal_bar_chart(&records, config.chart_width()));
    }

    Ok(())
}
