//! Analyze command implementation.
//!
//! Prints channel crowding, security levels and frequency band distribution.

use pulsepilot::analysis::{band_distribution, channel_distribution, summarize_security};
use pulsepilot::chart::channel_histogram;
use pulsepilot::NetworkRecord;

use super::scan::{build_scan_source, take_snapshot};
use crate::config::Config;

/// Channel histogram for potential interference.
pub fn print_channel_analysis(records: &[NetworkRecord], chart_width: usize) {
    let distribution = channel_distribution(records);
    let skipped = records.len() - distribution.values().sum::<usize>();

    println!();
    print!("{}", channel_histogram(&distribution, chart_width));
    if skipped > 0 {
        println!("({} networks without a usable channel were skipped)", skipped);
    }
}

/// Security descriptor counts and the list of open networks.
pub fn print_security_summary(records: &[NetworkRecord]) {
    let summary = summarize_security(records);

    println!("\nSecurity Summary:");
    for (security, count) in &summary.counts {
        let label = if security.is_empty() { "(none)" } else { security.as_str() };
        println!("{}: {} networks", label, count);
    }

    println!("\nInsecure Networks (Open): {}", summary.insecure.len());
    if !summary.insecure.is_empty() {
        println!("{:<30} {:<18} {}", "SSID", "BSSID", "Channel");
        for record in &summary.insecure {
            println!(
                "{:<30} {:<18} {}",
                record.ssid,
                record.bssid.as_deref().unwrap_or("-"),
                record.channel.as_deref().unwrap_or("-")
            );
        }
    }
}

/// Networks per frequency band.
pub fn print_band_distribution(records: &[NetworkRecord]) {
    println!("\nFrequency Band Distribution:");
    let bands = band_distribution(records);
    if bands.is_empty() {
        println!("No networks with a usable channel");
        return;
    }
    for (band, count) in bands {
        println!("{:<8} {}", band.to_string(), count);
    }
}

/// Analyzes channels, security levels and frequency bands of one scan.
pub fn command_analyze(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_scan_source(config)?;
    let records = take_snapshot(source.as_ref())?;

    println!("🔎 Analyzing {} networks", records.len());
    print_channel_analysis(&records, config.chart_width());
    print_security_summary(&records);
    print_band_distribution(&records);

    Ok(())
}
