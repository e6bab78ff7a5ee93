//! Run command implementation.
//!
//! The full pipeline: scan, chart, select, track, analyze, look up
//! manufacturers and save the report.

use std::time::Duration;

use pulsepilot::chart::{signal_bar_chart, signal_line_chart};
use tracing::info;

use super::analyze::{print_band_distribution, print_channel_analysis, print_security_summary};
use super::lookup::run_lookups;
use super::report::save_csv_report;
use super::scan::{build_scan_source, print_network_table, take_snapshot};
use super::track::{prompt_target_ssid, track_and_report};
use crate::config::Config;

/// Runs every analysis step against one scan.
pub fn command_run(ssid: Option<String>, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_scan_source(config)?;
    let chart_width = config.chart_width();

    // Scan and list networks
    let records = take_snapshot(source.as_ref())?;
    println!("📡 Available Networks:");
    print_network_table(&records);
    if records.is_empty() {
        info!("Nothing to analyze - no networks visible");
        save_csv_report(&config.report_file(), &records)?;
        return Ok(());
    }

    println!();
    print!("{}", signal_bar_chart(&records, chart_width));

    // Select target SSID and track its signal strength
    let target = match ssid {
        Some(ssid) => ssid,
        None => prompt_target_ssid(&records)?,
    };
    let session = track_and_report(
        source.as_ref(),
        &target,
        Duration::from_secs(config.track_duration_seconds()),
        Duration::from_millis(config.track_interval_ms()),
    );
    println!();
    print!(
        "{}",
        signal_line_chart(&session.target_ssid, &session.samples, chart_width)
    );

    // Analyze channels, security levels and frequency bands
    print_channel_analysis(&records, chart_width);
    print_security_summary(&records);
    print_band_distribution(&records);

    run_lookups(&records, config);

    save_csv_report(&config.report_file(), &records)?;
    Ok(())
}
