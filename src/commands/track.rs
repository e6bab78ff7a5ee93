//! Track command implementation.
//!
//! Selects a network (from the CLI or a numbered menu) and samples its signal
//! for the configured duration.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use pulsepilot::chart::signal_line_chart;
use pulsepilot::tracker::TrackEvent;
use pulsepilot::{Clock, NetworkRecord, ScanSource, SignalTracker, TrackingSession};

use super::scan::{build_scan_source, take_snapshot};
use crate::config::Config;

/// Invalid answers to the network selection prompt.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("no networks available to select from")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("choice {choice} is out of range (1-{max})")]
    OutOfRange { choice: usize, max: usize },

    #[error("failed to read selection: {0}")]
    Io(#[from] io::Error),
}

/// Prints a 1-based menu of SSIDs and reads one choice from `input`.
pub fn select_target_ssid<R: BufRead, W: Write>(
    records: &[NetworkRecord],
    mut input: R,
    mut output: W,
) -> Result<String, SelectionError> {
    if records.is_empty() {
        return Err(SelectionError::Empty);
    }

    writeln!(output, "\nAvailable Networks:")?;
    for (idx, record) in records.iter().enumerate() {
        writeln!(output, "{}: {}", idx + 1, record.ssid)?;
    }
    write!(output, "\nEnter the number of the network to analyze: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    let choice: usize = answer
        .parse()
        .map_err(|_| SelectionError::NotANumber(answer.to_string()))?;
    if choice == 0 || choice > records.len() {
        return Err(SelectionError::OutOfRange {
            choice,
            max: records.len(),
        });
    }

    Ok(records[choice - 1].ssid.clone())
}

/// Prompts on stdin/stdout.
pub fn prompt_target_ssid(records: &[NetworkRecord]) -> Result<String, SelectionError> {
    let stdin = io::stdin();
    select_target_ssid(records, stdin.lock(), io::stdout())
}

/// Tracks `ssid`, printing each interval as it happens.
pub fn track_and_report<S: ScanSource>(
    source: S,
    ssid: &str,
    duration: Duration,
    interval: Duration,
) -> TrackingSession {
    println!("📶 Tracking signal strength for {}", ssid);

    let mut tracker = SignalTracker::new(source).interval(interval);
    let session = write_tracking_progress(&mut tracker, ssid, duration, io::stdout());

    print_summary(&session);
    session
}

/// Runs `tracker` and writes one line per interval to `output`.
pub fn write_tracking_progress<S: ScanSource, C: Clock, W: Write>(
    tracker: &mut SignalTracker<S, C>,
    ssid: &str,
    duration: Duration,
    mut output: W,
) -> TrackingSession {
    tracker.track_with(ssid, duration, |event| {
        let _ = match event {
            TrackEvent::Sample(sample) => writeln!(
                output,
                "Time: {:.2}s - Signal: {} %",
                sample.elapsed_seconds, sample.signal
            ),
            TrackEvent::NotFound { .. } => writeln!(output, "Network {} not found.", ssid),
        };
    })
}

/// Prints average/min/max, or a notice when nothing was sampled.
pub fn print_summary(session: &TrackingSession) {
    match session.summary() {
        Some(summary) => {
            println!("\nSignal Stability Analysis for {}:", session.target_ssid);
            println!("  - Average Signal Strength: {:.2} %", summary.average);
            println!("  - Minimum Signal Strength: {} %", summary.minimum);
            println!("  - Maximum Signal Strength: {} %", summary.maximum);
        }
        None => println!(
            "\nNo samples collected for {} - nothing to analyze",
            session.target_ssid
        ),
    }
}

/// Tracks one network's signal over time.
pub fn command_track(
    ssid: Option<String>,
    duration: Option<u64>,
    interval_ms: Option<u64>,
    chart: bool,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let duration = duration.unwrap_or_else(|| config.track_duration_seconds());
    let interval_ms = interval_ms.unwrap_or_else(|| config.track_interval_ms());
    if duration == 0 || interval_ms == 0 {
        return Err("duration and interval must be greater than 0".into());
    }

    let source = build_scan_source(config)?;
    let ssid = match ssid {
        Some(ssid) => ssid,
        None => prompt_target_ssid(&take_snapshot(source.as_ref())?)?,
    };

    let session = track_and_report(
        source.as_ref(),
        &ssid,
        Duration::from_secs(duration),
        Duration::from_millis(interval_ms),
    );

    if chart {
        println!();
        print!(
            "{}",
            signal_line_chart(&session.target_ssid, &session.samples, config.chart_width())
        );
    }

    Ok(())
}
