//! Terminal charts for scan and tracking results.
//!
//! Charts are rendered to plain strings so callers decide where they go.

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;

use crate::analysis::MAX_2_4GHZ_CHANNEL;
use crate::scan::NetworkRecord;
use crate::tracker::TrackingSample;

pub const DEFAULT_CHART_WIDTH: usize = 50;

const BAR: char = '█';
const POINT: char = '●';
const LABEL_WIDTH: usize = 24;
const LINE_CHART_HEIGHT: usize = 10;

/// Horizontal bar chart of signal strength per SSID.
pub fn signal_bar_chart(records: &[NetworkRecord], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "WiFi Network Signal Strength");

    for record in records {
        let signal = record.signal.unwrap_or(0);
        let len = scaled(f64::from(signal), 100.0, width);
        let label = if record.ssid.is_empty() {
            "<hidden>"
        } else {
            record.ssid.as_str()
        };
        let _ = writeln!(
            out,
            "{:<w$} |{} {}%",
            truncate(label, LABEL_WIDTH),
            BAR.to_string().repeat(len),
            signal,
            w = LABEL_WIDTH
        );
    }
    out
}

/// Histogram of networks per 2.4GHz channel, followed by a count of
/// networks on any other channel.
pub fn channel_histogram(distribution: &BTreeMap<u32, usize>, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Channel Distribution (Potential Interference)");

    let peak = distribution.values().copied().max().unwrap_or(0).max(1);
    for channel in 1..=MAX_2_4GHZ_CHANNEL {
        let count = distribution.get(&channel).copied().unwrap_or(0);
        let len = scaled(count as f64, peak as f64, width);
        let _ = writeln!(
            out,
            "Ch {:>3} |{} {}",
            channel,
            BAR.to_string().repeat(len),
            count
        );
    }

    let other: usize = distribution
        .iter()
        .filter(|(channel, _)| **channel > MAX_2_4GHZ_CHANNEL || **channel == 0)
        .map(|(_, count)| count)
        .sum();
    if other > 0 {
        let _ = writeln!(out, "Other channels: {}", other);
    }
    out
}

/// Signal-over-time chart with a 0-100% vertical axis.
pub fn signal_line_chart(target_ssid: &str, samples: &[TrackingSample], width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Signal Strength Over Time for {}", target_ssid);

    if samples.is_empty() {
        let _ = writeln!(out, "(no samples)");
        return out;
    }

    let columns = width.max(2);
    let last_elapsed = samples
        .last()
        .map(|s| s.elapsed_seconds)
        .unwrap_or(0.0)
        .max(f64::EPSILON);

    let mut grid = vec![vec![' '; columns]; LINE_CHART_HEIGHT + 1];
    for sample in samples {
        let x = ((sample.elapsed_seconds / last_elapsed) * (columns - 1) as f64).round() as usize;
        let y = scaled(f64::from(sample.signal.min(100)), 100.0, LINE_CHART_HEIGHT);
        grid[LINE_CHART_HEIGHT - y][x.min(columns - 1)] = POINT;
    }

    for (row, cells) in grid.iter().enumerate() {
        let level = 100 - row * 100 / LINE_CHART_HEIGHT;
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{:>4}% |{}", level, line.trim_end());
    }
    let _ = writeln!(out, "      +{}", "-".repeat(columns));
    let _ = writeln!(
        out,
        "       0s{:>w$}",
        format!("{:.1}s", last_elapsed),
        w = columns.saturating_sub(2)
    );
    out
}

/// Length of a bar for `value` out of `max`, using `width` cells.
fn scaled(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(50.0, 100.0, 10), 5);
        assert_eq!(scaled(100.0, 100.0, 10), 10);
        assert_eq!(scaled(250.0, 100.0, 10), 10);
        assert_eq!(scaled(1.0, 0.0, 10), 0);
    }

    #[test]
    fn test_signal_bar_chart() {
        let records = vec![
            NetworkRecord {
                signal: Some(100),
                ..NetworkRecord::new("Full")
            },
            NetworkRecord {
                signal: Some(50),
                ..NetworkRecord::new("")
            },
        ];
        let chart = signal_bar_chart(&records, 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Full"));
        assert_eq!(lines[1].matches(BAR).count(), 10);
        assert!(lines[2].starts_with("<hidden>"));
        assert_eq!(lines[2].matches(BAR).count(), 5);
    }

    #[test]
    fn test_channel_histogram() {
        let mut dist = BTreeMap::new();
        dist.insert(6, 4);
        dist.insert(11, 2);
        dist.insert(36, 1);
        let chart = channel_histogram(&dist, 8);
        let ch6 = chart.lines().find(|l| l.starts_with("Ch   6")).unwrap();
        assert_eq!(ch6.matches(BAR).count(), 8);
        let ch11 = chart.lines().find(|l| l.starts_with("Ch  11")).unwrap();
        assert_eq!(ch11.matches(BAR).count(), 4);
        assert!(chart.contains("Other channels: 1"));
    }

    #[test]
    fn test_line_chart_points() {
        let samples = vec![
            TrackingSample {
                elapsed_seconds: 0.0,
                signal: 100,
            },
            TrackingSample {
                elapsed_seconds: 1.0,
                signal: 50,
            },
            TrackingSample {
                elapsed_seconds: 2.0,
                signal: 0,
            },
        ];
        let chart = signal_line_chart("Home", &samples, 20);
        assert_eq!(chart.matches(POINT).count(), 3);
        assert!(chart.contains(" 100% |●"));
        assert!(chart.contains("2.0s"));
    }

    #[test]
    fn test_line_chart_empty() {
        let chart = signal_line_chart("Home", &[], 20);
        assert!(chart.contains("(no samples)"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-network-name", 10), "a-very-...");
    }
}
