//! Integration tests for the signal tracker.
//!
//! A fake clock replaces real sleeping, so a multi-second session runs
//! instantly and deterministically.

use std::cell::Cell;
use std::time::Duration;

use pulsepilot::{Clock, Platform, ScanError, ScanSource, SignalTracker};

/// Clock that advances only when the tracker sleeps, plus a fixed scan cost.
struct FakeClock {
    now: Cell<Duration>,
    scan_cost: Duration,
}

impl FakeClock {
    fn new(scan_cost: Duration) -> Self {
        Self {
            now: Cell::new(Duration::ZERO),
            scan_cost,
        }
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        // Account the scan that preceded this sleep as well
        self.now.set(self.now.get() + self.scan_cost + duration);
    }
}

/// Scan stub returning a fixed `nmcli` capture and counting calls.
struct StubSource {
    output: &'static str,
    scans: Cell<usize>,
}

impl StubSource {
    fn new(output: &'static str) -> Self {
        Self {
            output,
            scans: Cell::new(0),
        }
    }
}

impl ScanSource for StubSource {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn scan(&self) -> Result<String, ScanError> {
        self.scans.set(self.scans.get() + 1);
        Ok(self.output.to_string())
    }
}

#[test]
fn test_target_present_every_interval() {
    let source = StubSource::new("Other:30:1:aa:WPA2\nTarget:75:6:bb:WPA2\n");
    let mut tracker = SignalTracker::with_clock(&source, FakeClock::new(Duration::ZERO));

    let session = tracker.track("Target", Duration::from_secs(3));

    assert_eq!(source.scans.get(), 3);
    assert_eq!(session.samples.len(), 3);
    assert!(session
        .samples
        .windows(2)
        .all(|w| w[0].elapsed_seconds < w[1].elapsed_seconds));

    let summary = session.summary().unwrap();
    let mean = session.samples.iter().map(|s| f64::from(s.signal)).sum::<f64>() / 3.0;
    assert_eq!(summary.average, mean);
    assert_eq!(summary.minimum, 75);
    assert_eq!(summary.maximum, 75);
}

#[test]
fn test_target_always_absent() {
    let source = StubSource::new("Other:30:1:aa:WPA2\n");
    let mut tracker = SignalTracker::with_clock(&source, FakeClock::new(Duration::ZERO));

    let session = tracker.track("Target", Duration::from_secs(3));

    assert!(session.samples.is_empty());
    assert_eq!(session.missed_intervals, 3);
    assert!(session.summary().is_none());
}

#[test]
fn test_slow_scans_reduce_sample_count() {
    // Each scan takes 500ms on top of the 1s cadence
    let source = StubSource::new("Target:50:6:bb:WPA2\n");
    let mut tracker = SignalTracker::with_clock(&source, FakeClock::new(Duration::from_millis(500)));

    let session = tracker.track("Target", Duration::from_secs(3));

    assert_eq!(session.samples.len(), 2);
    assert_eq!(session.samples[1].elapsed_seconds, 1.5);
}
