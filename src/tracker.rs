//! Signal tracking over time for a single SSID.
//!
//! The tracker re-runs the full scan + parse pipeline once per interval until
//! the requested duration has elapsed. Intervals in which the target is not
//! visible contribute no sample.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::scan::{parse, ScanSource};

/// Default sampling cadence.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Tick source for the sampling loop.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Blocks (or simulates blocking) for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// One observation of the target's signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackingSample {
    pub elapsed_seconds: f64,
    pub signal: u8,
}

/// Average/min/max over a session's samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalSummary {
    pub samples: usize,
    pub average: f64,
    pub minimum: u8,
    pub maximum: u8,
}

impl SignalSummary {
    /// Summarizes `samples`; `None` when there is nothing to summarize.
    pub fn from_samples(samples: &[TrackingSample]) -> Option<Self> {
        let minimum = samples.iter().map(|s| s.signal).min()?;
        let maximum = samples.iter().map(|s| s.signal).max()?;
        let total: u64 = samples.iter().map(|s| u64::from(s.signal)).sum();

        Some(Self {
            samples: samples.len(),
            average: total as f64 / samples.len() as f64,
            minimum,
            maximum,
        })
    }
}

/// Result of one tracking run.
#[derive(Debug, Clone, Serialize)]
pub struct TrackingSession {
    pub target_ssid: String,
    pub samples: Vec<TrackingSample>,
    /// Intervals in which the target was absent or the scan failed.
    pub missed_intervals: usize,
}

impl TrackingSession {
    pub fn summary(&self) -> Option<SignalSummary> {
        SignalSummary::from_samples(&self.samples)
    }
}

/// Progress notification emitted once per interval.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    Sample(TrackingSample),
    NotFound { elapsed_seconds: f64 },
}

/// Polls a scan source and records the target's signal.
pub struct SignalTracker<S, C> {
    source: S,
    clock: C,
    interval: Duration,
}

impl<S: ScanSource> SignalTracker<S, SystemClock> {
    /// Tracker with the wall clock and the default one-second cadence.
    pub fn new(source: S) -> Self {
        Self::with_clock(source, SystemClock::new())
    }
}

impl<S: ScanSource, C: Clock> SignalTracker<S, C> {
    pub fn with_clock(source: S, clock: C) -> Self {
        Self {
            source,
            clock,
            interval: DEFAULT_INTERVAL,
        }
    }

    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Samples `target_ssid` until `duration` has elapsed.
    pub fn track(&mut self, target_ssid: &str, duration: Duration) -> TrackingSession {
        self.track_with(target_ssid, duration, |_| {})
    }

    /// Like `track`, calling `on_event` after every interval.
    pub fn track_with<F>(
        &mut self,
        target_ssid: &str,
        duration: Duration,
        mut on_event: F,
    ) -> TrackingSession
    where
        F: FnMut(&TrackEvent),
    {
        let mut session = TrackingSession {
            target_ssid: target_ssid.to_string(),
            samples: Vec::new(),
            missed_intervals: 0,
        };

        let start = self.clock.now();
        debug!(
            "Tracking '{}' for {:?} every {:?}",
            target_ssid, duration, self.interval
        );

        while self.clock.now().saturating_sub(start) < duration {
            let signal = self.sample_once(target_ssid);
            let elapsed_seconds = self.clock.now().saturating_sub(start).as_secs_f64();

            let event = match signal {
                Some(signal) => {
                    let sample = TrackingSample {
                        elapsed_seconds,
                        signal,
                    };
                    session.samples.push(sample);
                    TrackEvent::Sample(sample)
                }
                None => {
                    session.missed_intervals += 1;
                    TrackEvent::NotFound { elapsed_seconds }
                }
            };
            on_event(&event);

            self.clock.sleep(self.interval);
        }

        info!(
            "Tracking of '{}' finished: {} samples, {} missed intervals",
            target_ssid,
            session.samples.len(),
            session.missed_intervals
        );
        session
    }

    /// Runs one scan and returns the signal of the first record named `target_ssid`.
    fn sample_once(&self, target_ssid: &str) -> Option<u8> {
        let records = match self
            .source
            .scan()
            .and_then(|raw| parse(&raw, self.source.platform()))
        {
            Ok(records) => records,
            Err(e) => {
                warn!("Scan failed during tracking: {} - skipping interval", e);
                return None;
            }
        };

        match records.iter().find(|r| r.ssid == target_ssid) {
            Some(record) if record.signal.is_some() => record.signal,
            Some(_) => {
                debug!("Network {} found without a signal value", target_ssid);
                None
            }
            None => {
                debug!("Network {} not found.", target_ssid);
                None
            }
        }
    }
}
