//! Parsers for `nmcli` and `netsh` scan output.
//!
//! Linux output is one colon-delimited line per network. Windows output is a
//! free-text block per network, parsed with an explicit line state machine so
//! every transition can be exercised on its own.

use tracing::trace;

use super::platform::Platform;
use super::{NetworkRecord, ScanError};

/// Signal is a percentage.
const MAX_SIGNAL: u8 = 100;

/// Minimum number of fields in an `nmcli -t` line (SSID, SIGNAL, CHAN, BSSID, SECURITY).
const LINUX_FIELD_COUNT: usize = 5;

/// Parses raw scan output for the given platform, preserving scan order.
pub fn parse(raw: &str, platform: Platform) -> Result<Vec<NetworkRecord>, ScanError> {
    match platform {
        Platform::Linux => parse_linux(raw),
        Platform::Windows => parse_windows(raw),
    }
}

/// Parses `nmcli -t -f SSID,SIGNAL,CHAN,BSSID,SECURITY device wifi list` output.
///
/// Lines with fewer than five fields are dropped. A non-numeric signal fails
/// the whole extraction.
pub fn parse_linux(raw: &str) -> Result<Vec<NetworkRecord>, ScanError> {
    let mut records = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split_terse_fields(line);
        if fields.len() < LINUX_FIELD_COUNT {
            trace!("Dropping partial nmcli line ({} fields): {}", fields.len(), line);
            continue;
        }

        records.push(NetworkRecord {
            ssid: fields[0].clone(),
            signal: Some(parse_signal(&fields[1])?),
            channel: Some(fields[2].clone()),
            bssid: Some(fields[3].clone()),
            security: Some(fields[4].clone()),
        });
    }

    Ok(records)
}

/// Splits an `nmcli` terse line on unescaped colons.
///
/// `nmcli -t` writes literal colons as `\:` and backslashes as `\\`, which is
/// how the BSSID survives inside a colon-delimited line.
fn split_terse_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            ':' => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Parses `netsh wlan show network mode=Bssid` output.
pub fn parse_windows(raw: &str) -> Result<Vec<NetworkRecord>, ScanError> {
    let mut parser = WindowsParser::new();
    let mut records = Vec::new();

    for line in raw.lines() {
        if let Some(record) = parser.feed(line)? {
            records.push(record);
        }
    }
    records.extend(parser.finish());

    Ok(records)
}

/// State of the `netsh` block parser between two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WindowsState {
    #[default]
    NoCurrentNetwork,
    BuildingNetwork(NetworkRecord),
}

impl WindowsState {
    /// Applies one line and returns the next state plus any network completed
    /// by this line.
    ///
    /// Rules are checked in order: SSID header, Signal, Channel, BSSID,
    /// Authentication. Lines outside a network block are ignored.
    pub fn step(self, line: &str) -> Result<(WindowsState, Option<NetworkRecord>), ScanError> {
        let line = line.trim();

        if line.starts_with("SSID") && !line.starts_with("SSID BSSID") {
            let emitted = match self {
                WindowsState::BuildingNetwork(record) => Some(record),
                WindowsState::NoCurrentNetwork => None,
            };
            let next = NetworkRecord::new(value_after_colon(line));
            return Ok((WindowsState::BuildingNetwork(next), emitted));
        }

        let mut record = match self {
            WindowsState::BuildingNetwork(record) => record,
            WindowsState::NoCurrentNetwork => {
                trace!("Ignoring netsh line outside a network block: {}", line);
                return Ok((WindowsState::NoCurrentNetwork, None));
            }
        };

        if line.contains("Signal") {
            let value = value_after_colon(line);
            record.signal = Some(parse_signal(value.strip_suffix('%').unwrap_or(value))?);
        } else if line.contains("Channel") {
            record.channel = Some(value_after_colon(line).to_string());
        } else if line.starts_with("BSSID") {
            let mac = reconstruct_bssid(line);
            record.bssid = (!mac.is_empty()).then_some(mac);
        } else if line.contains("Authentication") {
            record.security = Some(value_after_colon(line).to_string());
        }

        Ok((WindowsState::BuildingNetwork(record), None))
    }

    /// Emits the network still being built at end of input.
    pub fn finish(self) -> Option<NetworkRecord> {
        match self {
            WindowsState::BuildingNetwork(record) => Some(record),
            WindowsState::NoCurrentNetwork => None,
        }
    }
}

/// Line-at-a-time driver around `WindowsState::step`.
#[derive(Debug, Default)]
pub struct WindowsParser {
    state: WindowsState,
}

impl WindowsParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line; returns the previous network when a new header starts.
    pub fn feed(&mut self, line: &str) -> Result<Option<NetworkRecord>, ScanError> {
        let state = std::mem::take(&mut self.state);
        let (next, emitted) = state.step(line)?;
        self.state = next;
        Ok(emitted)
    }

    pub fn finish(self) -> Option<NetworkRecord> {
        self.state.finish()
    }
}

/// Rebuilds a MAC address from a `BSSID n : aa:bb:...` line.
///
/// The line is split on every colon, so the MAC octets arrive as separate
/// segments; only two-character hex segments after the label are kept.
fn reconstruct_bssid(line: &str) -> String {
    line.split(':')
        .skip(1)
        .map(str::trim)
        .filter(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit()))
        .collect::<Vec<_>>()
        .join(":")
}

/// Trimmed text after the first colon, or an empty string when there is none.
fn value_after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("")
}

/// Parses a 0-100 signal percentage.
fn parse_signal(value: &str) -> Result<u8, ScanError> {
    match value.trim().parse::<u8>() {
        Ok(signal) if signal <= MAX_SIGNAL => Ok(signal),
        _ => Err(ScanError::MalformedField {
            field: "signal",
            value: value.to_string(),
        }),
    }
}
