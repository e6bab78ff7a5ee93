//! Generate testdata command implementation.
//!
//! Writes a synthetic `nmcli` or `netsh` capture that can be replayed with
//! `--scan-file`.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use pulsepilot::NetworkRecord;

use crate::cli::CaptureFormat;

const SSID_STEMS: &[&str] = &[
    "HomeNet", "TP-Link", "FRITZ!Box", "Livebox", "CoffeeShop", "Office", "Guest",
    "NETGEAR", "Linksys", "eduroam", "Airport", "Library",
];
const CHANNELS: &[u32] = &[1, 6, 11, 3, 9, 13, 36, 40, 44, 48, 100, 149, 157];
const LINUX_SECURITY: &[&str] = &["WPA2", "WPA1 WPA2", "WPA3", "WPA2 802.1X", ""];
const WINDOWS_SECURITY: &[&str] = &["WPA2-Personal", "WPA3-Personal", "WPA2-Enterprise", "Open"];

/// Random networks with complete fields.
pub fn generate_networks<R: Rng>(
    rng: &mut R,
    count: usize,
    format: CaptureFormat,
) -> Vec<NetworkRecord> {
    let securities = match format {
        CaptureFormat::Linux => LINUX_SECURITY,
        CaptureFormat::Windows => WINDOWS_SECURITY,
    };

    (0..count)
        .map(|_| {
            let stem = SSID_STEMS.choose(rng).copied().unwrap_or("Network");
            let bssid: Vec<String> = (0..6).map(|_| format!("{:02X}", rng.gen::<u8>())).collect();
            NetworkRecord {
                ssid: format!("{}_{:04}", stem, rng.gen_range(0..10_000)),
                signal: Some(rng.gen_range(5..=100)),
                channel: CHANNELS.choose(rng).map(|c| c.to_string()),
                bssid: Some(bssid.join(":")),
                security: securities.choose(rng).map(|s| s.to_string()),
            }
        })
        .collect()
}

/// Escapes a value for an `nmcli -t` line.
fn escape_terse(value: &str) -> String {
    value.replace('\\', "\\\\").replace(':', "\\:")
}

/// Renders records the way `nmcli -t -f SSID,SIGNAL,CHAN,BSSID,SECURITY` prints them.
pub fn render_linux_capture(records: &[NetworkRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let _ = writeln!(
            out,
            "{}:{}:{}:{}:{}",
            escape_terse(&r.ssid),
            r.signal.unwrap_or(0),
            escape_terse(r.channel.as_deref().unwrap_or("")),
            escape_terse(r.bssid.as_deref().unwrap_or("")),
            escape_terse(r.security.as_deref().unwrap_or(""))
        );
    }
    out
}

/// Renders records the way `netsh wlan show network mode=Bssid` prints them.
pub fn render_windows_capture(records: &[NetworkRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nInterface name : Wi-Fi");
    let _ = writeln!(out, "There are {} networks currently visible.\n", records.len());

    for (idx, r) in records.iter().enumerate() {
        let _ = writeln!(out, "SSID {} : {}", idx + 1, r.ssid);
        let _ = writeln!(out, "    Network type            : Infrastructure");
        if let Some(security) = &r.security {
            let _ = writeln!(out, "    Authentication          : {}", security);
        }
        let _ = writeln!(out, "    Encryption              : CCMP");
        if let Some(bssid) = &r.bssid {
            let _ = writeln!(out, "    BSSID 1                 : {}", bssid.to_lowercase());
        }
        if let Some(signal) = r.signal {
            let _ = writeln!(out, "         Signal             : {}%", signal);
        }
        let _ = writeln!(out, "         Radio type         : 802.11ac");
        if let Some(channel) = &r.channel {
            let _ = writeln!(out, "         Channel            : {}", channel);
        }
        let _ = writeln!(out, "         Basic rates (Mbps) : 6 12 24");
        let _ = writeln!(out);
    }
    out
}

/// Generates a synthetic scan capture file.
pub fn command_generate_testdata(
    output: PathBuf,
    format: CaptureFormat,
    networks: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        "Generating test data: networks={}, format={:?}, output={}",
        networks,
        format,
        output.display()
    );

    let mut rng = rand::thread_rng();
    let records = generate_networks(&mut rng, networks, format);
    let content = match format {
        CaptureFormat::Linux => render_linux_capture(&records),
        CaptureFormat::Windows => render_windows_capture(&records),
    };

    fs::write(&output, content)?;
    info!("Wrote {} synthetic networks to {}", records.len(), output.display());

    let platform = match format {
        CaptureFormat::Linux => "linux",
        CaptureFormat::Windows => "windows",
    };
    println!(
        "✅ Scan capture written to: {} ({} networks, generated {})",
        output.display(),
        records.len(),
        Utc::now().to_rfc3339()
    );
    println!(
        "   Replay with: pulsepilot --platform {} --scan-file {} scan",
        platform,
        output.display()
    );
    Ok(())
}
