//! Lookup command implementation.
//!
//! Resolves the manufacturer of each scanned access point. Lookup failures are
//! reported and skipped, never fatal.

use std::time::Duration;

use pulsepilot::analysis::unique_bssids;
use pulsepilot::vendor::{HttpFetch, VendorLookup};
use pulsepilot::{NetworkRecord, ReqwestFetcher};
use tracing::warn;

use super::scan::{build_scan_source, take_snapshot};
use crate::config::Config;

/// Looks up every distinct BSSID once and prints the result.
///
/// Returns the number of successful lookups.
pub fn lookup_manufacturers<F: HttpFetch>(
    lookup: &VendorLookup<F>,
    records: &[NetworkRecord],
) -> usize {
    let mut resolved = 0;
    for bssid in unique_bssids(records) {
        match lookup.lookup(bssid) {
            Ok(manufacturer) => {
                println!("BSSID {} Manufacturer: {}", bssid, manufacturer);
                resolved += 1;
            }
            Err(e) => {
                warn!("Manufacturer lookup for {} failed: {}", bssid, e);
                println!("Failed to retrieve manufacturer for BSSID {} ({})", bssid, e);
            }
        }
    }
    resolved
}

/// Runs lookups with the configured HTTP client, unless disabled.
pub fn run_lookups(records: &[NetworkRecord], config: &Config) {
    println!("\n🏭 MAC Address Lookup:");
    if !config.enable_vendor_lookup.unwrap_or(true) {
        println!("Manufacturer lookup disabled");
        return;
    }

    let fetcher = match ReqwestFetcher::new(Duration::from_secs(config.vendor_timeout_seconds())) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            println!("Error retrieving MAC manufacturer: {}", e);
            return;
        }
    };

    let lookup = VendorLookup::new(fetcher, config.vendor_api_url());
    let resolved = lookup_manufacturers(&lookup, records);
    println!("Resolved {} of {} access points", resolved, unique_bssids(records).len());
}

/// Looks up the manufacturer of every scanned access point.
pub fn command_lookup(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_scan_source(config)?;
    let records = take_snapshot(source.as_ref())?;
    run_lookups(&records, config);
    Ok(())
}
