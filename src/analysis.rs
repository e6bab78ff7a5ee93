//! Snapshot analysis: frequency bands, channel crowding and security levels.

use std::collections::BTreeMap;
use std::fmt;

use ahash::AHashMap as HashMap;
use serde::Serialize;
use tracing::debug;

use crate::scan::NetworkRecord;

/// Highest channel number in the 2.4GHz band.
pub const MAX_2_4GHZ_CHANNEL: u32 = 14;

/// Frequency band derived from a channel number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FrequencyBand {
    #[serde(rename = "2.4GHz")]
    Band2_4GHz,
    #[serde(rename = "5GHz")]
    Band5GHz,
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyBand::Band2_4GHz => write!(f, "2.4GHz"),
            FrequencyBand::Band5GHz => write!(f, "5GHz"),
        }
    }
}

/// Classifies a channel: up to 14 is 2.4GHz, anything above is 5GHz.
pub fn determine_frequency_band(channel: u32) -> FrequencyBand {
    if channel <= MAX_2_4GHZ_CHANNEL {
        FrequencyBand::Band2_4GHz
    } else {
        FrequencyBand::Band5GHz
    }
}

/// Band of a record, or `None` when its channel is unset or not numeric.
pub fn record_band(record: &NetworkRecord) -> Option<FrequencyBand> {
    record.channel_number().map(determine_frequency_band)
}

/// Number of networks per band. Records without a usable channel are skipped.
pub fn band_distribution(records: &[NetworkRecord]) -> BTreeMap<FrequencyBand, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        match record_band(record) {
            Some(band) => *counts.entry(band).or_insert(0) += 1,
            None => debug!("Skipping '{}' in band analysis: no usable channel", record.ssid),
        }
    }
    counts
}

/// Number of networks per channel. Records without a usable channel are skipped.
pub fn channel_distribution(records: &[NetworkRecord]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        match record.channel_number() {
            Some(channel) => *counts.entry(channel).or_insert(0) += 1,
            None => debug!(
                "Skipping '{}' in channel analysis: channel {:?}",
                record.ssid, record.channel
            ),
        }
    }
    counts
}

/// Security descriptors seen in a snapshot and the open networks among them.
#[derive(Debug, Clone, Default)]
pub struct SecuritySummary<'a> {
    /// (descriptor, count), most common first.
    pub counts: Vec<(String, usize)>,
    pub insecure: Vec<&'a NetworkRecord>,
}

/// True for descriptors that mean "no security".
///
/// `netsh` reports `Open`, `nmcli` leaves the field empty or writes `--`.
pub fn is_open_security(security: &str) -> bool {
    let s = security.trim();
    s.is_empty() || s == "--" || s.eq_ignore_ascii_case("open") || s.to_lowercase().contains("none")
}

/// Counts security descriptors and collects open networks.
pub fn summarize_security(records: &[NetworkRecord]) -> SecuritySummary<'_> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut insecure = Vec::new();

    for record in records {
        let Some(security) = record.security.as_deref() else {
            continue;
        };
        *counts.entry(security.to_string()).or_insert(0) += 1;
        if is_open_security(security) {
            insecure.push(record);
        }
    }

    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    SecuritySummary { counts, insecure }
}

/// Distinct BSSIDs in first-seen order.
pub fn unique_bssids(records: &[NetworkRecord]) -> Vec<&str> {
    let mut seen = Vec::new();
    for bssid in records.iter().filter_map(|r| r.bssid.as_deref()) {
        if !seen.contains(&bssid) {
            seen.push(bssid);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ssid: &str, channel: Option<&str>, security: Option<&str>) -> NetworkRecord {
        NetworkRecord {
            ssid: ssid.to_string(),
            signal: Some(50),
            channel: channel.map(str::to_string),
            bssid: None,
            security: security.map(str::to_string),
        }
    }

    #[test]
    fn test_frequency_band_boundaries() {
        assert_eq!(determine_frequency_band(6), FrequencyBand::Band2_4GHz);
        assert_eq!(determine_frequency_band(40), FrequencyBand::Band5GHz);
        assert_eq!(determine_frequency_band(14), FrequencyBand::Band2_4GHz);
        assert_eq!(determine_frequency_band(15), FrequencyBand::Band5GHz);
        assert_eq!(FrequencyBand::Band2_4GHz.to_string(), "2.4GHz");
        assert_eq!(FrequencyBand::Band5GHz.to_string(), "5GHz");
    }

    #[test]
    fn test_record_without_channel_has_no_band() {
        assert_eq!(record_band(&record("a", None, None)), None);
        assert_eq!(record_band(&record("a", Some("x"), None)), None);
        assert_eq!(
            record_band(&record("a", Some(" 11 "), None)),
            Some(FrequencyBand::Band2_4GHz)
        );
    }

    #[test]
    fn test_channel_distribution_skips_unset() {
        let records = vec![
            record("a", Some("6"), None),
            record("b", Some("6"), None),
            record("c", Some("11"), None),
            record("d", None, None),
        ];
        let dist = channel_distribution(&records);
        assert_eq!(dist.get(&6), Some(&2));
        assert_eq!(dist.get(&11), Some(&1));
        assert_eq!(dist.values().sum::<usize>(), 3);

        let bands = band_distribution(&records);
        assert_eq!(bands.get(&FrequencyBand::Band2_4GHz), Some(&3));
        assert_eq!(bands.get(&FrequencyBand::Band5GHz), None);
    }

    #[test]
    fn test_security_summary() {
        let records = vec![
            record("a", None, Some("WPA2")),
            record("b", None, Some("WPA2")),
            record("c", None, Some("None")),
            record("d", None, Some("Open")),
            record("e", None, None),
        ];
        let summary = summarize_security(&records);
        assert_eq!(summary.counts[0], ("WPA2".to_string(), 2));
        assert_eq!(summary.counts.len(), 3);
        let open: Vec<&str> = summary.insecure.iter().map(|r| r.ssid.as_str()).collect();
        assert_eq!(open, vec!["c", "d"]);
    }

    #[test]
    fn test_open_security_vocabulary() {
        assert!(is_open_security(""));
        assert!(is_open_security("--"));
        assert!(is_open_security("none"));
        assert!(!is_open_security("WPA2-Personal"));
    }

    #[test]
    fn test_unique_bssids_preserves_order() {
        let mut a = record("a", None, None);
        a.bssid = Some("aa:aa:aa:aa:aa:aa".into());
        let mut b = record("b", None, None);
        b.bssid = Some("bb:bb:bb:bb:bb:bb".into());
        let records = vec![a.clone(), b, a];
        assert_eq!(
            unique_bssids(&records),
            vec!["aa:aa:aa:aa:aa:aa", "bb:bb:bb:bb:bb:bb"]
        );
    }
}
