//! Integration tests for the scan parser.
//!
//! These tests feed realistic `nmcli` and `netsh` captures through
//! `pulsepilot::parse` and check the normalized records.

use pulsepilot::{parse, NetworkRecord, Platform, ScanError};

/// `nmcli -t -f SSID,SIGNAL,CHAN,BSSID,SECURITY device wifi list` output.
const NMCLI_CAPTURE: &str = "\
HomeNet:82:6:A4\\:2B\\:B0\\:10\\:20\\:30:WPA2
HomeNet:64:36:A4\\:2B\\:B0\\:10\\:20\\:31:WPA2
CoffeeShop:41:11:00\\:1A\\:2B\\:3C\\:4D\\:5E:
:20:1:DE\\:AD\\:BE\\:EF\\:00\\:01:WPA1 WPA2
";

/// `netsh wlan show network mode=Bssid` output.
const NETSH_CAPTURE: &str = "
Interface name : Wi-Fi
There are 2 networks currently visible.

SSID 1 : Foo
    Network type            : Infrastructure
    Authentication          : WPA2-Personal
    Encryption              : CCMP
    BSSID 1                 : 14:cc:20:aa:bb:cc
         Signal             : 90%
         Radio type         : 802.11n
         Channel            : 6
         Basic rates (Mbps) : 1 2 5.5 11

SSID 2 : Foo
    Network type            : Infrastructure
    Authentication          : Open
    Encryption              : None
    BSSID 1                 : 14:cc:20:aa:bb:cd
         Signal             : 35%
         Radio type         : 802.11ac
         Channel            : 149
";

#[test]
fn test_nmcli_capture() {
    let records = parse(NMCLI_CAPTURE, Platform::Linux).unwrap();
    assert_eq!(records.len(), 4);

    // Duplicate SSIDs are kept; each BSSID is its own radio
    assert_eq!(records[0].ssid, "HomeNet");
    assert_eq!(records[1].ssid, "HomeNet");
    assert_ne!(records[0].bssid, records[1].bssid);

    assert_eq!(records[2].security.as_deref(), Some(""));
    assert_eq!(records[3].ssid, "");
    assert!(records.iter().all(NetworkRecord::is_complete));
}

#[test]
fn test_signal_equals_second_field() {
    for (line, expected) in [("a:0:1:b:c", 0), ("a:57:1:b:c", 57), ("a:100:1:b:c:extra", 100)] {
        let records = parse(line, Platform::Linux).unwrap();
        assert_eq!(records.len(), 1, "line {line}");
        assert_eq!(records[0].signal, Some(expected), "line {line}");
    }
}

#[test]
fn test_short_linux_line_dropped() {
    assert!(parse("a:b:c", Platform::Linux).unwrap().is_empty());
}

#[test]
fn test_empty_output_is_empty_snapshot() {
    assert!(parse("", Platform::Linux).unwrap().is_empty());
    assert!(parse("", Platform::Windows).unwrap().is_empty());
}

#[test]
fn test_malformed_signal_fails_extraction() {
    let err = parse("ok:50:1:b:c\nbad:xx:1:b:c\n", Platform::Linux).unwrap_err();
    assert!(matches!(err, ScanError::MalformedField { field: "signal", .. }));
}

#[test]
fn test_netsh_two_headers_two_records() {
    let records = parse(NETSH_CAPTURE, Platform::Windows).unwrap();
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(first.ssid, "Foo");
    assert_eq!(first.signal, Some(90));
    assert_eq!(first.channel.as_deref(), Some("6"));
    assert_eq!(first.bssid.as_deref(), Some("14:cc:20:aa:bb:cc"));
    assert_eq!(first.security.as_deref(), Some("WPA2-Personal"));

    let second = &records[1];
    assert_eq!(second.signal, Some(35));
    assert_eq!(second.channel.as_deref(), Some("149"));
    assert_eq!(second.security.as_deref(), Some("Open"));
}

#[test]
fn test_netsh_fields_do_not_leak_between_blocks() {
    let raw = "SSID 1 : Foo\n    Signal : 70%\n    Channel : 11\nSSID 2 : Foo\n    Authentication : Open\n";
    let records = parse(raw, Platform::Windows).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].signal, Some(70));
    assert_eq!(records[0].security, None);

    assert_eq!(records[1].signal, None);
    assert_eq!(records[1].channel, None);
    assert_eq!(records[1].security.as_deref(), Some("Open"));
    assert!(!records[1].is_complete());
}

#[test]
fn test_netsh_bssid_split_across_colons() {
    let raw = "SSID 1 : Foo\nBSSID : 1 : aa : bb : cc : dd : ee : ff\n";
    let records = parse(raw, Platform::Windows).unwrap();
    assert_eq!(records[0].bssid.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
}

#[test]
fn test_unsupported_platform_name() {
    assert!(matches!(
        Platform::from_os_name("Darwin"),
        Err(ScanError::UnsupportedPlatform(_))
    ));
}
