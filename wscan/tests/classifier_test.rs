//! Tests for the record classifier's public behavior.
//!
//! These exercise the crate the way a front end does: observations in,
//! records with labels and colors out, no D-Bus involved.

use wscan::{
    AccessPoint, Classifier, Encryption, OuiDatabase, Palette, ScanObservation, build_records,
    channel_number, encryption_label, power_color, wps_supported,
};

fn observation(bssid: &str, essid: &str) -> ScanObservation {
    ScanObservation::new(bssid, essid, -60, 2437, "[WPA2-PSK-CCMP][ESS]")
}

#[test]
fn test_channel_2_4ghz_formula() {
    for f in 2412..2484 {
        assert_eq!(i32::from(channel_number(f)), (f - 2407) / 5);
    }
    assert_eq!(channel_number(2484), 14);
}

#[test]
fn test_channel_outside_ranges_is_zero() {
    for f in [-5000, -1, 0, 1, 2400, 2411, 2485, 3657, 3693, 4914, 4991, 5034, 5826, 6000] {
        assert_eq!(channel_number(f), 0, "frequency {f}");
    }
}

#[test]
fn test_encryption_examples() {
    assert_eq!(encryption_label(""), "OPN");
    assert_eq!(encryption_label("[WPA2-PSK-CCMP]"), "WPA2");
    assert_eq!(encryption_label("[WPA-PSK-TKIP]"), "WPA");
    assert_eq!(encryption_label("[WEP]"), "WEP");
    assert_eq!(Encryption::from_capabilities("garbage]]["), Encryption::Open);
}

#[test]
fn test_wps_examples() {
    assert!(wps_supported("[WPS][ESS]"));
    assert!(!wps_supported("[ESS]"));
}

#[test]
fn test_exact_match_reflexive_and_symmetric() {
    let palette = Palette::default();
    let a = AccessPoint::new(&observation("AA:BB:CC:11:22:33", "home"), &palette);
    let b = AccessPoint::new(&observation("AA:BB:CC:11:22:33", "home"), &palette);

    assert!(a.matches(a.bssid(), a.essid(), false));
    assert!(a.matches(b.bssid(), b.essid(), false));
    assert!(b.matches(a.bssid(), a.essid(), false));
    assert_eq!(a, b);
}

#[test]
fn test_different_bssid_never_matches() {
    let palette = Palette::default();
    let a = AccessPoint::new(&observation("AA:BB:CC:11:22:33", "home"), &palette);
    let hidden = AccessPoint::new(&observation("AA:BB:CC:11:22:33", ""), &palette);

    for hidden_tolerance in [false, true] {
        assert!(!a.matches("AA:BB:CC:11:22:34", "home", hidden_tolerance));
        assert!(!hidden.matches("AA:BB:CC:11:22:34", "home", hidden_tolerance));
        assert!(!hidden.matches("AA:BB:CC:11:22:34", "", hidden_tolerance));
    }
    assert!(!a.same_device(
        &AccessPoint::new(&observation("AA:BB:CC:11:22:34", "home"), &palette),
        false
    ));
}

#[test]
fn test_smart_match_prefix() {
    let palette = Palette::default();
    let a = AccessPoint::new(&observation("AA:BB:CC:11:22:33", "home"), &palette);
    let b = AccessPoint::new(&observation("AA:BB:CC:44:55:66", "home"), &palette);
    let other_name = AccessPoint::new(&observation("AA:BB:CC:44:55:66", "guest"), &palette);

    assert!(a.same_device(&b, true));
    assert!(b.same_device(&a, true));
    assert!(!a.same_device(&b, false));
    assert!(!a.same_device(&other_name, true));
}

#[test]
fn test_power_color_green_monotonic() {
    for level in -120..0 {
        assert!(
            power_color(level).g <= power_color(level + 1).g,
            "green decreased between {level} and {}",
            level + 1
        );
    }
}

#[test]
fn test_record_keeps_observation_values() {
    let inputs = [
        ScanObservation::new("AA:BB:CC:11:22:33", "home", -48, 2437, "[WPA2-PSK-CCMP][WPS][ESS]"),
        ScanObservation::new("aa:bb:cc:44:55:66", "", -101, 0, ""),
        ScanObservation::new("00:11:22:33:44:55", "café ☕", 0, -20, "junk"),
    ];
    let records = build_records(&inputs, &Classifier::default());

    assert_eq!(records.len(), inputs.len());
    for (record, input) in records.iter().zip(&inputs) {
        assert_eq!(record.bssid(), input.bssid);
        assert_eq!(record.essid(), input.essid);
        assert_eq!(record.frequency(), input.frequency);
        assert_eq!(record.level(), input.level);
    }
}

#[test]
fn test_total_on_malformed_input() {
    let ap = AccessPoint::new(
        &ScanObservation::new("", "", i32::MIN, i32::MIN, "[[[[]"),
        &Palette::default(),
    );
    assert_eq!(ap.channel(), 0);
    assert_eq!(ap.encryption(), Encryption::Open);
    assert_eq!(ap.cipher(), "");
    assert!(!ap.wps());
    assert_eq!(ap.display_name(), "");
}

#[test]
fn test_classifier_with_vendor_database() {
    let vendors = OuiDatabase::parse("AA-BB-CC   (hex)\t\tAcme Radio Ltd.\n").unwrap();
    let classifier = Classifier::new(Palette::default(), vendors);
    let records = classifier.build_records(&[
        observation("AA:BB:CC:11:22:33", "home"),
        observation("DD:EE:FF:11:22:33", "home"),
    ]);

    assert_eq!(records[0].manufacturer(), "Acme Radio Ltd.");
    assert_eq!(records[1].manufacturer(), "");
    assert_eq!(records[0].colors().manufacturer, classifier.palette().grey);
}
