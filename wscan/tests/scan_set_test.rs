//! Tests for merging repeated scans into one record set.

use wscan::{Classifier, MatchOptions, ScanObservation, ScanSet, SortKey, parse_replay};

const FIRST_SCAN: &str = r#"
[[observation]]
bssid = "AA:BB:CC:11:22:33"
essid = "home"
level = -70
frequency = 2437
capabilities = "[WPA2-PSK-CCMP][WPS][ESS]"

[[observation]]
bssid = "AA:BB:CC:44:55:66"
essid = "home"
level = -75
frequency = 5180
capabilities = "[WPA2-PSK-CCMP][ESS]"

[[observation]]
bssid = "10:20:30:40:50:60"
essid = ""
level = -85
frequency = 2462
capabilities = "[WPA-PSK-TKIP][ESS]"
"#;

const SECOND_SCAN: &str = r#"
[[observation]]
bssid = "AA:BB:CC:11:22:33"
essid = "home"
level = -52
frequency = 2412
capabilities = "[WPA2-PSK-CCMP][ESS]"

[[observation]]
bssid = "10:20:30:40:50:60"
essid = "attic"
level = -80
frequency = 2462
capabilities = "[WPA-PSK-TKIP][ESS]"
"#;

fn scans() -> (Vec<ScanObservation>, Vec<ScanObservation>) {
    (
        parse_replay(FIRST_SCAN).unwrap(),
        parse_replay(SECOND_SCAN).unwrap(),
    )
}

#[test]
fn test_records_updated_in_place_across_scans() {
    let classifier = Classifier::default();
    let (first, second) = scans();
    let mut set = ScanSet::new(MatchOptions {
        hidden: true,
        smart: false,
    });

    let summary = set.merge(&first, &classifier);
    assert_eq!(summary.added, 3);

    let summary = set.merge(&second, &classifier);
    assert_eq!(summary.added, 0);
    assert_eq!(summary.updated, 2);
    assert_eq!(summary.lost, 1);
    assert_eq!(set.len(), 3);

    let home = &set.records()[0];
    assert_eq!(home.level(), -52);
    assert_eq!(home.channel(), 1);
    assert!(!home.wps());

    let attic = &set.records()[2];
    assert_eq!(attic.essid(), "attic");
    assert_eq!(attic.cipher(), "  TKIP");
    assert!(!set.records()[1].is_present());
}

#[test]
fn test_hidden_network_without_tolerance_is_new_record() {
    let classifier = Classifier::default();
    let (first, second) = scans();
    let mut set = ScanSet::new(MatchOptions::default());

    set.merge(&first, &classifier);
    let summary = set.merge(&second, &classifier);

    assert_eq!(summary.added, 1);
    assert_eq!(set.len(), 4);
    assert_eq!(set.records()[2].essid(), "");
    assert_eq!(set.records()[3].essid(), "attic");
}

#[test]
fn test_smart_grouping_of_multi_radio_access_point() {
    let classifier = Classifier::default();
    let (first, _) = scans();
    let mut set = ScanSet::new(MatchOptions {
        hidden: false,
        smart: true,
    });
    set.merge(&first, &classifier);

    let groups = set.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].len(), 2);
    assert!(groups[0].iter().all(|ap| ap.essid() == "home"));
}

#[test]
fn test_sort_then_prune() {
    let classifier = Classifier::default();
    let (first, second) = scans();
    let mut set = ScanSet::new(MatchOptions {
        hidden: true,
        smart: false,
    });
    set.merge(&first, &classifier);
    set.merge(&second, &classifier);

    set.sort_by(SortKey::Level);
    let levels: Vec<i32> = set.iter().map(|ap| ap.level()).collect();
    assert_eq!(levels, [-52, -75, -80]);

    assert_eq!(set.prune(), 1);
    assert!(set.iter().all(|ap| ap.is_present()));
}
