//! Constants for radio measurements and NetworkManager D-Bus values.
//!
//! These constants correspond to the numeric codes used by NetworkManager's
//! D-Bus API and to the thresholds the classifier applies to scan data.

/// NetworkManager device type constants.
pub mod device_type {
    pub const WIFI: u32 = 2;
}

/// WiFi mode constants
pub mod wifi_mode {
    pub const ADHOC: u32 = 1;
}

/// Timeout constants for scanning.
pub mod timeouts {
    use std::time::Duration;

    /// Time to wait after requesting a scan before reading results (2 seconds).
    ///
    /// NetworkManager rate-limits scan requests, so a short fixed delay is
    /// enough to pick up a fresh access point list in most cases.
    const SCAN_WAIT_SECS: u64 = 2;

    /// Returns the scan wait duration.
    pub fn scan_wait() -> Duration {
        Duration::from_secs(SCAN_WAIT_SECS)
    }
}

/// Signal level thresholds (dBm).
pub mod signal {
    /// Weakest level a radio reports; also the floor for hidden-network matching.
    pub const MIN_LEVEL: i32 = -100;
    /// Level at and above which a signal is considered full strength.
    pub const MAX_LEVEL: i32 = -55;
    /// Number of buckets used when mapping a level onto the power gradient.
    pub const POWER_LEVELS: i32 = 512;
    /// Midpoint of the power gradient, where red and green are both saturated.
    pub const POWER_MIDPOINT: i32 = POWER_LEVELS / 2;

    /// NetworkManager reports strength as a percentage computed linearly
    /// between these two levels.
    pub const NM_QUALITY_FLOOR: i32 = -100;
    pub const NM_QUALITY_SPAN: i32 = 60;
}

/// WiFi frequency constants (MHz)
pub mod frequency {
    pub const BAND_2_4_START: i32 = 2412;
    pub const BAND_2_4_CH14: i32 = 2484;
    pub const BAND_2_4_BASE: i32 = 2407;

    pub const BAND_3_6_START: i32 = 3658;
    pub const BAND_3_6_END: i32 = 3692;
    pub const BAND_3_6_BASE: i32 = 3655;
    pub const BAND_3_6_FIRST_CHANNEL: i32 = 131;

    pub const BAND_4_9_START: i32 = 4915;
    pub const BAND_4_9_END: i32 = 4980;
    pub const BAND_4_9_FIRST_CHANNEL: i32 = 183;

    pub const PUBLIC_SAFETY_START: i32 = 4940;
    pub const PUBLIC_SAFETY_END: i32 = 4990;
    pub const PUBLIC_SAFETY_FIRST_CHANNEL: i32 = 20;
    pub const PUBLIC_SAFETY_SPACING: i32 = 7;

    pub const BAND_5_START: i32 = 5035;
    pub const BAND_5_END: i32 = 5825;
    pub const BAND_5_FIRST_CHANNEL: i32 = 7;

    /// Frequencies at or above this are colored as 5 GHz.
    pub const HIGH_BAND_START: i32 = 4915;

    pub const CHANNEL_SPACING: i32 = 5;
}

/// Capability descriptor tokens.
pub mod tokens {
    pub const WPA: &str = "WPA";
    pub const WPA2: &str = "WPA2";
    pub const WEP: &str = "WEP";
    pub const EAP: &str = "EAP";
    pub const CCMP: &str = "CCMP";
    pub const TKIP: &str = "TKIP";
    pub const PREAUTH: &str = "preauth";
    pub const WPS: &str = "WPS";
}
