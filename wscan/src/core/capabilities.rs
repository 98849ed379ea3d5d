//! Capability descriptor classification.
//!
//! A descriptor is a free-form vendor string such as
//! `[WPA2-PSK-CCMP][WPS][ESS]`. Every check here is a plain substring test,
//! so unknown or malformed descriptors fall through to the open/none
//! defaults instead of failing.

use crate::api::models::Encryption;
use crate::types::constants::tokens;

/// Classifies the encryption scheme.
///
/// WPA takes precedence over WEP; among WPA descriptors the presence of
/// `WPA2` selects WPA2.
pub(crate) fn encryption(capabilities: &str) -> Encryption {
    if capabilities.contains(tokens::WPA) {
        if capabilities.contains(tokens::WPA2) {
            Encryption::Wpa2
        } else {
            Encryption::Wpa
        }
    } else if capabilities.contains(tokens::WEP) {
        Encryption::Wep
    } else {
        Encryption::Open
    }
}

/// Returns the encryption label (`OPN`, `WEP`, `WPA`, `WPA2`).
pub fn encryption_label(capabilities: &str) -> &'static str {
    encryption(capabilities).label()
}

/// Builds the cipher label.
///
/// `CCMP` when present. TKIP is appended as `+TKIP` after CCMP; on its own
/// it is rendered as `"  TKIP"` with two leading spaces, which existing
/// consumers align on.
pub fn cipher_label(capabilities: &str) -> &'static str {
    let ccmp = capabilities.contains(tokens::CCMP);
    match (ccmp, has_tkip(capabilities)) {
        (true, true) => "CCMP+TKIP",
        (true, false) => "CCMP",
        (false, true) => "  TKIP",
        (false, false) => "",
    }
}

/// Whether the access point advertises Wi-Fi Protected Setup.
pub fn wps_supported(capabilities: &str) -> bool {
    capabilities.contains(tokens::WPS)
}

/// Whether the access point uses enterprise (802.1X) authentication.
pub fn has_eap(capabilities: &str) -> bool {
    capabilities.contains(tokens::EAP)
}

pub(crate) fn has_tkip(capabilities: &str) -> bool {
    capabilities.contains(tokens::TKIP)
}

pub(crate) fn has_preauth(capabilities: &str) -> bool {
    capabilities.contains(tokens::PREAUTH)
}
