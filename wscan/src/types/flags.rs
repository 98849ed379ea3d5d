//! NetworkManager access point flag words.
//!
//! NetworkManager does not expose the vendor capability descriptor that
//! mobile radio stacks report. It exposes three flag words instead; this
//! module models them and synthesizes the bracketed descriptor from them.

use bitflags::bitflags;

use crate::types::constants::wifi_mode;

bitflags! {
    /// `NM80211ApFlags`: general capabilities of an access point.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApFlags: u32 {
        const PRIVACY = 0x1;
        const WPS = 0x2;
        const WPS_PBC = 0x4;
        const WPS_PIN = 0x8;
    }
}

bitflags! {
    /// `NM80211ApSecurityFlags`: WPA or RSN security capabilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ApSecurityFlags: u32 {
        const PAIR_WEP40 = 0x1;
        const PAIR_WEP104 = 0x2;
        const PAIR_TKIP = 0x4;
        const PAIR_CCMP = 0x8;
        const GROUP_WEP40 = 0x10;
        const GROUP_WEP104 = 0x20;
        const GROUP_TKIP = 0x40;
        const GROUP_CCMP = 0x80;
        const KEY_MGMT_PSK = 0x100;
        const KEY_MGMT_802_1X = 0x200;
        const KEY_MGMT_SAE = 0x400;
        const KEY_MGMT_OWE = 0x800;
        const KEY_MGMT_OWE_TM = 0x1000;
        const KEY_MGMT_EAP_SUITE_B_192 = 0x2000;
    }
}

impl ApSecurityFlags {
    fn key_management(self) -> String {
        let mut parts = Vec::new();
        if self.contains(Self::KEY_MGMT_PSK) {
            parts.push("PSK");
        }
        if self.intersects(Self::KEY_MGMT_802_1X | Self::KEY_MGMT_EAP_SUITE_B_192) {
            parts.push("EAP");
        }
        if self.contains(Self::KEY_MGMT_SAE) {
            parts.push("SAE");
        }
        if self.intersects(Self::KEY_MGMT_OWE | Self::KEY_MGMT_OWE_TM) {
            parts.push("OWE");
        }
        if parts.is_empty() {
            return "?".to_string();
        }
        parts.join("+")
    }

    fn pairwise_ciphers(self) -> Option<String> {
        let mut parts = Vec::new();
        if self.contains(Self::PAIR_CCMP) {
            parts.push("CCMP");
        }
        if self.contains(Self::PAIR_TKIP) {
            parts.push("TKIP");
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("+"))
        }
    }

    fn descriptor(self, protocol: &str) -> String {
        match self.pairwise_ciphers() {
            Some(ciphers) => format!("[{protocol}-{}-{ciphers}]", self.key_management()),
            None => format!("[{protocol}-{}]", self.key_management()),
        }
    }
}

/// Builds a capability descriptor such as `[WPA2-PSK-CCMP][WPS][ESS]`
/// from raw NetworkManager flag words.
///
/// Unknown bits are ignored.
pub fn capabilities_from_flags(flags: u32, wpa: u32, rsn: u32, mode: u32) -> String {
    let flags = ApFlags::from_bits_truncate(flags);
    let wpa = ApSecurityFlags::from_bits_truncate(wpa);
    let rsn = ApSecurityFlags::from_bits_truncate(rsn);

    let mut caps = String::new();
    if !wpa.is_empty() {
        caps.push_str(&wpa.descriptor("WPA"));
    }
    if !rsn.is_empty() {
        caps.push_str(&rsn.descriptor("WPA2"));
    }
    if wpa.is_empty() && rsn.is_empty() && flags.contains(ApFlags::PRIVACY) {
        caps.push_str("[WEP]");
    }
    if flags.intersects(ApFlags::WPS | ApFlags::WPS_PBC | ApFlags::WPS_PIN) {
        caps.push_str("[WPS]");
    }
    caps.push_str(if mode == wifi_mode::ADHOC {
        "[IBSS]"
    } else {
        "[ESS]"
    });
    caps
}
