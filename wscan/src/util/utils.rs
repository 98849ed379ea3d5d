//! Utility functions for turning NetworkManager data into scan data.
//!
//! Provides helpers for SSID decoding, strength to dBm conversion and
//! enumerating Wi-Fi devices and their access points.

use log::{debug, warn};
use std::borrow::Cow;
use std::str;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::dbus::{NMDeviceProxy, NMProxy, NMWirelessProxy};
use crate::types::constants::device_type;
use crate::types::constants::signal::{NM_QUALITY_FLOOR, NM_QUALITY_SPAN};
use crate::Result;

/// Decode SSID bytes, defaulting to an empty (hidden) name if invalid.
pub(crate) fn decode_ssid_or_empty(bytes: &[u8]) -> Cow<'static, str> {
    if bytes.is_empty() {
        return Cow::Borrowed("");
    }

    match str::from_utf8(bytes) {
        Ok(s) => Cow::Owned(s.to_owned()),
        Err(e) => {
            warn!("Invalid UTF-8 in SSID: {e}");
            Cow::Borrowed("")
        }
    }
}

/// Converts NetworkManager's strength percentage back to dBm.
///
/// NetworkManager maps -100..-40 dBm linearly onto 0..100 %, so the
/// inverse is exact up to rounding.
pub(crate) fn dbm_from_strength(strength: u8) -> i32 {
    let strength = i32::from(strength.min(100));
    NM_QUALITY_FLOOR + strength * NM_QUALITY_SPAN / 100
}

/// Converts an unsigned D-Bus frequency to the classifier's signed form.
pub(crate) fn frequency_from_u32(mhz: u32) -> i32 {
    i32::try_from(mhz).unwrap_or(0)
}

/// Returns the object paths of every Wi-Fi device.
pub(crate) async fn wifi_device_paths(conn: &Connection) -> Result<Vec<OwnedObjectPath>> {
    let nm = NMProxy::new(conn).await?;
    let mut paths = Vec::new();

    for dp in nm.get_devices().await? {
        let d_proxy = NMDeviceProxy::builder(conn)
            .path(dp.clone())?
            .build()
            .await?;

        if d_proxy.device_type().await? == device_type::WIFI {
            let iface = d_proxy.interface().await.unwrap_or_default();
            debug!("Found Wi-Fi device {iface} at {}", dp.as_str());
            paths.push(dp);
        }
    }

    Ok(paths)
}

/// Returns the object paths of every access point visible to any Wi-Fi device.
pub(crate) async fn access_point_paths(conn: &Connection) -> Result<Vec<OwnedObjectPath>> {
    let mut paths = Vec::new();

    for dp in wifi_device_paths(conn).await? {
        let wifi = NMWirelessProxy::builder(conn).path(dp)?.build().await?;
        paths.extend(wifi.access_points().await?);
    }

    Ok(paths)
}

/// Macro to convert Result to Option with error logging.
/// Usage: `try_log!(result, "context message")`
#[macro_export]
macro_rules! try_log {
    ($result:expr, $context:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => {
                log::warn!("{}: {:?}", $context, e);
                return None;
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ssid_or_empty() {
        assert_eq!(decode_ssid_or_empty(b"MyNetwork"), "MyNetwork");
        assert_eq!(decode_ssid_or_empty(b""), "");
        assert_eq!(decode_ssid_or_empty("café".as_bytes()), "café");
        assert_eq!(decode_ssid_or_empty(&[0xff, 0xfe]), "");
    }

    #[test]
    fn test_dbm_from_strength() {
        assert_eq!(dbm_from_strength(0), -100);
        assert_eq!(dbm_from_strength(50), -70);
        assert_eq!(dbm_from_strength(100), -40);
        assert_eq!(dbm_from_strength(255), -40);
    }

    #[test]
    fn test_frequency_from_u32() {
        assert_eq!(frequency_from_u32(2437), 2437);
        assert_eq!(frequency_from_u32(u32::MAX), 0);
    }
}
