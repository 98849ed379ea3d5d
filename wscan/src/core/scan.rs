//! Wi-Fi scanning over NetworkManager.
//!
//! Provides functions to trigger scans on every wireless device and to read
//! the visible access points back as raw observations.

use log::{debug, info, warn};
use std::collections::HashMap;
use zbus::Connection;
use zvariant::OwnedObjectPath;

use crate::api::models::{ScanError, ScanObservation};
use crate::dbus::{NMAccessPointProxy, NMProxy, NMWirelessProxy};
use crate::try_log;
use crate::types::flags::capabilities_from_flags;
use crate::util::utils::{
    access_point_paths, dbm_from_strength, decode_ssid_or_empty, frequency_from_u32,
    wifi_device_paths,
};
use crate::Result;

/// Triggers a Wi-Fi scan on all wireless devices.
///
/// Fails with [`ScanError::WifiDisabled`] when the radio is off and with
/// [`ScanError::NoWifiDevice`] when there is nothing to scan with. A device
/// refusing the request (NetworkManager rate-limits scans) is only logged;
/// its cached access point list is still usable.
pub(crate) async fn scan_networks(conn: &Connection) -> Result<()> {
    let nm = NMProxy::new(conn).await?;
    if !nm.wireless_enabled().await? {
        return Err(ScanError::WifiDisabled);
    }

    let devices = wifi_device_paths(conn).await?;
    if devices.is_empty() {
        return Err(ScanError::NoWifiDevice);
    }

    for dp in devices {
        let wifi = NMWirelessProxy::builder(conn)
            .path(dp.clone())?
            .build()
            .await?;

        let opts = HashMap::new();
        if let Err(e) = wifi.request_scan(opts).await {
            warn!("Scan request on {} was refused: {e}", dp.as_str());
        }
    }

    Ok(())
}

/// Reads every visible access point as an observation.
///
/// Access points that disappear while being read are skipped.
pub(crate) async fn list_observations(conn: &Connection) -> Result<Vec<ScanObservation>> {
    let mut observations = Vec::new();

    for path in access_point_paths(conn).await? {
        match read_access_point(conn, path.clone()).await {
            Ok(obs) => {
                debug!(
                    "{} {:?} {} dBm {} MHz {}",
                    obs.bssid, obs.essid, obs.level, obs.frequency, obs.capabilities
                );
                observations.push(obs);
            }
            Err(e) => warn!("Skipping access point {}: {e}", path.as_str()),
        }
    }

    info!("Read {} access points", observations.len());
    Ok(observations)
}

async fn read_access_point(conn: &Connection, path: OwnedObjectPath) -> Result<ScanObservation> {
    let ap = NMAccessPointProxy::builder(conn).path(path)?.build().await?;

    let ssid_bytes = ap.ssid().await?;
    let bssid = ap.hw_address().await?;
    let strength = ap.strength().await?;
    let frequency = ap.frequency().await?;
    let flags = ap.flags().await?;
    let wpa = ap.wpa_flags().await?;
    let rsn = ap.rsn_flags().await?;
    let mode = ap.mode().await?;

    Ok(ScanObservation {
        bssid,
        essid: decode_ssid_or_empty(&ssid_bytes).into_owned(),
        level: dbm_from_strength(strength),
        frequency: frequency_from_u32(frequency),
        capabilities: capabilities_from_flags(flags, wpa, rsn, mode),
    })
}

/// Returns the BSSID of the access point the machine is associated with.
///
/// Returns `None` if not connected or if anything along the way fails;
/// errors are logged rather than propagated since this only decorates
/// the output.
pub(crate) async fn connected_bssid(conn: &Connection) -> Option<String> {
    let devices = try_log!(wifi_device_paths(conn).await, "Failed to list Wi-Fi devices");

    for dp in devices {
        let wifi_builder = try_log!(
            NMWirelessProxy::builder(conn).path(dp),
            "Failed to create wireless proxy builder"
        );
        let wifi = try_log!(wifi_builder.build().await, "Failed to build wireless proxy");

        if let Ok(active_ap) = wifi.active_access_point().await {
            if active_ap.as_str() != "/" {
                let ap_builder = try_log!(
                    NMAccessPointProxy::builder(conn).path(active_ap),
                    "Failed to create access point proxy builder"
                );
                let ap = try_log!(
                    ap_builder.build().await,
                    "Failed to build access point proxy"
                );
                let bssid = try_log!(ap.hw_address().await, "Failed to get BSSID");
                return Some(bssid);
            }
        }
    }
    None
}
