//! D-Bus proxy interfaces for NetworkManager.
//!
//! This module contains the low-level proxies the scanner needs to enumerate
//! Wi-Fi devices and read their access points over the system bus.

mod access_point;
mod device;
mod main_nm;
mod wireless;

pub(crate) use access_point::NMAccessPointProxy;
pub(crate) use device::NMDeviceProxy;
pub(crate) use main_nm::NMProxy;
pub(crate) use wireless::NMWirelessProxy;
