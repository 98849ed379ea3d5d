//! Core classification and scanning logic.
//!
//! The classifier half (channel, capabilities, power, classifier, scan set)
//! is pure and synchronous. The scanning half talks to NetworkManager or
//! reads recorded scans.

pub mod capabilities;
pub mod channel;
pub(crate) mod classifier;
pub(crate) mod oui;
pub mod power;
pub(crate) mod replay;
pub(crate) mod scan;
pub(crate) mod scan_set;
