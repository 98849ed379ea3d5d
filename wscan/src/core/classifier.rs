//! Turns raw observations into access point records.

use crate::api::models::{AccessPoint, ScanObservation};
use crate::api::palette::Palette;
use crate::core::oui::OuiDatabase;

/// Everything needed to classify an observation: colors and vendor names.
///
/// Built once at startup and passed by reference to whatever creates or
/// refreshes records.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    palette: Palette,
    vendors: OuiDatabase,
}

impl Classifier {
    pub fn new(palette: Palette, vendors: OuiDatabase) -> Self {
        Self { palette, vendors }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn vendors(&self) -> &OuiDatabase {
        &self.vendors
    }

    /// Classifies one observation, including its manufacturer.
    pub fn record(&self, obs: &ScanObservation) -> AccessPoint {
        let manufacturer = self.vendors.lookup(&obs.bssid).unwrap_or_default();
        AccessPoint::new(obs, &self.palette).with_manufacturer(manufacturer)
    }

    /// Applies a fresh sighting to an existing record in place.
    pub fn refresh(&self, ap: &mut AccessPoint, obs: &ScanObservation) {
        ap.update(obs, &self.palette);
    }

    /// See [`build_records`].
    pub fn build_records(&self, observations: &[ScanObservation]) -> Vec<AccessPoint> {
        build_records(observations, self)
    }
}

/// Classifies a batch of observations.
///
/// One record per observation, in input order. Nothing is deduplicated;
/// merging against earlier scans is done by [`crate::ScanSet`].
pub fn build_records(observations: &[ScanObservation], classifier: &Classifier) -> Vec<AccessPoint> {
    observations.iter().map(|obs| classifier.record(obs)).collect()
}
