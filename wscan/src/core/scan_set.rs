//! Record collection that survives repeated scans.

use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::api::models::{AccessPoint, ScanObservation};
use crate::core::classifier::Classifier;

/// How sightings are matched to existing records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Let a nameless record absorb sightings of the same BSSID with a name.
    pub hidden: bool,
    /// Group radios that share the first three BSSID octets and the name.
    pub smart: bool,
}

/// What a [`ScanSet::merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// New records appended.
    pub added: usize,
    /// Existing records refreshed in place.
    pub updated: usize,
    /// Records that were present before and were not seen this time.
    pub lost: usize,
}

/// Record ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Strongest signal first.
    #[default]
    Level,
    /// Lowest channel first, strongest first within a channel.
    Channel,
    /// Network name, case-insensitive.
    Essid,
    /// Hardware address.
    Bssid,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "level" => Ok(Self::Level),
            "channel" => Ok(Self::Channel),
            "essid" => Ok(Self::Essid),
            "bssid" => Ok(Self::Bssid),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level => write!(f, "level"),
            Self::Channel => write!(f, "channel"),
            Self::Essid => write!(f, "essid"),
            Self::Bssid => write!(f, "bssid"),
        }
    }
}

/// The access points seen so far, updated in place on every scan.
///
/// Records are never replaced once created, so anything a caller keys on
/// a record's position or identity stays valid across merges (until
/// [`ScanSet::prune`] or a re-sort).
///
/// # Example
///
/// ```
/// use wscan::{Classifier, MatchOptions, ScanObservation, ScanSet};
///
/// let classifier = Classifier::default();
/// let mut set = ScanSet::new(MatchOptions::default());
///
/// let first = [ScanObservation::new("AA:BB:CC:11:22:33", "home", -70, 2437, "")];
/// let second = [ScanObservation::new("AA:BB:CC:11:22:33", "home", -50, 2437, "")];
///
/// set.merge(&first, &classifier);
/// let summary = set.merge(&second, &classifier);
///
/// assert_eq!(summary.updated, 1);
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.records()[0].level(), -50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScanSet {
    records: Vec<AccessPoint>,
    options: MatchOptions,
}

impl ScanSet {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            records: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
    }

    pub fn records(&self) -> &[AccessPoint] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessPoint> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the record a sighting belongs to, if any.
    pub fn position(&self, bssid: &str, essid: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|ap| ap.matches(bssid, essid, self.options.hidden))
    }

    /// Merges one scan's observations.
    ///
    /// Each observation refreshes the record it matches (exact identity,
    /// with the hidden-network tolerance when enabled) or becomes a new
    /// record at the end. Records not matched by any observation are kept
    /// but marked as not present.
    pub fn merge(&mut self, observations: &[ScanObservation], classifier: &Classifier) -> MergeSummary {
        let mut summary = MergeSummary::default();
        let mut seen = vec![false; self.records.len()];

        for obs in observations {
            match self.position(&obs.bssid, &obs.essid) {
                Some(index) => {
                    classifier.refresh(&mut self.records[index], obs);
                    if let Some(flag) = seen.get_mut(index) {
                        if !*flag {
                            summary.updated += 1;
                        }
                        *flag = true;
                    }
                }
                None => {
                    self.records.push(classifier.record(obs));
                    summary.added += 1;
                }
            }
        }

        for (ap, seen) in self.records.iter_mut().zip(seen) {
            if !seen {
                if ap.is_present() {
                    summary.lost += 1;
                }
                ap.mark_absent();
            }
        }

        debug!(
            "Merged {} observations: {} added, {} updated, {} lost",
            observations.len(),
            summary.added,
            summary.updated,
            summary.lost
        );
        summary
    }

    /// Drops records that were not seen in the last merge.
    pub fn prune(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(AccessPoint::is_present);
        before - self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Reorders records. The sort is stable.
    pub fn sort_by(&mut self, key: SortKey) {
        self.records.sort_by(|a, b| compare(a, b, key));
    }

    /// Clusters records that belong to one physical device.
    ///
    /// Uses [`AccessPoint::same_device`] with the set's `smart` option
    /// against the first record of each group. Groups keep record order.
    pub fn groups(&self) -> Vec<Vec<&AccessPoint>> {
        let mut groups: Vec<Vec<&AccessPoint>> = Vec::new();
        for ap in &self.records {
            match groups
                .iter_mut()
                .find(|group| group[0].same_device(ap, self.options.smart))
            {
                Some(group) => group.push(ap),
                None => groups.push(vec![ap]),
            }
        }
        groups
    }
}

fn compare(a: &AccessPoint, b: &AccessPoint, key: SortKey) -> Ordering {
    match key {
        SortKey::Level => b.level().cmp(&a.level()),
        SortKey::Channel => a
            .channel()
            .cmp(&b.channel())
            .then_with(|| b.level().cmp(&a.level())),
        SortKey::Essid => a
            .essid()
            .to_lowercase()
            .cmp(&b.essid().to_lowercase()),
        SortKey::Bssid => a.bssid().cmp(b.bssid()),
    }
}
