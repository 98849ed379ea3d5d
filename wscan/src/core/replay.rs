//! Recorded scans read back from TOML files.
//!
//! ```toml
//! [[observation]]
//! bssid = "AA:BB:CC:11:22:33"
//! essid = "home"
//! level = -48
//! frequency = 2437
//! capabilities = "[WPA2-PSK-CCMP][WPS][ESS]"
//! ```

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::models::ScanObservation;
use crate::api::source::ScanSource;
use crate::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ReplayFile {
    #[serde(default)]
    observation: Vec<ScanObservation>,
}

/// Parses recorded observations from TOML text.
pub fn parse_replay(text: &str) -> Result<Vec<ScanObservation>> {
    let file: ReplayFile = toml::from_str(text)?;
    Ok(file.observation)
}

/// Serializes observations into the replay format.
pub fn to_replay(observations: &[ScanObservation]) -> Result<String> {
    let file = ReplayFile {
        observation: observations.to_vec(),
    };
    Ok(toml::to_string(&file)?)
}

/// A [`ScanSource`] that returns the contents of a replay file.
///
/// The file is re-read on every scan, so it can be edited while a watch
/// loop is running.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    path: PathBuf,
}

impl ReplaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ScanSource for ReplaySource {
    async fn scan(&self) -> Result<Vec<ScanObservation>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let observations = parse_replay(&text)?;
        debug!(
            "Replayed {} observations from {}",
            observations.len(),
            self.path.display()
        );
        Ok(observations)
    }
}
