//! Persistent settings, read from `$XDG_CONFIG_HOME/wscan/config.toml`.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use wscan::{MatchOptions, Palette, SortKey};

/// Everything the front end remembers between runs.
///
/// Missing keys take their default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Group radios of one multi-radio access point.
    pub smart: bool,
    /// Merge hidden networks with their named sightings.
    pub hidden: bool,
    /// Seconds between scans in `watch` mode.
    pub interval_secs: u64,
    /// Record ordering.
    pub sort: SortKey,
    /// Vendor database to use instead of the system ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oui_path: Option<PathBuf>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            smart: false,
            hidden: true,
            interval_secs: 5,
            sort: SortKey::Level,
            oui_path: None,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Default location of the settings file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("wscan");
            path.push("config.toml");
            path
        })
    }

    /// Reads settings from `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let settings = toml::from_str(&text)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reads settings from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Writes the settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            hidden: self.hidden,
            smart: self.smart,
        }
    }
}
