use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::api::palette::{Palette, Rgb};
use crate::core::capabilities::{cipher_label, has_eap, has_preauth, has_tkip, wps_supported};
use crate::core::channel::{channel_number, is_5ghz};
use crate::core::power::power_color;
use crate::types::constants::signal::MIN_LEVEL;

/// One raw access point sighting as reported by a radio scan.
///
/// This is plain input data: no field is derived or validated. The
/// classifier turns it into an [`AccessPoint`].
///
/// # Examples
///
/// ```
/// use wscan::ScanObservation;
///
/// let obs = ScanObservation::new("AA:BB:CC:11:22:33", "home", -48, 2437, "[WPA2-PSK-CCMP][ESS]");
/// assert_eq!(obs.frequency, 2437);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanObservation {
    /// Hardware address, colon-separated hex (e.g. `AA:BB:CC:11:22:33`)
    pub bssid: String,
    /// Network name, empty for hidden networks
    #[serde(default)]
    pub essid: String,
    /// Received signal level in dBm
    pub level: i32,
    /// Center frequency in MHz
    pub frequency: i32,
    /// Vendor capability descriptor (e.g. `[WPA2-PSK-CCMP][WPS][ESS]`)
    #[serde(default)]
    pub capabilities: String,
}

impl ScanObservation {
    pub fn new(
        bssid: impl Into<String>,
        essid: impl Into<String>,
        level: i32,
        frequency: i32,
        capabilities: impl Into<String>,
    ) -> Self {
        Self {
            bssid: bssid.into(),
            essid: essid.into(),
            level,
            frequency,
            capabilities: capabilities.into(),
        }
    }
}

/// Encryption scheme advertised by an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encryption {
    /// No encryption.
    Open,
    /// Legacy WEP.
    Wep,
    /// WPA (TKIP era).
    Wpa,
    /// WPA2 / RSN.
    Wpa2,
}

impl Encryption {
    /// Classifies a capability descriptor.
    ///
    /// Anything that mentions neither WPA nor WEP is treated as open.
    pub fn from_capabilities(capabilities: &str) -> Self {
        crate::core::capabilities::encryption(capabilities)
    }

    /// Short label shown in the encryption column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "OPN",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
        }
    }
}

impl Display for Encryption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One color per displayed attribute of an [`AccessPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordColors {
    pub power: Rgb,
    pub channel: Rgb,
    pub encryption: Rgb,
    pub cipher: Rgb,
    pub wps: Rgb,
    pub essid: Rgb,
    pub bssid: Rgb,
    pub manufacturer: Rgb,
}

impl RecordColors {
    fn neutral(palette: &Palette) -> Self {
        Self {
            power: palette.grey,
            channel: palette.grey,
            encryption: palette.grey,
            cipher: palette.grey,
            wps: palette.grey,
            essid: palette.grey,
            bssid: palette.grey,
            manufacturer: palette.grey,
        }
    }
}

/// A classified, display-ready access point record.
///
/// Source fields (`level`, `frequency`, `capabilities`, `essid`) can only be
/// changed through methods that recompute every field derived from them, so
/// the channel, labels and colors always describe the current values.
/// The BSSID never changes after construction.
///
/// # Examples
///
/// ```
/// use wscan::{AccessPoint, Encryption, Palette, ScanObservation};
///
/// let palette = Palette::default();
/// let obs = ScanObservation::new("AA:BB:CC:11:22:33", "cafe", -60, 5180, "[WPA2-PSK-CCMP][WPS][ESS]");
/// let ap = AccessPoint::new(&obs, &palette);
///
/// assert_eq!(ap.channel(), 36);
/// assert_eq!(ap.encryption(), Encryption::Wpa2);
/// assert_eq!(ap.cipher(), "CCMP");
/// assert!(ap.wps());
/// assert_eq!(ap.colors().channel, palette.blue_light);
/// ```
#[derive(Debug, Clone)]
pub struct AccessPoint {
    bssid: String,
    essid: String,
    level: i32,
    frequency: i32,
    capabilities: String,
    manufacturer: String,

    channel: u16,
    encryption: Encryption,
    cipher: &'static str,
    wps: bool,
    colors: RecordColors,
    present: bool,
}

impl AccessPoint {
    /// Builds a record from one observation. The manufacturer starts empty.
    pub fn new(obs: &ScanObservation, palette: &Palette) -> Self {
        let mut ap = Self {
            bssid: obs.bssid.clone(),
            essid: String::new(),
            level: 0,
            frequency: 0,
            capabilities: String::new(),
            manufacturer: String::new(),
            channel: 0,
            encryption: Encryption::Open,
            cipher: "",
            wps: false,
            colors: RecordColors::neutral(palette),
            present: true,
        };
        ap.set_level(obs.level);
        ap.set_frequency(obs.frequency, palette);
        ap.set_capabilities(&obs.capabilities, palette);
        ap.set_essid(&obs.essid, palette);
        ap
    }

    /// Attaches a manufacturer name.
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// Applies a fresh sighting of this access point in place.
    ///
    /// Level, frequency and capabilities are always taken from `obs`. The
    /// name is only adopted when this record has none yet, so a hidden
    /// network that later reveals its name keeps its identity.
    pub fn update(&mut self, obs: &ScanObservation, palette: &Palette) {
        self.set_level(obs.level);
        self.set_frequency(obs.frequency, palette);
        self.set_capabilities(&obs.capabilities, palette);
        if self.essid.is_empty() && !obs.essid.is_empty() {
            self.set_essid(&obs.essid, palette);
        }
        self.present = true;
    }

    /// Sets the signal level and its power color.
    pub fn set_level(&mut self, level: i32) {
        self.level = level;
        self.colors.power = power_color(level);
    }

    /// Sets the frequency, its channel number and channel color.
    pub fn set_frequency(&mut self, frequency: i32, palette: &Palette) {
        self.frequency = frequency;
        self.channel = channel_number(frequency);
        self.colors.channel = if is_5ghz(frequency) {
            palette.blue_light
        } else {
            palette.grey
        };
    }

    /// Sets the capability descriptor and reclassifies encryption, cipher
    /// and WPS together with their colors.
    pub fn set_capabilities(&mut self, capabilities: &str, palette: &Palette) {
        self.capabilities = capabilities.to_string();

        self.encryption = Encryption::from_capabilities(capabilities);
        self.colors.encryption = if has_eap(capabilities) {
            palette.red_light
        } else {
            match self.encryption {
                Encryption::Open => palette.green,
                Encryption::Wpa | Encryption::Wpa2 => palette.yellow_middle,
                Encryption::Wep => palette.sky_light,
            }
        };

        self.cipher = cipher_label(capabilities);
        self.colors.cipher = match (has_tkip(capabilities), has_preauth(capabilities)) {
            (true, true) => palette.sky,
            (true, false) => palette.sky_white,
            (false, _) => palette.grey,
        };

        self.wps = wps_supported(capabilities);
        self.colors.wps = if self.wps {
            palette.green_high
        } else {
            palette.red_high
        };
    }

    /// Sets the network name and its color (hidden names stand out).
    pub fn set_essid(&mut self, essid: &str, palette: &Palette) {
        self.essid = essid.to_string();
        self.colors.essid = if essid.is_empty() {
            palette.yellow
        } else {
            palette.grey
        };
    }

    pub(crate) fn mark_absent(&mut self) {
        self.present = false;
    }

    /// Exact identity check against a sighting's BSSID and ESSID.
    ///
    /// With `hidden` set, a record without a name also matches any name for
    /// the same BSSID, as long as its stored level is above the radio floor.
    /// Some cards intermittently drop the SSID of weak hidden networks; this
    /// keeps those sightings attached to one record.
    pub fn matches(&self, bssid: &str, essid: &str, hidden: bool) -> bool {
        self.bssid == bssid
            && (self.essid == essid || (self.level > MIN_LEVEL && self.essid.is_empty() && hidden))
    }

    /// Device identity check between two records.
    ///
    /// Names must be equal. Without `smart` the BSSIDs must be equal too;
    /// with `smart` sharing the first three octets is enough, which groups
    /// the radios of one multi-band access point.
    pub fn same_device(&self, other: &AccessPoint, smart: bool) -> bool {
        if self.essid != other.essid {
            return false;
        }
        if !smart {
            return self.bssid == other.bssid;
        }
        match other.bssid.get(..8) {
            Some(prefix) => self.bssid.starts_with(prefix),
            None => self.bssid == other.bssid,
        }
    }

    /// The name to show: the ESSID, or the BSSID for hidden networks.
    pub fn display_name(&self) -> &str {
        if self.essid.is_empty() {
            &self.bssid
        } else {
            &self.essid
        }
    }

    pub fn bssid(&self) -> &str {
        &self.bssid
    }

    pub fn essid(&self) -> &str {
        &self.essid
    }

    /// Signal level in dBm.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Frequency in MHz.
    pub fn frequency(&self) -> i32 {
        self.frequency
    }

    pub fn capabilities(&self) -> &str {
        &self.capabilities
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Channel number, 0 when the frequency is not in a known band.
    pub fn channel(&self) -> u16 {
        self.channel
    }

    pub fn is_5ghz(&self) -> bool {
        is_5ghz(self.frequency)
    }

    pub fn encryption(&self) -> Encryption {
        self.encryption
    }

    /// Cipher label: `CCMP`, `CCMP+TKIP`, `  TKIP` or empty.
    pub fn cipher(&self) -> &'static str {
        self.cipher
    }

    pub fn wps(&self) -> bool {
        self.wps
    }

    /// `yes` or `no`.
    pub fn wps_label(&self) -> &'static str {
        if self.wps { "yes" } else { "no" }
    }

    pub fn colors(&self) -> &RecordColors {
        &self.colors
    }

    /// Whether this access point was seen in the most recent merged scan.
    pub fn is_present(&self) -> bool {
        self.present
    }
}

impl PartialEq for AccessPoint {
    fn eq(&self, other: &Self) -> bool {
        self.bssid == other.bssid && self.essid == other.essid
    }
}

impl Eq for AccessPoint {}

/// Errors that can occur while acquiring or loading scan data.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// No Wi-Fi device was found on the system.
    #[error("no Wi-Fi device found")]
    NoWifiDevice,

    /// Wi-Fi is switched off in NetworkManager.
    #[error("Wi-Fi is disabled")]
    WifiDisabled,

    /// Reading a palette, vendor database or replay file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Observations could not be written out as TOML.
    #[error("failed to serialize scan: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A color was not in `#rrggbb` form.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A vendor database line could not be parsed.
    #[error("invalid OUI entry on line {line}: {content:?}")]
    InvalidOuiEntry { line: usize, content: String },
}
