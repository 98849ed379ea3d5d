//! A Rust library for scanning and classifying Wi-Fi access points.
//!
//! This crate turns raw radio scan data into display-ready records:
//!
//! - Frequency to channel number, with 5 GHz highlighting
//! - Encryption, cipher and WPS classification from capability descriptors
//! - A red to green color for the signal level
//! - Manufacturer lookup by BSSID prefix
//! - Exact and "smart" (multi-radio) access point identity
//! - A record set that is updated in place across repeated scans
//!
//! Observations come from any [`ScanSource`]: [`NmScanner`] reads live data
//! from NetworkManager over D-Bus, [`ReplaySource`] reads recorded scans.
//!
//! # Example
//!
//! ```no_run
//! use wscan::{Classifier, MatchOptions, NmScanner, OuiDatabase, Palette, ScanSet, ScanSource};
//!
//! # async fn example() -> wscan::Result<()> {
//! let classifier = Classifier::new(Palette::default(), OuiDatabase::load_system());
//! let scanner = NmScanner::new().await?;
//! let mut set = ScanSet::new(MatchOptions { hidden: true, smart: false });
//!
//! loop {
//!     let summary = set.merge(&scanner.scan().await?, &classifier);
//!     println!("{} new, {} gone", summary.added, summary.lost);
//!     for ap in set.iter().filter(|ap| ap.is_present()) {
//!         println!("{:4} {:>4} dBm  {}", ap.channel(), ap.level(), ap.display_name());
//!     }
//! }
//! # }
//! ```
//!
//! # Error Handling
//!
//! The classifier never fails: unknown frequencies give channel 0 and
//! unrecognized descriptors classify as open. Scanning and file loading
//! return `Result<T, ScanError>`.
//!
//! # Logging
//!
//! This crate uses the [`log`](https://docs.rs/log) facade for logging. To see
//! log output, add a logging implementation like `env_logger`. For example:
//!
//! ```no_run,ignore
//! env_logger::init();
//! // ...
//! ```

// Internal implementation modules
mod dbus;
mod util;

// Public API modules
pub mod api;
pub mod core;
pub mod types;

// Re-exported public API
pub use crate::api::models::{AccessPoint, Encryption, RecordColors, ScanError, ScanObservation};
pub use crate::api::palette::{Palette, Rgb};
pub use crate::api::scanner::NmScanner;
pub use crate::api::source::ScanSource;
pub use crate::core::capabilities::{cipher_label, encryption_label, wps_supported};
pub use crate::core::channel::{Band, channel_number, is_5ghz};
pub use crate::core::classifier::{Classifier, build_records};
pub use crate::core::oui::{OuiDatabase, SYSTEM_PATHS};
pub use crate::core::power::{power_color, signal_level};
pub use crate::core::replay::{ReplaySource, parse_replay, to_replay};
pub use crate::core::scan_set::{MatchOptions, MergeSummary, ScanSet, SortKey};
pub use crate::types::flags::capabilities_from_flags;

/// A specialized `Result` type for scanning operations.
pub type Result<T> = std::result::Result<T, ScanError>;
