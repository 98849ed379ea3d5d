//! Manufacturer lookup by BSSID prefix.
//!
//! Two common on-disk formats are understood:
//!
//! - IEEE `oui.txt`: `00-22-72   (hex)\t\tAmerican Micro-Fuel Device Corp.`
//! - Wireshark `manuf`: `00:22:72\tAmericanMic\tAmerican Micro-Fuel Device Corp.`
//!
//! Only 24-bit assignments are indexed; longer `manuf` prefixes
//! (`/28`, `/36`) are skipped.

use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::api::models::ScanError;
use crate::Result;

/// Well-known locations of vendor databases on Linux distributions.
pub const SYSTEM_PATHS: &[&str] = &[
    "/usr/share/ieee-data/oui.txt",
    "/var/lib/ieee-data/oui.txt",
    "/usr/share/wireshark/manuf",
    "/usr/share/misc/oui.txt",
];

/// Vendor names keyed by organizationally unique identifier.
#[derive(Debug, Clone, Default)]
pub struct OuiDatabase {
    vendors: HashMap<u32, String>,
}

enum Line<'a> {
    Skip,
    Entry(&'a str, &'a str),
}

impl OuiDatabase {
    /// Creates an empty database; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a database, failing on the first malformed entry.
    pub fn parse(text: &str) -> Result<Self> {
        let mut db = Self::new();
        for (index, raw) in text.lines().enumerate() {
            if let Line::Entry(prefix, vendor) = classify(raw) {
                if !db.insert(prefix, vendor) {
                    return Err(ScanError::InvalidOuiEntry {
                        line: index + 1,
                        content: raw.to_string(),
                    });
                }
            }
        }
        Ok(db)
    }

    /// Parses a database, skipping malformed entries with a warning.
    pub fn parse_lenient(text: &str) -> Self {
        let mut db = Self::new();
        for (index, raw) in text.lines().enumerate() {
            if let Line::Entry(prefix, vendor) = classify(raw) {
                if !db.insert(prefix, vendor) {
                    warn!("Skipping malformed OUI entry on line {}: {raw:?}", index + 1);
                }
            }
        }
        db
    }

    /// Reads and leniently parses a database file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let db = Self::parse_lenient(&text);
        debug!(
            "Loaded {} vendors from {}",
            db.len(),
            path.as_ref().display()
        );
        Ok(db)
    }

    /// Loads the first readable database from [`SYSTEM_PATHS`], or an empty one.
    pub fn load_system() -> Self {
        for path in SYSTEM_PATHS {
            if Path::new(path).exists() {
                match Self::load(path) {
                    Ok(db) => return db,
                    Err(e) => warn!("Failed to read vendor database {path}: {e}"),
                }
            }
        }
        debug!("No vendor database found, manufacturers will be empty");
        Self::new()
    }

    /// Adds one assignment. Returns `false` if the prefix is not three octets.
    pub fn insert(&mut self, prefix: &str, vendor: &str) -> bool {
        match parse_prefix(prefix) {
            Some(key) => {
                self.vendors.insert(key, vendor.trim().to_string());
                true
            }
            None => false,
        }
    }

    /// Looks up the vendor of a hardware address such as `AA:BB:CC:11:22:33`.
    ///
    /// Case and separators (`:`, `-`, `.`) are ignored.
    pub fn lookup(&self, bssid: &str) -> Option<&str> {
        let hex: String = bssid
            .chars()
            .filter(|c| !matches!(c, ':' | '-' | '.'))
            .take(6)
            .collect();
        let key = parse_prefix(&hex)?;
        self.vendors.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }

    if let Some((prefix, vendor)) = line.split_once("(hex)") {
        return Line::Entry(prefix.trim(), vendor.trim());
    }

    // IEEE continuation lines (addresses, "(base 16)") are indented or
    // carry no tab-separated vendor column.
    if line.starts_with(char::is_whitespace) || line.contains("(base 16)") {
        return Line::Skip;
    }

    let mut fields = line.split('\t').filter(|f| !f.is_empty());
    let (Some(prefix), Some(short)) = (fields.next(), fields.next()) else {
        return Line::Skip;
    };
    let vendor = fields.next().unwrap_or(short);

    match prefix.split_once('/') {
        Some((base, "24")) => Line::Entry(base, vendor),
        Some(_) => Line::Skip,
        None => Line::Entry(prefix, vendor),
    }
}

fn parse_prefix(prefix: &str) -> Option<u32> {
    let hex: String = prefix
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | '.'))
        .collect();
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}
