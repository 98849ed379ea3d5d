//! Terminal table of access point records.
//!
//! Colors are 24-bit ANSI escapes taken straight from each record's
//! [`RecordColors`](wscan::RecordColors). Records that dropped out of the
//! latest scan are dimmed, and marked with `-` so the distinction survives
//! `--no-color`.

use wscan::{AccessPoint, Band, Rgb};

const RESET: &str = "\x1b[0m";
const MANUFACTURER_WIDTH: usize = 20;

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    color: bool,
    connected: Option<String>,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            connected: None,
        }
    }

    /// Marks the row with this BSSID as the current connection.
    #[must_use]
    pub fn with_connected(mut self, bssid: Option<String>) -> Self {
        self.connected = bssid;
        self
    }

    pub fn header(&self) -> String {
        format!(
            "  {:>4} {:>3} {:<6} {:<4} {:<9} {:<3} {:<17} {:<w$} ESSID",
            "PWR",
            "CH",
            "BAND",
            "ENC",
            "CIPHER",
            "WPS",
            "BSSID",
            "MANUFACTURER",
            w = MANUFACTURER_WIDTH
        )
    }

    pub fn row(&self, ap: &AccessPoint) -> String {
        let colors = ap.colors();
        let dim = !ap.is_present();
        let marker = if self.connected.as_deref() == Some(ap.bssid()) {
            '*'
        } else if dim {
            '-'
        } else {
            ' '
        };
        let band = Band::from_frequency(ap.frequency()).to_string();
        let manufacturer: String = ap.manufacturer().chars().take(MANUFACTURER_WIDTH).collect();

        [
            marker.to_string(),
            self.paint(&format!("{:>4}", ap.level()), colors.power, dim),
            self.paint(&format!("{:>3}", ap.channel()), colors.channel, dim),
            self.paint(&format!("{band:<6}"), colors.channel, dim),
            self.paint(&format!("{:<4}", ap.encryption()), colors.encryption, dim),
            self.paint(&format!("{:<9}", ap.cipher()), colors.cipher, dim),
            self.paint(&format!("{:<3}", ap.wps_label()), colors.wps, dim),
            self.paint(&format!("{:<17}", ap.bssid()), colors.bssid, dim),
            self.paint(
                &format!("{manufacturer:<w$}", w = MANUFACTURER_WIDTH),
                colors.manufacturer,
                dim,
            ),
            self.paint(ap.display_name(), colors.essid, dim),
        ]
        .join(" ")
    }

    /// Header plus one row per record.
    pub fn table<'a>(&self, records: impl IntoIterator<Item = &'a AccessPoint>) -> String {
        let mut out = self.header();
        for ap in records {
            out.push('\n');
            out.push_str(&self.row(ap));
        }
        out
    }

    /// Like [`Renderer::table`], with a blank line between device groups.
    pub fn grouped(&self, groups: &[Vec<&AccessPoint>]) -> String {
        let mut out = self.header();
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for ap in group {
                out.push('\n');
                out.push_str(&self.row(ap));
            }
        }
        out
    }

    fn paint(&self, text: &str, color: Rgb, dim: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let weight = if dim { "2;" } else { "" };
        format!(
            "\x1b[{weight}38;2;{};{};{}m{text}{RESET}",
            color.r, color.g, color.b
        )
    }
}
