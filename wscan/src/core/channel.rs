//! Frequency to channel mapping.

use std::fmt::{Display, Formatter};

use crate::types::constants::frequency::*;

/// Converts a center frequency in MHz to a channel number.
///
/// Covers 2.4 GHz (1-14), 802.11y 3.65 GHz, 4.9 GHz public safety
/// (7 MHz steps on frequencies that are not multiples of 5), 4.9 GHz
/// Japan and 5 GHz. Returns 0 for anything else, including zero and
/// negative input.
pub fn channel_number(frequency: i32) -> u16 {
    let channel = match frequency {
        BAND_2_4_CH14 => 14,
        BAND_2_4_START..BAND_2_4_CH14 => (frequency - BAND_2_4_BASE) / CHANNEL_SPACING,
        BAND_3_6_START..=BAND_3_6_END => {
            BAND_3_6_FIRST_CHANNEL + (frequency - BAND_3_6_BASE) / CHANNEL_SPACING
        }
        PUBLIC_SAFETY_START..=PUBLIC_SAFETY_END if frequency % CHANNEL_SPACING != 0 => {
            PUBLIC_SAFETY_FIRST_CHANNEL + (frequency - PUBLIC_SAFETY_START) / PUBLIC_SAFETY_SPACING
        }
        BAND_4_9_START..=BAND_4_9_END => {
            BAND_4_9_FIRST_CHANNEL + (frequency - BAND_4_9_START) / CHANNEL_SPACING
        }
        BAND_5_START..=BAND_5_END => {
            BAND_5_FIRST_CHANNEL + (frequency - BAND_5_START) / CHANNEL_SPACING
        }
        _ => 0,
    };
    channel as u16
}

/// Whether the frequency is painted as a 5 GHz channel.
pub fn is_5ghz(frequency: i32) -> bool {
    frequency >= HIGH_BAND_START
}

/// Coarse band a frequency belongs to, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Band2_4GHz,
    Band3_6GHz,
    Band4_9GHz,
    Band5GHz,
    Unknown,
}

impl Band {
    pub fn from_frequency(frequency: i32) -> Self {
        match frequency {
            BAND_2_4_START..=BAND_2_4_CH14 => Self::Band2_4GHz,
            BAND_3_6_START..=BAND_3_6_END => Self::Band3_6GHz,
            BAND_4_9_START..=PUBLIC_SAFETY_END => Self::Band4_9GHz,
            BAND_5_START..=BAND_5_END => Self::Band5GHz,
            _ => Self::Unknown,
        }
    }
}

impl Display for Band {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Band2_4GHz => write!(f, "2.4GHz"),
            Self::Band3_6GHz => write!(f, "3.6GHz"),
            Self::Band4_9GHz => write!(f, "4.9GHz"),
            Self::Band5GHz => write!(f, "5GHz"),
            Self::Unknown => write!(f, "?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_2_4ghz() {
        assert_eq!(channel_number(2412), 1);
        assert_eq!(channel_number(2437), 6);
        assert_eq!(channel_number(2462), 11);
        assert_eq!(channel_number(2472), 13);
        assert_eq!(channel_number(2484), 14);
    }

    #[test]
    fn test_channel_2_4ghz_whole_range() {
        for f in 2412..2484 {
            assert_eq!(channel_number(f) as i32, (f - 2407) / 5, "frequency {f}");
        }
    }

    #[test]
    fn test_channel_2_4ghz_off_grid_truncates() {
        assert_eq!(channel_number(2414), 1);
        assert_eq!(channel_number(2416), 1);
        assert_eq!(channel_number(2417), 2);
    }

    #[test]
    fn test_channel_3_6ghz() {
        assert_eq!(channel_number(3658), 131);
        assert_eq!(channel_number(3660), 132);
        assert_eq!(channel_number(3665), 133);
        assert_eq!(channel_number(3690), 138);
    }

    #[test]
    fn test_channel_public_safety() {
        assert_eq!(channel_number(4942), 20);
        assert_eq!(channel_number(4947), 21);
        assert_eq!(channel_number(4987), 26);
    }

    #[test]
    fn test_channel_4_9ghz() {
        assert_eq!(channel_number(4915), 183);
        assert_eq!(channel_number(4920), 184);
        assert_eq!(channel_number(4940), 188);
        assert_eq!(channel_number(4980), 196);
    }

    #[test]
    fn test_channel_5ghz() {
        assert_eq!(channel_number(5035), 7);
        assert_eq!(channel_number(5180), 36);
        assert_eq!(channel_number(5500), 100);
        assert_eq!(channel_number(5745), 149);
        assert_eq!(channel_number(5825), 165);
    }

    #[test]
    fn test_channel_unknown() {
        for f in [0, -1, i32::MIN, 1000, 2411, 2485, 3000, 5830, 5955, i32::MAX] {
            assert_eq!(channel_number(f), 0, "frequency {f}");
        }
    }

    #[test]
    fn test_is_5ghz() {
        assert!(!is_5ghz(2484));
        assert!(!is_5ghz(4914));
        assert!(is_5ghz(4915));
        assert!(is_5ghz(5180));
    }

    #[test]
    fn test_band() {
        assert_eq!(Band::from_frequency(2437), Band::Band2_4GHz);
        assert_eq!(Band::from_frequency(3670), Band::Band3_6GHz);
        assert_eq!(Band::from_frequency(4942), Band::Band4_9GHz);
        assert_eq!(Band::from_frequency(5180), Band::Band5GHz);
        assert_eq!(Band::from_frequency(0), Band::Unknown);
        assert_eq!(Band::from_frequency(5180).to_string(), "5GHz");
    }
}
