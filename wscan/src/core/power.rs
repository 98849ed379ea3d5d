//! Signal level normalization and the red to green power gradient.

use crate::api::palette::Rgb;
use crate::types::constants::signal::{MAX_LEVEL, MIN_LEVEL, POWER_LEVELS, POWER_MIDPOINT};

/// Maps a level in dBm onto `0..levels`.
///
/// Levels at or below -100 dBm map to 0, levels at or above -55 dBm map to
/// `levels - 1`, everything in between is scaled linearly and truncated.
/// Returns 0 when `levels` is not positive.
pub fn signal_level(level: i32, levels: i32) -> i32 {
    if levels <= 0 || level <= MIN_LEVEL {
        return 0;
    }
    if level >= MAX_LEVEL {
        return levels - 1;
    }
    let input_range = (MAX_LEVEL - MIN_LEVEL) as f32;
    let output_range = (levels - 1) as f32;
    ((level - MIN_LEVEL) as f32 * output_range / input_range) as i32
}

/// Color for a signal level.
///
/// Below the midpoint red is saturated and green ramps up from 0; from the
/// midpoint on green is saturated and red ramps back down. Blue is always 0.
pub fn power_color(level: i32) -> Rgb {
    let pwr = signal_level(level, POWER_LEVELS);
    let (red, green) = if pwr < POWER_MIDPOINT {
        (0xff, pwr)
    } else {
        ((POWER_LEVELS - pwr).min(0xff), 0xff)
    };
    Rgb::new(red as u8, green as u8, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_level_bounds() {
        assert_eq!(signal_level(-100, 512), 0);
        assert_eq!(signal_level(-120, 512), 0);
        assert_eq!(signal_level(-55, 512), 511);
        assert_eq!(signal_level(0, 512), 511);
        assert_eq!(signal_level(-70, 0), 0);
    }

    #[test]
    fn test_signal_level_linear() {
        assert_eq!(signal_level(-99, 512), 11);
        assert_eq!(signal_level(-78, 512), 249);
        assert_eq!(signal_level(-77, 512), 261);
        assert_eq!(signal_level(-70, 5), 2);
    }

    #[test]
    fn test_power_color_extremes() {
        assert_eq!(power_color(-100), Rgb::new(0xff, 0, 0));
        assert_eq!(power_color(-30), Rgb::new(1, 0xff, 0));
    }

    #[test]
    fn test_power_color_midpoint_is_clamped() {
        // -77 dBm lands just past the midpoint.
        assert_eq!(power_color(-77), Rgb::new(251, 0xff, 0));
        for level in -100..=-30 {
            let c = power_color(level);
            assert!(c.r == 0xff || c.g == 0xff, "level {level}: {c}");
            assert_eq!(c.b, 0);
        }
    }

    #[test]
    fn test_power_color_green_monotonic() {
        let mut previous = power_color(-110);
        for level in -109..=0 {
            let current = power_color(level);
            assert!(current.g >= previous.g, "green dropped at {level}");
            assert!(current.r <= previous.r, "red rose at {level}");
            previous = current;
        }
    }
}
