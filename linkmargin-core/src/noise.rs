//! Approximate system noise temperature by frequency band.
//!
//! Step tables calibrated separately for the spacecraft receiver (uplink)
//! and the ground receiver (downlink):
//!
//! | Direction | Band (GHz) | T_sys (K) |
//! |-----------|------------|-----------|
//! | Uplink | < 0.2 | unavailable |
//! | Uplink | [0.2, 20] | 614 |
//! | Uplink | > 20 | 763 |
//! | Downlink | ≤ 0.2 | unavailable |
//! | Downlink | (0.2, 2] | 221 |
//! | Downlink | (2, 20] | 135 |
//! | Downlink | > 20 | 424 |
//!
//! "Unavailable" leaves the temperature to the caller to enter by hand.

use crate::units::Derived;
use std::fmt;

/// Link direction; also selects the noise table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Ground station transmits, spacecraft receives.
    Uplink,
    /// Spacecraft transmits, ground station receives.
    Downlink,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Uplink => f.write_str("uplink"),
            Direction::Downlink => f.write_str("downlink"),
        }
    }
}

const MIN_BAND_GHZ: f64 = 0.2;

/// Looks up the system noise temperature in kelvin.
///
/// ```
/// use linkmargin_core::noise::{system_temperature, Direction};
/// use linkmargin_core::units::Derived;
///
/// assert_eq!(system_temperature(Some(8.4), Direction::Downlink), Derived::Value(135.0));
/// assert_eq!(system_temperature(None, Direction::Uplink), Derived::Unavailable);
/// ```
pub fn system_temperature(freq_ghz: Option<f64>, direction: Direction) -> Derived<f64> {
    let f = match freq_ghz {
        Some(f) if f.is_finite() => f,
        _ => return Derived::Unavailable,
    };
    match direction {
        Direction::Uplink => match f {
            f if f < MIN_BAND_GHZ => Derived::Unavailable,
            f if f <= 20.0 => Derived::Value(614.0),
            _ => Derived::Value(763.0),
        },
        Direction::Downlink => match f {
            f if f <= MIN_BAND_GHZ => Derived::Unavailable,
            f if f <= 2.0 => Derived::Value(221.0),
            f if f <= 20.0 => Derived::Value(135.0),
            _ => Derived::Value(424.0),
        },
    }
}

/// [`system_temperature`] for a raw text field.
pub fn system_temperature_from_text(freq_ghz: &str, direction: Direction) -> Derived<f64> {
    system_temperature(freq_ghz.trim().parse().ok(), direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Derived::{Unavailable, Value};

    #[test]
    fn uplink_band_edges() {
        let t = |f| system_temperature(Some(f), Direction::Uplink);
        assert_eq!(t(0.0), Unavailable);
        assert_eq!(t(0.199_999), Unavailable);
        assert_eq!(t(0.2), Value(614.0));
        assert_eq!(t(2.0), Value(614.0));
        assert_eq!(t(20.0), Value(614.0));
        assert_eq!(t(20.000_001), Value(763.0));
        assert_eq!(t(34.0), Value(763.0));
    }

    #[test]
    fn downlink_band_edges() {
        let t = |f| system_temperature(Some(f), Direction::Downlink);
        assert_eq!(t(0.1), Unavailable);
        assert_eq!(t(0.2), Unavailable);
        assert_eq!(t(0.200_001), Value(221.0));
        assert_eq!(t(2.0), Value(221.0));
        assert_eq!(t(2.000_001), Value(135.0));
        assert_eq!(t(8.4), Value(135.0));
        assert_eq!(t(20.0), Value(135.0));
        assert_eq!(t(20.000_001), Value(424.0));
    }

    #[test]
    fn missing_or_garbage_frequency_is_unavailable() {
        assert_eq!(system_temperature(None, Direction::Downlink), Unavailable);
        assert_eq!(system_temperature(Some(f64::NAN), Direction::Uplink), Unavailable);
        assert_eq!(system_temperature_from_text("", Direction::Uplink), Unavailable);
        assert_eq!(system_temperature_from_text("x-band", Direction::Uplink), Unavailable);
        assert_eq!(system_temperature_from_text(" 8.4", Direction::Downlink), Value(135.0));
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction::Uplink.to_string(), "uplink");
        assert_eq!(Direction::Downlink.to_string(), "downlink");
    }
}
