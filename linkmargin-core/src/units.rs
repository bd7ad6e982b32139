//! Unit conversions shared by every link budget term.
//!
//! All budget arithmetic happens in decibels: linear powers, gains and ratios
//! pass through [`to_db`] once and are then only added or subtracted. The
//! conversion refuses non-positive inputs instead of returning `-inf`/`NaN`,
//! so a zero transmitter power surfaces as an error naming the field rather
//! than a meaningless margin.
//!
//! # Soft results
//!
//! A few values are derived from other inputs that a front end may not have
//! filled in yet. Those return [`Derived`], whose `Unavailable` variant means
//! "cannot be computed yet", which is distinct from an invalid input.

use crate::constants::{HALF_POWER_BEAMWIDTH_CONSTANT, HZ_PER_GHZ, SPEED_OF_LIGHT_M_S};
use crate::{DomainErrorKind, LinkError, LinkResult};

/// A value derived from optional inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Derived<T> {
    Value(T),
    Unavailable,
}

impl<T> Derived<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Derived::Value(_))
    }

    pub fn value(self) -> Option<T> {
        match self {
            Derived::Value(v) => Some(v),
            Derived::Unavailable => None,
        }
    }

    /// Turns an unavailable value into a [`LinkError::MissingField`] naming `field`.
    pub fn require(self, field: &str) -> LinkResult<T> {
        self.value().ok_or_else(|| LinkError::missing_field(field))
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Derived<U> {
        match self {
            Derived::Value(v) => Derived::Value(f(v)),
            Derived::Unavailable => Derived::Unavailable,
        }
    }
}

impl<T> From<Option<T>> for Derived<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Derived::Value(v),
            None => Derived::Unavailable,
        }
    }
}

/// Fails unless `value` is finite and strictly positive.
pub fn require_positive(quantity: &str, value: f64) -> LinkResult<f64> {
    if !value.is_finite() {
        return Err(LinkError::domain(
            quantity,
            DomainErrorKind::NotFinite,
            &format!("{} is not finite", value),
        ));
    }
    if value <= 0.0 {
        return Err(LinkError::domain(
            quantity,
            DomainErrorKind::NonPositive,
            &format!("{} must be greater than zero", value),
        ));
    }
    Ok(value)
}

/// Converts a strictly positive linear quantity to decibels: `10·log10(x)`.
///
/// ```
/// use linkmargin_core::units::to_db;
///
/// assert_eq!(to_db(100.0).unwrap(), 20.0);
/// assert!(to_db(0.0).is_err());
/// ```
#[inline]
pub fn to_db(x: f64) -> LinkResult<f64> {
    let x = require_positive("to_db", x)?;
    Ok(10.0 * libm::log10(x))
}

/// Carrier wavelength in meters for a frequency in GHz.
pub fn wavelength_m(freq_ghz: f64) -> LinkResult<f64> {
    let f = require_positive("frequency", freq_ghz)?;
    Ok(SPEED_OF_LIGHT_M_S / (f * HZ_PER_GHZ))
}

/// Empirical half-power beamwidth in degrees: `21 / (f · D)`.
pub fn half_power_beamwidth_deg(freq_ghz: f64, diameter_m: f64) -> LinkResult<f64> {
    let f = require_positive("frequency", freq_ghz)?;
    let d = require_positive("antenna diameter", diameter_m)?;
    Ok(HALF_POWER_BEAMWIDTH_CONSTANT / (f * d))
}

/// Uplink carrier frequency from the downlink frequency and transponder turn-around ratio.
///
/// Either input may still be missing; the result is then
/// [`Derived::Unavailable`] rather than an error. Non-finite or non-positive
/// entries are treated the same as missing ones.
pub fn uplink_frequency_ghz(downlink_ghz: Option<f64>, turn_around_ratio: Option<f64>) -> Derived<f64> {
    match (downlink_ghz, turn_around_ratio) {
        (Some(d), Some(r)) if usable(d) && usable(r) => Derived::Value(d * r),
        _ => Derived::Unavailable,
    }
}

/// [`uplink_frequency_ghz`] for raw text fields, as typed into a form.
pub fn uplink_frequency_from_text(downlink_ghz: &str, turn_around_ratio: &str) -> Derived<f64> {
    uplink_frequency_ghz(
        downlink_ghz.trim().parse().ok(),
        turn_around_ratio.trim().parse().ok(),
    )
}

fn usable(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
