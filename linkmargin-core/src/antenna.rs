//! Parabolic antenna gain, pointing loss and EIRP.
//!
//! The pointing loss uses the classic empirical pattern approximation
//! `L = 12 (e / θ½)²` with `θ½ = 21 / (f·D)`, valid for small offsets inside
//! the main lobe. It returns a positive number of decibels that the budget
//! subtracts.

use crate::constants::{DEFAULT_ANTENNA_EFFICIENCY, PI, POINTING_LOSS_COEFFICIENT};
use crate::units::{half_power_beamwidth_deg, require_positive, to_db, wavelength_m};
use crate::{DomainErrorKind, LinkError, LinkResult};

/// Dish parameters for one end of the link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Antenna {
    /// Dish diameter (m).
    pub diameter_m: f64,
    /// Aperture efficiency, 0 < η ≤ 1.
    pub efficiency: f64,
    /// Off-boresight pointing error (deg).
    pub pointing_offset_deg: f64,
}

impl Antenna {
    pub fn new(diameter_m: f64) -> Self {
        Self {
            diameter_m,
            efficiency: DEFAULT_ANTENNA_EFFICIENCY,
            pointing_offset_deg: 0.0,
        }
    }

    pub fn with_efficiency(mut self, efficiency: f64) -> Self {
        self.efficiency = efficiency;
        self
    }

    pub fn with_pointing_offset(mut self, offset_deg: f64) -> Self {
        self.pointing_offset_deg = offset_deg;
        self
    }

    pub fn gain_db(&self, freq_ghz: f64) -> LinkResult<f64> {
        transmitter_gain(freq_ghz, self.diameter_m, self.efficiency)
    }

    pub fn pointing_loss_db(&self, freq_ghz: f64) -> LinkResult<f64> {
        pointing_loss(freq_ghz, self.diameter_m, self.pointing_offset_deg)
    }
}

/// Antenna gain in dBi: `η (π D / λ)²` converted to decibels.
///
/// The same expression serves for receive gain by reciprocity.
pub fn transmitter_gain(freq_ghz: f64, diameter_m: f64, efficiency: f64) -> LinkResult<f64> {
    let wavelength = wavelength_m(freq_ghz)?;
    let d = require_positive("antenna diameter", diameter_m)?;
    let eta = require_positive("antenna efficiency", efficiency)?;
    if eta > 1.0 {
        return Err(LinkError::domain(
            "antenna efficiency",
            DomainErrorKind::OutOfRange,
            &format!("{} exceeds 1", eta),
        ));
    }
    let ratio = PI * d / wavelength;
    to_db(eta * ratio * ratio)
}

/// Pointing loss in dB (positive) for an offset from boresight.
///
/// ```
/// use linkmargin_core::antenna::pointing_loss;
///
/// assert_eq!(pointing_loss(8.4, 35.0, 0.0).unwrap(), 0.0);
/// ```
pub fn pointing_loss(freq_ghz: f64, diameter_m: f64, offset_deg: f64) -> LinkResult<f64> {
    if !offset_deg.is_finite() {
        return Err(LinkError::domain(
            "pointing offset",
            DomainErrorKind::NotFinite,
            &format!("{} is not finite", offset_deg),
        ));
    }
    let half_power = half_power_beamwidth_deg(freq_ghz, diameter_m)?;
    let x = offset_deg / half_power;
    Ok(POINTING_LOSS_COEFFICIENT * x * x)
}

/// Effective isotropic radiated power in dBW.
///
/// `power_w` is linear transmitter output in watts; `loss_db` and `gain_db`
/// are already in decibels (a loss factor below 1 gives a negative `loss_db`).
pub fn eirp(power_w: f64, loss_db: f64, gain_db: f64) -> LinkResult<f64> {
    let p = to_db(power_w).map_err(|e| e.with_quantity("transmitter power"))?;
    Ok(p + loss_db + gain_db)
}
