//! Downlink data-rate sizing for a pushbroom imaging payload.
//!
//! The imager sweeps a swath across the ground track; the generated data
//! volume is proportional to the ground area covered per second, divided
//! into pixels:
//!
//! ```text
//! V_g   = sqrt(μ / (R + h)) · R / (R + h)            ground-track speed
//! x     = 2 h tan(θ_pixel / 2)                        ground pixel size
//! w     = 2 h tan(θ_swath / 2)                        ground swath width
//! D_gen = b · w · V_g / x²                            generated rate
//! D_req = D_gen · (duty / 100) / (t_downlink / 24)    rate during contact
//! D_tx  = D_req / r                                   after channel coding
//! ```
//!
//! Both angles are full cone angles; the half-angle tangent projects them
//! onto the ground directly below the spacecraft.

use crate::bodies::CelestialBody;
use crate::constants::{ARCMIN_TO_RAD, DEG_TO_RAD, HOURS_PER_DAY, METERS_PER_KM, PERCENT};
use crate::units::{require_positive, to_db};
use crate::{DomainErrorKind, LinkError, LinkResult};

/// Imaging payload description.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadParams {
    pub bits_per_pixel: f64,
    /// Full swath-width angle (deg).
    pub swath_angle_deg: f64,
    /// Full angular size of one pixel (arcmin).
    pub pixel_size_arcmin: f64,
    /// Fraction of the orbit the payload is imaging (%).
    pub duty_cycle_percent: f64,
    /// Hours per day available for downlinking payload data.
    pub downlink_hours_per_day: f64,
}

/// Ground-track speed of a circular orbit in m/s.
pub fn ground_velocity_m_s(altitude_km: f64, body: &CelestialBody) -> LinkResult<f64> {
    let h = require_positive("orbit altitude", altitude_km)?;
    let r = body.mean_radius;
    let orbital = libm::sqrt(body.gravitational_parameter / (h + r));
    Ok(orbital * (r / (r + h)) * METERS_PER_KM)
}

/// Ground footprint in meters of a full cone angle (radians) seen from `altitude_km`.
pub fn ground_footprint_m(altitude_km: f64, full_angle_rad: f64) -> f64 {
    2.0 * altitude_km * METERS_PER_KM * libm::tan(full_angle_rad / 2.0)
}

/// Required transmitted data rate in bit/s, including coding overhead.
pub fn required_data_rate_bps(
    payload: &PayloadParams,
    altitude_km: f64,
    code_rate: f64,
    body: &CelestialBody,
) -> LinkResult<f64> {
    let bpp = require_positive("payload bits per pixel", payload.bits_per_pixel)?;
    let swath_angle = require_positive("payload swath width angle", payload.swath_angle_deg)?;
    let pixel_angle = require_positive("payload pixel size", payload.pixel_size_arcmin)?;
    let duty = require_positive("payload duty cycle", payload.duty_cycle_percent)?;
    let downlink_hours = require_positive("payload downlink time", payload.downlink_hours_per_day)?;
    let rate = require_positive("code rate", code_rate)?;
    if swath_angle >= 180.0 {
        return Err(LinkError::domain(
            "payload swath width angle",
            DomainErrorKind::OutOfRange,
            &format!("{}° does not intersect the ground", swath_angle),
        ));
    }
    if pixel_angle >= 180.0 * 60.0 {
        return Err(LinkError::domain(
            "payload pixel size",
            DomainErrorKind::OutOfRange,
            &format!("{}' does not intersect the ground", pixel_angle),
        ));
    }

    let v_ground = ground_velocity_m_s(altitude_km, body)?;
    let pixel_m = ground_footprint_m(altitude_km, pixel_angle * ARCMIN_TO_RAD);
    let swath_m = ground_footprint_m(altitude_km, swath_angle * DEG_TO_RAD);

    let generated = bpp * (swath_m * v_ground) / (pixel_m * pixel_m);
    let required = generated * (duty / PERCENT) / (downlink_hours / HOURS_PER_DAY);
    Ok(required / rate)
}

/// [`required_data_rate_bps`] in dB·bit/s.
pub fn required_data_rate(
    payload: &PayloadParams,
    altitude_km: f64,
    code_rate: f64,
    body: &CelestialBody,
) -> LinkResult<f64> {
    to_db(required_data_rate_bps(payload, altitude_km, code_rate, body)?)
        .map_err(|e| e.with_quantity("downlink data rate"))
}
