//! Free-space path loss and link geometry.
//!
//! The target body is resolved once into a [`Geometry`], and the space loss
//! for either direction is evaluated from that value:
//!
//! | Target | Variant | Slant range |
//! |--------|---------|-------------|
//! | Earth | [`Geometry::NearBody`] | horizon slant range from orbit altitude |
//! | Moon | [`Geometry::NearBody`] | horizon slant range using the Earth–Moon distance as altitude |
//! | anything else | [`Geometry::DeepSpace`] | law of cosines in the Earth–Sun–target triangle |
//!
//! The near-body range is measured from a ground station on Earth's surface
//! to a spacecraft sitting on its horizon, the longest line of sight for that
//! altitude. Space loss is returned as a negative number of decibels that the
//! budget adds.

use crate::bodies::Body;
use crate::constants::{DEG_TO_RAD, METERS_PER_KM, PI};
use crate::math::{horizon_slant_range, law_of_cosines};
use crate::units::{require_positive, to_db, wavelength_m};
use crate::{DomainErrorKind, LinkError, LinkResult};

/// Transmitter–receiver geometry, resolved once per computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    NearBody {
        /// Spacecraft height above the ground station's body (km).
        altitude_km: f64,
        /// Radius of the body the ground station sits on (km).
        body_radius_km: f64,
    },
    DeepSpace {
        earth_sun_km: f64,
        target_sun_km: f64,
        elongation_deg: f64,
    },
}

impl Geometry {
    /// Picks the geometry for `target`.
    ///
    /// `orbit_altitude_km` is only read for Earth; `elongation_deg` is
    /// required for every deep-space target and ignored otherwise.
    pub fn resolve(
        target: Body,
        orbit_altitude_km: Option<f64>,
        elongation_deg: Option<f64>,
    ) -> LinkResult<Geometry> {
        let earth = Body::Earth.data();
        match target {
            Body::Earth => Ok(Geometry::NearBody {
                altitude_km: orbit_altitude_km
                    .ok_or_else(|| LinkError::missing_field("orbit altitude"))?,
                body_radius_km: earth.mean_radius,
            }),
            Body::Moon => Ok(Geometry::NearBody {
                altitude_km: Body::Moon.data().reference_distance,
                body_radius_km: earth.mean_radius,
            }),
            deep => Ok(Geometry::DeepSpace {
                earth_sun_km: earth.reference_distance,
                target_sun_km: deep.data().reference_distance,
                elongation_deg: elongation_deg
                    .ok_or_else(|| LinkError::missing_field("elongation angle"))?,
            }),
        }
    }

    pub fn is_deep_space(&self) -> bool {
        matches!(self, Geometry::DeepSpace { .. })
    }

    /// Transmitter-to-receiver distance in meters.
    pub fn slant_range_m(&self) -> LinkResult<f64> {
        let range_km = match *self {
            Geometry::NearBody {
                altitude_km,
                body_radius_km,
            } => {
                let h = require_positive("orbit altitude", altitude_km)?;
                let r = require_positive("body radius", body_radius_km)?;
                horizon_slant_range(h, r)
            }
            Geometry::DeepSpace {
                earth_sun_km,
                target_sun_km,
                elongation_deg,
            } => {
                let a = require_positive("Earth-Sun distance", earth_sun_km)?;
                let b = require_positive("target-Sun distance", target_sun_km)?;
                if !elongation_deg.is_finite() {
                    return Err(LinkError::domain(
                        "elongation angle",
                        DomainErrorKind::NotFinite,
                        &format!("{} is not finite", elongation_deg),
                    ));
                }
                law_of_cosines(a, b, elongation_deg * DEG_TO_RAD)
            }
        };
        if range_km <= 0.0 || !range_km.is_finite() {
            return Err(LinkError::domain(
                "slant range",
                DomainErrorKind::DivisionByZero,
                "transmitter and receiver coincide",
            ));
        }
        Ok(range_km * METERS_PER_KM)
    }
}

/// Free-space loss `(λ / 4πS)²` in dB for a range `slant_range_m`.
pub fn free_space_loss(freq_ghz: f64, slant_range_m: f64) -> LinkResult<f64> {
    let wavelength = wavelength_m(freq_ghz)?;
    let s = require_positive("slant range", slant_range_m)?;
    let ratio = wavelength / (4.0 * PI * s);
    to_db(ratio * ratio)
}

/// Space loss for a resolved geometry.
pub fn space_loss(freq_ghz: f64, geometry: &Geometry) -> LinkResult<f64> {
    free_space_loss(freq_ghz, geometry.slant_range_m()?)
}

/// Near-body space loss for a spacecraft at `altitude_km` above a body of `body_radius_km`.
pub fn near_body_space_loss(freq_ghz: f64, altitude_km: f64, body_radius_km: f64) -> LinkResult<f64> {
    space_loss(
        freq_ghz,
        &Geometry::NearBody {
            altitude_km,
            body_radius_km,
        },
    )
}

/// Deep-space loss across the Earth–Sun–target triangle.
pub fn deep_space_loss(
    freq_ghz: f64,
    earth_sun_km: f64,
    target_sun_km: f64,
    elongation_deg: f64,
) -> LinkResult<f64> {
    space_loss(
        freq_ghz,
        &Geometry::DeepSpace {
            earth_sun_km,
            target_sun_km,
            elongation_deg,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn earth_resolves_to_near_body_with_orbit_altitude() {
        let g = Geometry::resolve(Body::Earth, Some(500.0), None).unwrap();
        assert_eq!(
            g,
            Geometry::NearBody {
                altitude_km: 500.0,
                body_radius_km: 6_371.0
            }
        );
    }

    #[test]
    fn earth_without_altitude_is_missing_field() {
        let err = Geometry::resolve(Body::Earth, None, None).unwrap_err();
        assert_eq!(err, LinkError::missing_field("orbit altitude"));
    }

    #[test]
    fn moon_uses_earth_distance_and_ignores_elongation() {
        let g = Geometry::resolve(Body::Moon, Some(100.0), Some(45.0)).unwrap();
        assert_eq!(
            g,
            Geometry::NearBody {
                altitude_km: 384_400.0,
                body_radius_km: 6_371.0
            }
        );
    }

    #[test]
    fn planets_need_elongation() {
        for body in Body::ALL.iter().filter(|b| !b.is_near_earth()) {
            let err = Geometry::resolve(*body, Some(400.0), None).unwrap_err();
            assert_eq!(err, LinkError::missing_field("elongation angle"));
            assert!(Geometry::resolve(*body, None, Some(30.0)).unwrap().is_deep_space());
        }
    }

    #[test]
    fn near_body_loss_matches_formula() {
        let s = libm::sqrt((500.0_f64 + 6371.0).powi(2) - 6371.0_f64.powi(2)) * 1000.0;
        let lambda = 3.0e8 / 8.4e9;
        let expected = 10.0 * libm::log10((lambda / (4.0 * PI * s)).powi(2));
        assert_relative_eq!(
            near_body_space_loss(8.4, 500.0, 6371.0).unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn near_body_zero_altitude_fails() {
        assert!(near_body_space_loss(8.4, 0.0, 6371.0).is_err());
        assert!(near_body_space_loss(8.4, -10.0, 6371.0).is_err());
    }

    #[test]
    fn deep_space_zero_elongation_is_distance_difference() {
        let g = Geometry::DeepSpace {
            earth_sun_km: 149.598e6,
            target_sun_km: 227.956e6,
            elongation_deg: 0.0,
        };
        assert_relative_eq!(
            g.slant_range_m().unwrap(),
            (227.956e6 - 149.598e6) * 1000.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn deep_space_right_angle_is_pythagoras() {
        let g = Geometry::DeepSpace {
            earth_sun_km: 3.0e6,
            target_sun_km: 4.0e6,
            elongation_deg: 90.0,
        };
        assert_relative_eq!(g.slant_range_m().unwrap(), 5.0e9, max_relative = 1e-12);
    }

    #[test]
    fn deep_space_coincident_bodies_fail() {
        let err = deep_space_loss(8.4, 1.0e8, 1.0e8, 0.0).unwrap_err();
        assert!(matches!(err, LinkError::Domain { .. }));
    }

    #[test]
    fn loss_grows_with_frequency_and_distance() {
        let near = near_body_space_loss(2.0, 500.0, 6371.0).unwrap();
        let far = near_body_space_loss(2.0, 36_000.0, 6371.0).unwrap();
        let higher = near_body_space_loss(8.0, 500.0, 6371.0).unwrap();
        assert!(far < near);
        assert!(higher < near);
        assert_relative_eq!(near - higher, 20.0 * libm::log10(4.0), epsilon = 1e-9);
    }
}
