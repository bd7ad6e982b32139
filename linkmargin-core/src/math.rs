/// Rounds half away from zero to `places` decimal places.
#[inline]
pub fn round_to_places(x: f64, places: i32) -> f64 {
    let scale = libm::pow(10.0, places as f64);
    libm::round(x * scale) / scale
}

/// Third side of a triangle from two sides and the included angle (radians).
#[inline]
pub fn law_of_cosines(a: f64, b: f64, included: f64) -> f64 {
    libm::sqrt(a * a + b * b - 2.0 * a * b * libm::cos(included))
}

/// Line-of-sight distance from a point at `altitude` above a sphere of
/// `radius` to a point on the sphere's horizon.
#[inline]
pub fn horizon_slant_range(altitude: f64, radius: f64) -> f64 {
    let r = altitude + radius;
    libm::sqrt(r * r - radius * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounding_keeps_requested_places() {
        assert_eq!(round_to_places(1.234_567_89, 5), 1.23457);
        assert_eq!(round_to_places(-1.234_564_9, 5), -1.23456);
        assert_eq!(round_to_places(2.0, 5), 2.0);
    }

    #[test]
    fn law_of_cosines_right_angle_is_pythagoras() {
        let c = law_of_cosines(3.0, 4.0, crate::constants::PI / 2.0);
        assert_relative_eq!(c, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn law_of_cosines_zero_angle_is_difference() {
        assert_relative_eq!(law_of_cosines(10.0, 4.0, 0.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn horizon_range_exceeds_altitude() {
        let s = horizon_slant_range(500.0, 6371.0);
        assert!(s > 500.0);
        assert_relative_eq!(s * s, 500.0 * (500.0 + 2.0 * 6371.0), max_relative = 1e-12);
    }
}
