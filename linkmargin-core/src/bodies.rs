//! Celestial body reference table.
//!
//! Nine mission targets with the three figures the link budget needs: the
//! gravitational parameter and mean radius (for the payload ground-track
//! velocity) and a reference distance. For the Moon the reference distance
//! is its mean distance to Earth; for every other body it is the mean
//! distance to the Sun (semi-major axis), which feeds the deep-space
//! Earth–Sun–target triangle.
//!
//! Values: NASA planetary fact sheets, km and km³/s².

use crate::{LinkError, LinkResult};
use std::fmt;
use std::str::FromStr;

/// Target body identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Physical data for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    /// Standard gravitational parameter μ (km³/s²).
    pub gravitational_parameter: f64,
    /// Mean radius (km).
    pub mean_radius: f64,
    /// Distance to Earth for the Moon, distance to the Sun otherwise (km).
    pub reference_distance: f64,
}

const CATALOG: [CelestialBody; 9] = [
    CelestialBody {
        name: "Mercury",
        gravitational_parameter: 22_032.09,
        mean_radius: 2_439.7,
        reference_distance: 57.909e6,
    },
    CelestialBody {
        name: "Venus",
        gravitational_parameter: 324_858.59,
        mean_radius: 6_051.8,
        reference_distance: 108.209e6,
    },
    CelestialBody {
        name: "Earth",
        gravitational_parameter: 398_600.4418,
        mean_radius: 6_371.0,
        reference_distance: 149.598e6,
    },
    CelestialBody {
        name: "Moon",
        gravitational_parameter: 4_902.8,
        mean_radius: 1_737.4,
        reference_distance: 384_400.0,
    },
    CelestialBody {
        name: "Mars",
        gravitational_parameter: 42_828.37,
        mean_radius: 3_389.5,
        reference_distance: 227.956e6,
    },
    CelestialBody {
        name: "Jupiter",
        gravitational_parameter: 126_686_534.0,
        mean_radius: 69_911.0,
        reference_distance: 778.479e6,
    },
    CelestialBody {
        name: "Saturn",
        gravitational_parameter: 37_931_187.0,
        mean_radius: 58_232.0,
        reference_distance: 1_432.041e6,
    },
    CelestialBody {
        name: "Uranus",
        gravitational_parameter: 5_793_939.0,
        mean_radius: 25_362.0,
        reference_distance: 2_867.043e6,
    },
    CelestialBody {
        name: "Neptune",
        gravitational_parameter: 6_836_529.0,
        mean_radius: 24_622.0,
        reference_distance: 4_514.953e6,
    },
];

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub fn data(&self) -> &'static CelestialBody {
        &CATALOG[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.data().name
    }

    /// Earth and Moon targets are close enough for the near-body slant range;
    /// everything else needs the deep-space geometry and an elongation angle.
    pub fn is_near_earth(&self) -> bool {
        matches!(self, Body::Earth | Body::Moon)
    }

    /// Case-insensitive catalog lookup.
    pub fn lookup(name: &str) -> LinkResult<Body> {
        let key = name.trim();
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| LinkError::unknown_key("celestial body", key))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::lookup(s)
    }
}

impl TryFrom<String> for Body {
    type Error = LinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Body::lookup(&value)
    }
}

impl From<Body> for String {
    fn from(body: Body) -> Self {
        body.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_enum() {
        for body in Body::ALL {
            assert_eq!(body.data().name, format!("{:?}", body));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Body::lookup("mars").unwrap(), Body::Mars);
        assert_eq!(" Neptune ".parse::<Body>().unwrap(), Body::Neptune);
    }

    #[test]
    fn unknown_body_is_unknown_key() {
        let err = Body::lookup("Pluto").unwrap_err();
        assert_eq!(err, LinkError::unknown_key("celestial body", "Pluto"));
    }

    #[test]
    fn only_earth_and_moon_are_near() {
        let near: Vec<Body> = Body::ALL.iter().copied().filter(Body::is_near_earth).collect();
        assert_eq!(near, vec![Body::Earth, Body::Moon]);
    }

    #[test]
    fn all_entries_positive() {
        for body in Body::ALL {
            let d = body.data();
            assert!(d.gravitational_parameter > 0.0);
            assert!(d.mean_radius > 0.0);
            assert!(d.reference_distance > 0.0);
        }
    }

    #[test]
    fn moon_reference_is_earth_distance() {
        assert_eq!(Body::Moon.data().reference_distance, 384_400.0);
        assert!(Body::Earth.data().reference_distance > 1.0e8);
    }
}
