/// Speed of light in m/s, rounded the way the link budget tables are calibrated.
pub const SPEED_OF_LIGHT_M_S: f64 = 3.0e8;

/// Boltzmann constant in J/K (≈ −228.6 dBW/K/Hz).
pub const BOLTZMANN_J_PER_K: f64 = 1.38e-23;

pub const HZ_PER_GHZ: f64 = 1.0e9;

pub const METERS_PER_KM: f64 = 1000.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const PERCENT: f64 = 100.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const ARCMIN_TO_RAD: f64 = 2.908882086657215961539535e-4;

/// Aperture efficiency assumed when the caller does not override it.
pub const DEFAULT_ANTENNA_EFFICIENCY: f64 = 0.55;

/// Ground-station pointing offset in degrees assumed when not overridden.
pub const DEFAULT_GROUND_POINTING_OFFSET_DEG: f64 = 0.05;

/// Empirical half-power beamwidth constant: θ½ [deg] = 21 / (f [GHz] · D [m]).
pub const HALF_POWER_BEAMWIDTH_CONSTANT: f64 = 21.0;

/// Pointing loss coefficient: L [dB] = 12 · (e / θ½)².
pub const POINTING_LOSS_COEFFICIENT: f64 = 12.0;

/// Decimal places kept in a reported link margin.
pub const MARGIN_DECIMALS: i32 = 5;

/// Required bit-error-rate exponent the coding table is calibrated for.
pub const CALIBRATED_BER_EXPONENT: i32 = -6;
