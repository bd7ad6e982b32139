//! Satellite link budget and link margin computation.
//!
//! Given transmitter/receiver hardware, the target body and a channel coding
//! scheme, computes uplink and downlink SNR and the margin against the
//! scheme's required Eb/N0. The whole computation is a closed-form pipeline
//! in decibels with no I/O or shared state; identical inputs always give
//! bit-identical results.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`units`] | [`to_db`](units::to_db), wavelength, beamwidth, uplink frequency, the [`Derived`] soft result |
//! | [`bodies`] | Celestial body catalog ([`Body`], [`CelestialBody`]) |
//! | [`coding`] | Channel coding catalog ([`Coding`], [`CodingScheme`]) |
//! | [`antenna`] | Antenna gain, pointing loss, EIRP |
//! | [`path`] | Near-body and deep-space free-space loss, [`Geometry`] |
//! | [`payload`] | Imaging payload downlink data rate |
//! | [`noise`] | System noise temperature band lookup |
//! | [`budget`] | [`compute_link_budget`] and its input/output types |
//! | [`export`] | Paired uplink/downlink rows and CSV rendering |
//!
//! # Quick Start
//!
//! ```
//! use linkmargin_core::{
//!     compute_link_budget, Antenna, Body, Coding, LinkParameters, PayloadParams, Terminal,
//! };
//!
//! let params = LinkParameters {
//!     target: Body::Earth,
//!     coding: Coding::Uncoded,
//!     spacecraft: Terminal { power_w: 20.0, antenna: Antenna::new(1.0) },
//!     ground: Terminal { power_w: 100.0, antenna: Antenna::new(35.0) },
//!     tx_loss_factor: 1.0,
//!     rx_loss_factor: 1.0,
//!     downlink_freq_ghz: 8.4,
//!     turn_around_ratio: 1.0,
//!     orbit_altitude_km: 500.0,
//!     elongation_deg: None,
//!     uplink_data_rate_bps: 2_000.0,
//!     payload: PayloadParams {
//!         bits_per_pixel: 8.0,
//!         swath_angle_deg: 10.0,
//!         pixel_size_arcmin: 1.0,
//!         duty_cycle_percent: 50.0,
//!         downlink_hours_per_day: 2.0,
//!     },
//!     uplink_noise_temp_k: None,
//!     downlink_noise_temp_k: None,
//! };
//!
//! let result = compute_link_budget(&params)?;
//! println!("uplink margin {:.2} dB", result.uplink_margin_db());
//! println!("downlink margin {:.2} dB", result.downlink_margin_db());
//! # Ok::<(), linkmargin_core::LinkError>(())
//! ```
//!
//! # Features
//!
//! - **`serde`**: `Serialize`/`Deserialize` for the parameter types and
//!   `Serialize` for results. Catalog enums serialize by display name.

pub mod antenna;
pub mod bodies;
pub mod budget;
pub mod coding;
pub mod constants;
pub mod errors;
pub mod export;
pub mod math;
pub mod noise;
pub mod path;
pub mod payload;
pub mod units;

pub use antenna::Antenna;
pub use bodies::{Body, CelestialBody};
pub use budget::{
    compute_link_budget, BudgetTerm, DirectionBudget, LinkBudgetResult, LinkParameters, Terminal,
};
pub use coding::{Coding, CodingScheme};
pub use errors::{DomainErrorKind, LinkError, LinkResult};
pub use noise::Direction;
pub use path::Geometry;
pub use payload::PayloadParams;
pub use units::Derived;
