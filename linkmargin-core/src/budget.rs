//! Uplink and downlink link budgets and margins.
//!
//! One call to [`compute_link_budget`] evaluates both directions from a single
//! [`LinkParameters`] value. Each direction is the decibel sum
//!
//! ```text
//! SNR = P_tx + L_tx + G_tx − L_point,tx + L_space − L_point,rx + L_rx + G_rx
//!       − R_data − k + 1/T_sys
//! margin = round(SNR − Eb/N0_required, 5)
//! ```
//!
//! with the ground station transmitting on the uplink (at the downlink
//! frequency times the turn-around ratio) and the spacecraft transmitting on
//! the downlink. The uplink data-rate term is the commanded bit rate over the
//! code rate; the downlink term comes from the imaging payload model.
//!
//! Every intermediate term is kept in [`DirectionBudget::terms`], keyed by
//! [`BudgetTerm`] in budget order, so callers can show or export the full
//! breakdown.

use crate::antenna::{eirp, Antenna};
use crate::bodies::Body;
use crate::coding::Coding;
use crate::constants::{BOLTZMANN_J_PER_K, MARGIN_DECIMALS};
use crate::math::round_to_places;
use crate::noise::{system_temperature, Direction};
use crate::path::{space_loss, Geometry};
use crate::payload::{required_data_rate, PayloadParams};
use crate::units::{require_positive, to_db, uplink_frequency_ghz};
use crate::LinkResult;
use std::collections::BTreeMap;
use std::fmt;

/// Transmitter power and antenna for one end of the link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Terminal {
    /// Transmitter output power (W).
    pub power_w: f64,
    pub antenna: Antenna,
}

/// Complete input for one link budget computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkParameters {
    pub target: Body,
    pub coding: Coding,
    pub spacecraft: Terminal,
    pub ground: Terminal,
    /// Linear transmitter loss factor (> 0, ≤ 1 for a real loss).
    pub tx_loss_factor: f64,
    /// Linear receiver loss factor.
    pub rx_loss_factor: f64,
    pub downlink_freq_ghz: f64,
    /// Uplink/downlink carrier ratio of the transponder.
    pub turn_around_ratio: f64,
    /// Orbit altitude above the target body (km). Also the Earth slant-range altitude.
    pub orbit_altitude_km: f64,
    /// Sun–Earth–target angle (deg); required for targets beyond the Moon.
    pub elongation_deg: Option<f64>,
    pub uplink_data_rate_bps: f64,
    pub payload: PayloadParams,
    /// Overrides the band lookup when set (K).
    pub uplink_noise_temp_k: Option<f64>,
    /// Overrides the band lookup when set (K).
    pub downlink_noise_temp_k: Option<f64>,
}

impl LinkParameters {
    pub fn uplink_freq_ghz(&self) -> LinkResult<f64> {
        require_positive("downlink frequency", self.downlink_freq_ghz)?;
        require_positive("turn-around ratio", self.turn_around_ratio)?;
        uplink_frequency_ghz(Some(self.downlink_freq_ghz), Some(self.turn_around_ratio))
            .require("uplink frequency")
    }

    pub fn geometry(&self) -> LinkResult<Geometry> {
        Geometry::resolve(self.target, Some(self.orbit_altitude_km), self.elongation_deg)
    }
}

/// Named terms of the budget equation, in summation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BudgetTerm {
    TransmitterPower,
    TransmitterLoss,
    TransmitterGain,
    TransmitterPointingLoss,
    SpaceLoss,
    ReceiverPointingLoss,
    ReceiverLoss,
    ReceiverGain,
    DataRate,
    Boltzmann,
    SystemTemperature,
}

impl BudgetTerm {
    pub const ALL: [BudgetTerm; 11] = [
        BudgetTerm::TransmitterPower,
        BudgetTerm::TransmitterLoss,
        BudgetTerm::TransmitterGain,
        BudgetTerm::TransmitterPointingLoss,
        BudgetTerm::SpaceLoss,
        BudgetTerm::ReceiverPointingLoss,
        BudgetTerm::ReceiverLoss,
        BudgetTerm::ReceiverGain,
        BudgetTerm::DataRate,
        BudgetTerm::Boltzmann,
        BudgetTerm::SystemTemperature,
    ];

    /// +1 if the term is added to the SNR, −1 if subtracted.
    pub fn sign(&self) -> f64 {
        match self {
            BudgetTerm::TransmitterPointingLoss
            | BudgetTerm::ReceiverPointingLoss
            | BudgetTerm::DataRate
            | BudgetTerm::Boltzmann => -1.0,
            _ => 1.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BudgetTerm::TransmitterPower => "Transmitter power",
            BudgetTerm::TransmitterLoss => "Transmitter loss factor",
            BudgetTerm::TransmitterGain => "Transmitter antenna gain",
            BudgetTerm::TransmitterPointingLoss => "Transmitter pointing loss",
            BudgetTerm::SpaceLoss => "Free-space loss",
            BudgetTerm::ReceiverPointingLoss => "Receiver pointing loss",
            BudgetTerm::ReceiverLoss => "Receiver loss factor",
            BudgetTerm::ReceiverGain => "Receiver antenna gain",
            BudgetTerm::DataRate => "Required data rate",
            BudgetTerm::Boltzmann => "Boltzmann constant",
            BudgetTerm::SystemTemperature => "Inverse system noise temperature",
        }
    }

    /// Short symbol, e.g. `G_GS_TX` on the uplink or `G_SC_TX` on the downlink.
    pub fn symbol(&self, direction: Direction) -> String {
        let tx = match direction {
            Direction::Uplink => "GS",
            Direction::Downlink => "SC",
        };
        match self {
            BudgetTerm::TransmitterPower => format!("P_{}", tx),
            BudgetTerm::TransmitterLoss => format!("L_{}_TX", tx),
            BudgetTerm::TransmitterGain => format!("G_{}_TX", tx),
            BudgetTerm::TransmitterPointingLoss => format!("L_{}_pointing_out", tx),
            BudgetTerm::SpaceLoss => format!("L_{}_space", tx),
            BudgetTerm::ReceiverPointingLoss => format!("L_{}_pointing_in", tx),
            BudgetTerm::ReceiverLoss => format!("L_{}_RX", tx),
            BudgetTerm::ReceiverGain => format!("G_{}_RX", tx),
            BudgetTerm::DataRate => format!("L_{}_DR", tx),
            BudgetTerm::Boltzmann => "L_boltzmann".to_string(),
            BudgetTerm::SystemTemperature => format!("L_{}_sys_temp", tx),
        }
    }
}

impl fmt::Display for BudgetTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Budget for one direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DirectionBudget {
    pub direction: Direction,
    pub frequency_ghz: f64,
    /// Transmitter power plus loss plus antenna gain (dBW).
    pub eirp_db: f64,
    /// Unsigned term values in dB; apply [`BudgetTerm::sign`] to sum them.
    pub terms: BTreeMap<BudgetTerm, f64>,
    pub snr_db: f64,
    pub required_eb_no_db: f64,
    /// SNR minus required Eb/N0, rounded to five decimals.
    pub margin_db: f64,
}

impl DirectionBudget {
    pub fn term(&self, term: BudgetTerm) -> f64 {
        self.terms.get(&term).copied().unwrap_or(0.0)
    }

    pub fn has_margin(&self) -> bool {
        self.margin_db >= 0.0
    }
}

/// Result of [`compute_link_budget`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinkBudgetResult {
    pub target: Body,
    pub coding: Coding,
    pub uplink: DirectionBudget,
    pub downlink: DirectionBudget,
}

impl LinkBudgetResult {
    pub fn direction(&self, direction: Direction) -> &DirectionBudget {
        match direction {
            Direction::Uplink => &self.uplink,
            Direction::Downlink => &self.downlink,
        }
    }

    pub fn uplink_snr_db(&self) -> f64 {
        self.uplink.snr_db
    }

    pub fn uplink_margin_db(&self) -> f64 {
        self.uplink.margin_db
    }

    pub fn downlink_snr_db(&self) -> f64 {
        self.downlink.snr_db
    }

    pub fn downlink_margin_db(&self) -> f64 {
        self.downlink.margin_db
    }
}

struct End<'a> {
    owner: &'static str,
    terminal: &'a Terminal,
}

/// Computes uplink and downlink SNR and margin.
///
/// Fails on the first invalid or missing input; no partial result is returned.
pub fn compute_link_budget(params: &LinkParameters) -> LinkResult<LinkBudgetResult> {
    let geometry = params.geometry()?;
    let coding = params.coding.scheme();
    let code_rate = coding.code_rate;

    let uplink_freq = params.uplink_freq_ghz()?;
    let downlink_freq = params.downlink_freq_ghz;

    let ground = End {
        owner: "ground station",
        terminal: &params.ground,
    };
    let spacecraft = End {
        owner: "spacecraft",
        terminal: &params.spacecraft,
    };

    let uplink_rate = require_positive("uplink data rate", params.uplink_data_rate_bps)?;
    let uplink_rate_db = to_db(uplink_rate / code_rate).map_err(|e| e.with_quantity("uplink data rate"))?;
    let uplink_temp = noise_temperature(params.uplink_noise_temp_k, uplink_freq, Direction::Uplink)?;
    let uplink = direction_budget(
        params,
        Direction::Uplink,
        uplink_freq,
        &ground,
        &spacecraft,
        &geometry,
        uplink_rate_db,
        uplink_temp,
    )?;

    let downlink_rate_db = required_data_rate(
        &params.payload,
        params.orbit_altitude_km,
        code_rate,
        params.target.data(),
    )?;
    let downlink_temp =
        noise_temperature(params.downlink_noise_temp_k, downlink_freq, Direction::Downlink)?;
    let downlink = direction_budget(
        params,
        Direction::Downlink,
        downlink_freq,
        &spacecraft,
        &ground,
        &geometry,
        downlink_rate_db,
        downlink_temp,
    )?;

    Ok(LinkBudgetResult {
        target: params.target,
        coding: params.coding,
        uplink,
        downlink,
    })
}

fn noise_temperature(overridden: Option<f64>, freq_ghz: f64, direction: Direction) -> LinkResult<f64> {
    let field = format!("{} system noise temperature", direction);
    let t = match overridden {
        Some(t) => t,
        None => system_temperature(Some(freq_ghz), direction).require(&field)?,
    };
    require_positive(&field, t)
}

#[allow(clippy::too_many_arguments)]
fn direction_budget(
    params: &LinkParameters,
    direction: Direction,
    freq_ghz: f64,
    tx: &End<'_>,
    rx: &End<'_>,
    geometry: &Geometry,
    data_rate_db: f64,
    system_temp_k: f64,
) -> LinkResult<DirectionBudget> {
    let mut terms = BTreeMap::new();

    let tx_loss =
        to_db(params.tx_loss_factor).map_err(|e| e.with_quantity("transmitter loss factor"))?;
    let tx_gain = tx.terminal.antenna.gain_db(freq_ghz).map_err(|e| prefixed(e, tx.owner))?;
    let eirp_db = eirp(tx.terminal.power_w, tx_loss, tx_gain).map_err(|e| prefixed(e, tx.owner))?;
    terms.insert(BudgetTerm::TransmitterPower, to_db(tx.terminal.power_w)?);
    terms.insert(BudgetTerm::TransmitterLoss, tx_loss);
    terms.insert(BudgetTerm::TransmitterGain, tx_gain);
    terms.insert(
        BudgetTerm::TransmitterPointingLoss,
        tx.terminal
            .antenna
            .pointing_loss_db(freq_ghz)
            .map_err(|e| prefixed(e, tx.owner))?,
    );
    terms.insert(BudgetTerm::SpaceLoss, space_loss(freq_ghz, geometry)?);
    terms.insert(
        BudgetTerm::ReceiverPointingLoss,
        rx.terminal
            .antenna
            .pointing_loss_db(freq_ghz)
            .map_err(|e| prefixed(e, rx.owner))?,
    );
    terms.insert(
        BudgetTerm::ReceiverLoss,
        to_db(params.rx_loss_factor).map_err(|e| e.with_quantity("receiver loss factor"))?,
    );
    terms.insert(
        BudgetTerm::ReceiverGain,
        rx.terminal.antenna.gain_db(freq_ghz).map_err(|e| prefixed(e, rx.owner))?,
    );
    terms.insert(BudgetTerm::DataRate, data_rate_db);
    terms.insert(BudgetTerm::Boltzmann, to_db(BOLTZMANN_J_PER_K)?);
    terms.insert(BudgetTerm::SystemTemperature, to_db(1.0 / system_temp_k)?);

    // EIRP already folds in the first three terms
    let snr_db = terms
        .iter()
        .filter(|(term, _)| **term > BudgetTerm::TransmitterGain)
        .fold(eirp_db, |acc, (term, value)| acc + term.sign() * value);
    let required_eb_no_db = params.coding.required_eb_no();

    Ok(DirectionBudget {
        direction,
        frequency_ghz: freq_ghz,
        eirp_db,
        terms,
        snr_db,
        required_eb_no_db,
        margin_db: round_to_places(snr_db - required_eb_no_db, MARGIN_DECIMALS),
    })
}

fn prefixed(err: crate::LinkError, owner: &str) -> crate::LinkError {
    let quantity = format!("{} {}", owner, err.subject());
    err.with_quantity(&quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinkError;
    use approx::assert_relative_eq;

    fn earth_params() -> LinkParameters {
        LinkParameters {
            target: Body::Earth,
            coding: Coding::Uncoded,
            spacecraft: Terminal {
                power_w: 20.0,
                antenna: Antenna::new(1.0),
            },
            ground: Terminal {
                power_w: 100.0,
                antenna: Antenna::new(35.0),
            },
            tx_loss_factor: 1.0,
            rx_loss_factor: 1.0,
            downlink_freq_ghz: 8.4,
            turn_around_ratio: 1.0,
            orbit_altitude_km: 500.0,
            elongation_deg: None,
            uplink_data_rate_bps: 2_000.0,
            payload: PayloadParams {
                bits_per_pixel: 8.0,
                swath_angle_deg: 10.0,
                pixel_size_arcmin: 1.0,
                duty_cycle_percent: 50.0,
                downlink_hours_per_day: 2.0,
            },
            uplink_noise_temp_k: None,
            downlink_noise_temp_k: None,
        }
    }

    #[test]
    fn snr_is_signed_sum_of_terms() {
        let result = compute_link_budget(&earth_params()).unwrap();
        for budget in [&result.uplink, &result.downlink] {
            let manual = budget.term(BudgetTerm::TransmitterPower)
                + budget.term(BudgetTerm::TransmitterLoss)
                + budget.term(BudgetTerm::TransmitterGain)
                - budget.term(BudgetTerm::TransmitterPointingLoss)
                + budget.term(BudgetTerm::SpaceLoss)
                - budget.term(BudgetTerm::ReceiverPointingLoss)
                + budget.term(BudgetTerm::ReceiverLoss)
                + budget.term(BudgetTerm::ReceiverGain)
                - budget.term(BudgetTerm::DataRate)
                - budget.term(BudgetTerm::Boltzmann)
                + budget.term(BudgetTerm::SystemTemperature);
            assert_eq!(budget.snr_db, manual);
            assert_eq!(budget.terms.len(), BudgetTerm::ALL.len());
        }
    }

    #[test]
    fn eirp_opens_each_direction() {
        let result = compute_link_budget(&earth_params()).unwrap();
        let up_gain = Antenna::new(35.0).gain_db(8.4).unwrap();
        assert_eq!(result.uplink.eirp_db, eirp(100.0, 0.0, up_gain).unwrap());
        for budget in [&result.uplink, &result.downlink] {
            assert_relative_eq!(
                budget.eirp_db,
                budget.term(BudgetTerm::TransmitterPower)
                    + budget.term(BudgetTerm::TransmitterLoss)
                    + budget.term(BudgetTerm::TransmitterGain),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn roles_swap_between_directions() {
        let result = compute_link_budget(&earth_params()).unwrap();
        assert_eq!(result.uplink.term(BudgetTerm::TransmitterPower), to_db(100.0).unwrap());
        assert_eq!(result.downlink.term(BudgetTerm::TransmitterPower), to_db(20.0).unwrap());
        // turn-around ratio 1 puts both directions on the same carrier
        assert_relative_eq!(
            result.uplink.term(BudgetTerm::TransmitterGain),
            result.downlink.term(BudgetTerm::ReceiverGain),
            epsilon = 1e-12
        );
    }

    #[test]
    fn uplink_frequency_follows_turn_around_ratio() {
        let mut params = earth_params();
        params.turn_around_ratio = 749.0 / 880.0;
        let result = compute_link_budget(&params).unwrap();
        assert_relative_eq!(result.uplink.frequency_ghz, 8.4 * 749.0 / 880.0, epsilon = 1e-12);
        assert_eq!(result.downlink.frequency_ghz, 8.4);
    }

    #[test]
    fn default_noise_temperatures_come_from_band_table() {
        let result = compute_link_budget(&earth_params()).unwrap();
        assert_relative_eq!(
            result.uplink.term(BudgetTerm::SystemTemperature),
            to_db(1.0 / 614.0).unwrap()
        );
        assert_relative_eq!(
            result.downlink.term(BudgetTerm::SystemTemperature),
            to_db(1.0 / 135.0).unwrap()
        );
    }

    #[test]
    fn override_noise_temperature() {
        let mut params = earth_params();
        params.downlink_noise_temp_k = Some(50.0);
        let base = compute_link_budget(&earth_params()).unwrap();
        let result = compute_link_budget(&params).unwrap();
        assert_relative_eq!(
            result.downlink.snr_db - base.downlink.snr_db,
            10.0 * libm::log10(135.0 / 50.0),
            epsilon = 1e-9
        );
        assert_eq!(result.uplink, base.uplink);
    }

    #[test]
    fn uplink_rate_term_includes_code_rate() {
        let mut params = earth_params();
        params.coding = Coding::TurboHalf;
        let result = compute_link_budget(&params).unwrap();
        assert_relative_eq!(result.uplink.term(BudgetTerm::DataRate), to_db(4_000.0).unwrap());
        assert_eq!(result.uplink.required_eb_no_db, 1.0);
    }

    #[test]
    fn margin_is_rounded_to_five_places() {
        let result = compute_link_budget(&earth_params()).unwrap();
        for budget in [&result.uplink, &result.downlink] {
            let expected = round_to_places(budget.snr_db - 10.5, 5);
            assert_eq!(budget.margin_db, expected);
            assert!((budget.margin_db - (budget.snr_db - 10.5)).abs() <= 5e-6);
        }
    }

    #[test]
    fn zero_power_names_the_field() {
        let mut params = earth_params();
        params.spacecraft.power_w = 0.0;
        let err = compute_link_budget(&params).unwrap_err();
        assert_eq!(err.subject(), "spacecraft transmitter power");
    }

    #[test]
    fn zero_ground_diameter_names_the_antenna() {
        let mut params = earth_params();
        params.ground.antenna.diameter_m = 0.0;
        let err = compute_link_budget(&params).unwrap_err();
        assert_eq!(err.subject(), "ground station antenna diameter");
    }

    #[test]
    fn low_frequency_without_override_is_missing_temperature() {
        let mut params = earth_params();
        params.downlink_freq_ghz = 0.15;
        let err = compute_link_budget(&params).unwrap_err();
        assert_eq!(err, LinkError::missing_field("uplink system noise temperature"));
        params.uplink_noise_temp_k = Some(600.0);
        let err = compute_link_budget(&params).unwrap_err();
        assert_eq!(err, LinkError::missing_field("downlink system noise temperature"));
        params.downlink_noise_temp_k = Some(300.0);
        assert!(compute_link_budget(&params).is_ok());
    }

    #[test]
    fn pointing_offsets_reduce_snr() {
        let base = compute_link_budget(&earth_params()).unwrap();
        let mut params = earth_params();
        params.ground.antenna.pointing_offset_deg = 0.05;
        let result = compute_link_budget(&params).unwrap();
        let loss = crate::antenna::pointing_loss(8.4, 35.0, 0.05).unwrap();
        assert!(loss > 0.0);
        assert_relative_eq!(base.downlink.snr_db - result.downlink.snr_db, loss, epsilon = 1e-9);
        assert_relative_eq!(base.uplink.snr_db - result.uplink.snr_db, loss, epsilon = 1e-9);
    }

    #[test]
    fn symbols_follow_transmitter() {
        assert_eq!(BudgetTerm::TransmitterGain.symbol(Direction::Uplink), "G_GS_TX");
        assert_eq!(BudgetTerm::TransmitterGain.symbol(Direction::Downlink), "G_SC_TX");
        assert_eq!(BudgetTerm::Boltzmann.symbol(Direction::Downlink), "L_boltzmann");
    }

    #[test]
    fn term_order_is_budget_order() {
        let result = compute_link_budget(&earth_params()).unwrap();
        let keys: Vec<BudgetTerm> = result.downlink.terms.keys().copied().collect();
        assert_eq!(keys, BudgetTerm::ALL.to_vec());
    }
}
