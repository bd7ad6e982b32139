use approx::assert_abs_diff_eq;
use linkmargin_core::path::{deep_space_loss, near_body_space_loss};
use linkmargin_core::units::to_db;
use linkmargin_core::{
    compute_link_budget, Antenna, Body, BudgetTerm, Coding, LinkError, LinkParameters,
    PayloadParams, Terminal,
};

fn imager() -> PayloadParams {
    PayloadParams {
        bits_per_pixel: 8.0,
        swath_angle_deg: 10.0,
        pixel_size_arcmin: 1.0,
        duty_cycle_percent: 50.0,
        downlink_hours_per_day: 2.0,
    }
}

/// X-band LEO imager: 20 W, 1 m dish on the spacecraft, 35 m ground dish.
fn leo_x_band() -> LinkParameters {
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
        payload: imager(),
        uplink_noise_temp_k: None,
        downlink_noise_temp_k: None,
    }
}

fn mars_orbiter(elongation_deg: Option<f64>) -> LinkParameters {
    LinkParameters {
        target: Body::Mars,
        orbit_altitude_km: 400.0,
        elongation_deg,
        ..leo_x_band()
    }
}

// --- Earth, near-body geometry ---

#[test]
fn earth_downlink_matches_hand_computed_reference() {
    let result = compute_link_budget(&leo_x_band()).unwrap();
    assert_abs_diff_eq!(result.downlink_snr_db(), 83.165_035_053_808_52, epsilon = 1e-9);
    assert_abs_diff_eq!(result.downlink_margin_db(), 72.66504, epsilon = 1e-12);
}

#[test]
fn earth_uplink_matches_hand_computed_reference() {
    let result = compute_link_budget(&leo_x_band()).unwrap();
    assert_abs_diff_eq!(result.uplink_snr_db(), 112.033_562_520_181_16, epsilon = 1e-9);
    assert_abs_diff_eq!(result.uplink_margin_db(), 101.53356, epsilon = 1e-12);
}

#[test]
fn earth_intermediate_terms() {
    let result = compute_link_budget(&leo_x_band()).unwrap();
    let down = &result.downlink;
    assert_abs_diff_eq!(down.term(BudgetTerm::SpaceLoss), -179.136_593_786_099_5, epsilon = 1e-9);
    assert_abs_diff_eq!(down.term(BudgetTerm::DataRate), 61.467_473_406_113_88, epsilon = 1e-9);
    assert_eq!(down.term(BudgetTerm::TransmitterPointingLoss), 0.0);
    assert_eq!(down.term(BudgetTerm::ReceiverPointingLoss), 0.0);
    assert_eq!(down.term(BudgetTerm::TransmitterLoss), 0.0);
    assert_eq!(down.term(BudgetTerm::SystemTemperature), to_db(1.0 / 135.0).unwrap());
    assert_eq!(down.term(BudgetTerm::Boltzmann), to_db(1.38e-23).unwrap());
}

#[test]
fn earth_space_loss_uses_near_body_formula() {
    let result = compute_link_budget(&leo_x_band()).unwrap();
    let near = near_body_space_loss(8.4, 500.0, 6_371.0).unwrap();
    assert_eq!(result.downlink.term(BudgetTerm::SpaceLoss), near);
    assert_eq!(result.uplink.term(BudgetTerm::SpaceLoss), near);
}

#[test]
fn moon_uses_earth_distance_as_altitude() {
    let params = LinkParameters {
        target: Body::Moon,
        orbit_altitude_km: 100.0,
        ..leo_x_band()
    };
    let result = compute_link_budget(&params).unwrap();
    let expected = near_body_space_loss(8.4, 384_400.0, 6_371.0).unwrap();
    assert_eq!(result.downlink.term(BudgetTerm::SpaceLoss), expected);
}

// --- Mars, deep-space geometry ---

#[test]
fn mars_selects_deep_space_loss() {
    let result = compute_link_budget(&mars_orbiter(Some(90.0))).unwrap();
    let deep = deep_space_loss(8.4, 149.598e6, 227.956e6, 90.0).unwrap();
    assert_eq!(result.downlink.term(BudgetTerm::SpaceLoss), deep);
    assert_abs_diff_eq!(deep, -279.639_787_913_293_3, epsilon = 1e-9);

    let near = near_body_space_loss(8.4, 400.0, 6_371.0).unwrap();
    assert!(result.downlink.term(BudgetTerm::SpaceLoss) < near - 90.0);
}

#[test]
fn mars_downlink_matches_hand_computed_reference() {
    let result = compute_link_budget(&mars_orbiter(Some(90.0))).unwrap();
    assert_abs_diff_eq!(result.downlink_snr_db(), -14.599_078_943_286_71, epsilon = 1e-9);
    assert_abs_diff_eq!(result.downlink_margin_db(), -25.09908, epsilon = 1e-12);
}

#[test]
fn mars_without_elongation_fails() {
    let err = compute_link_budget(&mars_orbiter(None)).unwrap_err();
    assert_eq!(err, LinkError::missing_field("elongation angle"));
}

#[test]
fn elongation_changes_only_space_loss() {
    let a = compute_link_budget(&mars_orbiter(Some(30.0))).unwrap();
    let b = compute_link_budget(&mars_orbiter(Some(150.0))).unwrap();
    assert!(b.downlink.term(BudgetTerm::SpaceLoss) < a.downlink.term(BudgetTerm::SpaceLoss));
    assert_eq!(
        a.downlink.term(BudgetTerm::DataRate),
        b.downlink.term(BudgetTerm::DataRate)
    );
}

// --- General properties ---

#[test]
fn identical_inputs_give_identical_results() {
    let params = mars_orbiter(Some(42.0));
    let first = compute_link_budget(&params).unwrap();
    let second = compute_link_budget(&params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.uplink.snr_db.to_bits(), second.uplink.snr_db.to_bits());
    assert_eq!(first.downlink.snr_db.to_bits(), second.downlink.snr_db.to_bits());
}

#[test]
fn better_coding_raises_margin() {
    let uncoded = compute_link_budget(&leo_x_band()).unwrap();
    let turbo = compute_link_budget(&LinkParameters {
        coding: Coding::TurboSixth,
        ..leo_x_band()
    })
    .unwrap();
    // rate 1/6 costs 7.8 dB of data rate but needs 10.6 dB less Eb/No
    assert!(turbo.downlink_margin_db() > uncoded.downlink_margin_db());
    assert!(turbo.downlink_snr_db() < uncoded.downlink_snr_db());
}

#[test]
fn every_body_computes_with_elongation() {
    for body in Body::ALL {
        let params = LinkParameters {
            target: body,
            elongation_deg: Some(60.0),
            ..leo_x_band()
        };
        let result = compute_link_budget(&params).unwrap();
        assert!(result.uplink_snr_db().is_finite(), "{}", body);
        assert!(result.downlink_snr_db().is_finite(), "{}", body);
    }
}

#[test]
fn non_positive_loss_factor_fails() {
    let params = LinkParameters {
        rx_loss_factor: 0.0,
        ..leo_x_band()
    };
    let err = compute_link_budget(&params).unwrap_err();
    assert_eq!(err.subject(), "receiver loss factor");
}

#[test]
fn zero_uplink_rate_fails() {
    let params = LinkParameters {
        uplink_data_rate_bps: 0.0,
        ..leo_x_band()
    };
    let err = compute_link_budget(&params).unwrap_err();
    assert_eq!(err.subject(), "uplink data rate");
}
