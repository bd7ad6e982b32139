//! The editable parameter form behind the shell.
//!
//! Entries are kept as typed, possibly incomplete. Five fields carry an
//! override toggle: while it is off the field shows its default (0.55
//! efficiencies, 0.05° ground pointing offset, band-table noise temperatures
//! at the current frequencies) and refuses edits. The elongation field is
//! only open for deep-space targets.
//!
//! [`ParameterForm::resolve`] turns the form into a complete
//! [`LinkParameters`] or fails naming the first field still missing.

use crate::error::{Error, Result};
use linkmargin_core::constants::{
    CALIBRATED_BER_EXPONENT, DEFAULT_ANTENNA_EFFICIENCY, DEFAULT_GROUND_POINTING_OFFSET_DEG,
};
use linkmargin_core::noise::system_temperature;
use linkmargin_core::units::{uplink_frequency_ghz, Derived};
use linkmargin_core::{
    Antenna, Body, Coding, Direction, LinkError, LinkParameters, PayloadParams, Terminal,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SpacecraftPower,
    SpacecraftDiameter,
    SpacecraftEfficiency,
    SpacecraftPointing,
    GroundPower,
    GroundDiameter,
    GroundEfficiency,
    GroundPointing,
    TxLoss,
    RxLoss,
    DownlinkFreq,
    TurnAroundRatio,
    Altitude,
    Elongation,
    UplinkRate,
    BitsPerPixel,
    SwathAngle,
    PixelSize,
    DutyCycle,
    DownlinkTime,
    UplinkTemp,
    DownlinkTemp,
}

impl Field {
    pub const ALL: [Field; 22] = [
        Field::SpacecraftPower,
        Field::SpacecraftDiameter,
        Field::SpacecraftEfficiency,
        Field::SpacecraftPointing,
        Field::GroundPower,
        Field::GroundDiameter,
        Field::GroundEfficiency,
        Field::GroundPointing,
        Field::TxLoss,
        Field::RxLoss,
        Field::DownlinkFreq,
        Field::TurnAroundRatio,
        Field::Altitude,
        Field::Elongation,
        Field::UplinkRate,
        Field::BitsPerPixel,
        Field::SwathAngle,
        Field::PixelSize,
        Field::DutyCycle,
        Field::DownlinkTime,
        Field::UplinkTemp,
        Field::DownlinkTemp,
    ];

    /// Key used by `SET` and in parameter files.
    pub fn name(&self) -> &'static str {
        match self {
            Field::SpacecraftPower => "sc_power",
            Field::SpacecraftDiameter => "sc_diameter",
            Field::SpacecraftEfficiency => "sc_efficiency",
            Field::SpacecraftPointing => "sc_pointing",
            Field::GroundPower => "gs_power",
            Field::GroundDiameter => "gs_diameter",
            Field::GroundEfficiency => "gs_efficiency",
            Field::GroundPointing => "gs_pointing",
            Field::TxLoss => "tx_loss",
            Field::RxLoss => "rx_loss",
            Field::DownlinkFreq => "downlink_freq",
            Field::TurnAroundRatio => "turn_around_ratio",
            Field::Altitude => "altitude",
            Field::Elongation => "elongation",
            Field::UplinkRate => "uplink_rate",
            Field::BitsPerPixel => "bits_per_pixel",
            Field::SwathAngle => "swath_angle",
            Field::PixelSize => "pixel_size",
            Field::DutyCycle => "duty_cycle",
            Field::DownlinkTime => "downlink_time",
            Field::UplinkTemp => "uplink_temp",
            Field::DownlinkTemp => "downlink_temp",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Field::SpacecraftPower => "Spacecraft transmitter power",
            Field::SpacecraftDiameter => "Spacecraft antenna diameter",
            Field::SpacecraftEfficiency => "Spacecraft antenna efficiency",
            Field::SpacecraftPointing => "Spacecraft pointing offset",
            Field::GroundPower => "Ground station transmitter power",
            Field::GroundDiameter => "Ground station antenna diameter",
            Field::GroundEfficiency => "Ground station antenna efficiency",
            Field::GroundPointing => "Ground station pointing offset",
            Field::TxLoss => "Transmitter loss factor",
            Field::RxLoss => "Receiver loss factor",
            Field::DownlinkFreq => "Downlink frequency",
            Field::TurnAroundRatio => "Turn-around ratio",
            Field::Altitude => "Orbit altitude",
            Field::Elongation => "Elongation angle",
            Field::UplinkRate => "Required uplink data rate",
            Field::BitsPerPixel => "Payload bits per pixel",
            Field::SwathAngle => "Payload swath angle",
            Field::PixelSize => "Payload pixel size",
            Field::DutyCycle => "Payload duty cycle",
            Field::DownlinkTime => "Payload downlink time",
            Field::UplinkTemp => "Uplink system noise temperature",
            Field::DownlinkTemp => "Downlink system noise temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Field::SpacecraftPower | Field::GroundPower => "W",
            Field::SpacecraftDiameter | Field::GroundDiameter => "m",
            Field::SpacecraftPointing
            | Field::GroundPointing
            | Field::Elongation
            | Field::SwathAngle => "deg",
            Field::DownlinkFreq => "GHz",
            Field::Altitude => "km",
            Field::UplinkRate => "bit/s",
            Field::PixelSize => "arcmin",
            Field::DutyCycle => "%",
            Field::DownlinkTime => "h/day",
            Field::UplinkTemp | Field::DownlinkTemp => "K",
            _ => "",
        }
    }

    /// Fields that show a default until their override is switched on.
    pub fn is_overridable(&self) -> bool {
        matches!(
            self,
            Field::SpacecraftEfficiency
                | Field::GroundEfficiency
                | Field::GroundPointing
                | Field::UplinkTemp
                | Field::DownlinkTemp
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| Error::UnknownField(key.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterForm {
    target: Body,
    coding: Coding,
    ber_exponent: i32,
    values: BTreeMap<Field, f64>,
    overrides: BTreeSet<Field>,
}

impl Default for ParameterForm {
    fn default() -> Self {
        Self {
            target: Body::Earth,
            coding: Coding::default(),
            ber_exponent: CALIBRATED_BER_EXPONENT,
            values: BTreeMap::new(),
            overrides: BTreeSet::new(),
        }
    }
}

impl ParameterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Body {
        self.target
    }

    /// Selects the target body. Earth and Moon close the elongation field
    /// and drop any value it held.
    pub fn set_target(&mut self, target: Body) {
        self.target = target;
        if target.is_near_earth() && self.values.remove(&Field::Elongation).is_some() {
            debug!(target = %target, "elongation cleared for near-Earth target");
        }
    }

    pub fn coding(&self) -> Coding {
        self.coding
    }

    pub fn set_coding(&mut self, coding: Coding) {
        self.coding = coding;
    }

    /// Required bit-error rate exponent. Only 10⁻⁶ is calibrated against the
    /// coding table, so this is informational.
    pub fn ber_exponent(&self) -> i32 {
        self.ber_exponent
    }

    pub fn is_overridden(&self, field: Field) -> bool {
        self.overrides.contains(&field)
    }

    /// Whether the field currently accepts a value.
    pub fn is_enabled(&self, field: Field) -> bool {
        if field.is_overridable() {
            return self.is_overridden(field);
        }
        if field == Field::Elongation {
            return !self.target.is_near_earth();
        }
        true
    }

    pub fn set(&mut self, field: Field, value: f64) -> Result<()> {
        if !self.is_enabled(field) {
            let reason = if field == Field::Elongation {
                format!("{} is only used for deep-space targets, not {}", field, self.target)
            } else {
                format!("{} uses its default - use OVERRIDE {} ON first", field, field)
            };
            return Err(Error::Parse(reason));
        }
        if !value.is_finite() {
            return Err(Error::Parse(format!("{}: value must be finite", field)));
        }
        self.values.insert(field, value);
        Ok(())
    }

    pub fn unset(&mut self, field: Field) -> Option<f64> {
        self.values.remove(&field)
    }

    /// Switches a field's override. Turning it on keeps the shown value as
    /// the starting entry; turning it off discards the entry.
    pub fn set_override(&mut self, field: Field, on: bool) -> Result<()> {
        if !field.is_overridable() {
            return Err(Error::Parse(format!("{} has no override", field)));
        }
        if on {
            let shown = self.effective(field).value();
            self.overrides.insert(field);
            if let Some(v) = shown {
                self.values.entry(field).or_insert(v);
            }
        } else {
            self.overrides.remove(&field);
            self.values.remove(&field);
        }
        Ok(())
    }

    /// The raw entry, if any.
    pub fn value(&self, field: Field) -> Option<f64> {
        self.values.get(&field).copied()
    }

    /// The value the computation will use: the entry, or the default while
    /// the field's override is off.
    pub fn effective(&self, field: Field) -> Derived<f64> {
        if field.is_overridable() && !self.is_overridden(field) {
            return self.default_value(field);
        }
        if !self.is_enabled(field) {
            return Derived::Unavailable;
        }
        self.value(field).into()
    }

    pub fn default_value(&self, field: Field) -> Derived<f64> {
        match field {
            Field::SpacecraftEfficiency | Field::GroundEfficiency => {
                Derived::Value(DEFAULT_ANTENNA_EFFICIENCY)
            }
            Field::GroundPointing => Derived::Value(DEFAULT_GROUND_POINTING_OFFSET_DEG),
            Field::UplinkTemp => system_temperature(self.uplink_freq().value(), Direction::Uplink),
            Field::DownlinkTemp => {
                system_temperature(self.value(Field::DownlinkFreq), Direction::Downlink)
            }
            _ => Derived::Unavailable,
        }
    }

    pub fn uplink_freq(&self) -> Derived<f64> {
        uplink_frequency_ghz(
            self.value(Field::DownlinkFreq),
            self.value(Field::TurnAroundRatio),
        )
    }

    /// Entries in field order, for saving.
    pub fn entries(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        self.values.iter().map(|(f, v)| (*f, *v))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn resolve(&self) -> Result<LinkParameters> {
        let spacecraft = Terminal {
            power_w: self.required(Field::SpacecraftPower)?,
            antenna: Antenna::new(self.required(Field::SpacecraftDiameter)?)
                .with_efficiency(self.required(Field::SpacecraftEfficiency)?)
                .with_pointing_offset(self.required(Field::SpacecraftPointing)?),
        };
        let ground = Terminal {
            power_w: self.required(Field::GroundPower)?,
            antenna: Antenna::new(self.required(Field::GroundDiameter)?)
                .with_efficiency(self.required(Field::GroundEfficiency)?)
                .with_pointing_offset(self.required(Field::GroundPointing)?),
        };
        let elongation_deg = if self.target.is_near_earth() {
            None
        } else {
            Some(self.required(Field::Elongation)?)
        };
        let payload = PayloadParams {
            bits_per_pixel: self.required(Field::BitsPerPixel)?,
            swath_angle_deg: self.required(Field::SwathAngle)?,
            pixel_size_arcmin: self.required(Field::PixelSize)?,
            duty_cycle_percent: self.required(Field::DutyCycle)?,
            downlink_hours_per_day: self.required(Field::DownlinkTime)?,
        };

        Ok(LinkParameters {
            target: self.target,
            coding: self.coding,
            spacecraft,
            ground,
            tx_loss_factor: self.required(Field::TxLoss)?,
            rx_loss_factor: self.required(Field::RxLoss)?,
            downlink_freq_ghz: self.required(Field::DownlinkFreq)?,
            turn_around_ratio: self.required(Field::TurnAroundRatio)?,
            orbit_altitude_km: self.required(Field::Altitude)?,
            elongation_deg,
            uplink_data_rate_bps: self.required(Field::UplinkRate)?,
            payload,
            uplink_noise_temp_k: Some(self.required(Field::UplinkTemp)?),
            downlink_noise_temp_k: Some(self.required(Field::DownlinkTemp)?),
        })
    }

    fn required(&self, field: Field) -> Result<f64> {
        match self.effective(field) {
            Derived::Value(v) => Ok(v),
            Derived::Unavailable => {
                if field.is_overridable() && !self.is_overridden(field) {
                    warn!(field = %field, "no default available; use OVERRIDE {} ON and SET a value", field);
                }
                Err(LinkError::missing_field(field.name()).into())
            }
        }
    }
}
