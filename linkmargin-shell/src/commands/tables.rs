use super::{Command, CommandOutput};
use crate::error::Result;
use crate::form::Field;
use crate::parser::parse_f64;
use crate::session::Session;
use linkmargin_core::noise::system_temperature;
use linkmargin_core::units::Derived;
use linkmargin_core::{Body, Coding, Direction};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub struct Bodies;

impl Command for Bodies {
    fn name(&self) -> &str {
        "BODIES"
    }
    fn description(&self) -> &str {
        "List the celestial body catalog"
    }

    fn execute(&self, _session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        Ok(bodies_table())
    }
}

pub fn bodies_table() -> CommandOutput {
    let rows = Body::ALL
        .iter()
        .map(|body| {
            let data = body.data();
            vec![
                data.name.to_string(),
                format!("{}", data.gravitational_parameter),
                format!("{}", data.mean_radius),
                format!("{:e}", data.reference_distance),
                if body.is_near_earth() { "near-body" } else { "deep space" }.to_string(),
            ]
        })
        .collect();
    CommandOutput::Table {
        headers: headers(&["Body", "mu (km3/s2)", "Radius (km)", "Ref. distance (km)", "Geometry"]),
        rows,
    }
}

pub struct Codings;

impl Command for Codings {
    fn name(&self) -> &str {
        "CODINGS"
    }
    fn description(&self) -> &str {
        "List the channel coding schemes"
    }

    fn execute(&self, _session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        Ok(codings_table())
    }
}

pub fn codings_table() -> CommandOutput {
    let rows = Coding::ALL
        .iter()
        .map(|coding| {
            let s = coding.scheme();
            vec![
                s.name.to_string(),
                s.alias.to_string(),
                format!("{:.4}", s.code_rate),
                format!("{}", s.required_eb_no),
            ]
        })
        .collect();
    CommandOutput::Table {
        headers: headers(&["Scheme", "Alias", "Code rate", "Eb/No (dB)"]),
        rows,
    }
}

pub struct Temps;

impl Command for Temps {
    fn name(&self) -> &str {
        "TEMPS"
    }
    fn description(&self) -> &str {
        "Look up system noise temperatures"
    }

    /// With a frequency argument both tables are read at that frequency;
    /// otherwise at the form's uplink and downlink frequencies.
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let (up, down) = match args.first() {
            Some(s) => {
                let f = parse_f64(s, "frequency")?;
                (Some(f), Some(f))
            }
            None => (
                session.form.uplink_freq().value(),
                session.form.value(Field::DownlinkFreq),
            ),
        };
        let rows = [(Direction::Uplink, up), (Direction::Downlink, down)]
            .into_iter()
            .map(|(direction, freq)| {
                vec![
                    direction.to_string(),
                    freq.map_or_else(|| "-".to_string(), |f| format!("{:.4}", f)),
                    match system_temperature(freq, direction) {
                        Derived::Value(t) => format!("{}", t),
                        Derived::Unavailable => "unavailable".to_string(),
                    },
                ]
            })
            .collect();
        Ok(CommandOutput::Table {
            headers: headers(&["Link", "Freq (GHz)", "T_sys (K)"]),
            rows,
        })
    }
}
