use super::{Command, CommandOutput};
use crate::error::Result;
use crate::form::{Field, ParameterForm};
use crate::session::Session;
use linkmargin_core::units::Derived;

pub struct Show;

impl Command for Show {
    fn name(&self) -> &str {
        "SHOW"
    }
    fn description(&self) -> &str {
        "Display the parameter form"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let form = &session.form;
        let scheme = form.coding().scheme();
        let geometry = if form.target().is_near_earth() {
            "near-body"
        } else {
            "deep space"
        };
        let uplink = match form.uplink_freq() {
            Derived::Value(f) => format!("{:.4} GHz", f),
            Derived::Unavailable => "unavailable".to_string(),
        };
        let last = session
            .last_result
            .as_ref()
            .map(|r| {
                format!(
                    "uplink {:.5} dB, downlink {:.5} dB",
                    r.uplink_margin_db(),
                    r.downlink_margin_db()
                )
            })
            .unwrap_or_else(|| "not computed".to_string());

        let mut output = format!(
            "Target: {} ({})\nCoding: {} (rate {:.4}, Eb/No {} dB at BER 1e{})\nUplink frequency: {}\nLast margins: {}\n",
            form.target(),
            geometry,
            scheme.name,
            scheme.code_rate,
            scheme.required_eb_no,
            form.ber_exponent(),
            uplink,
            last,
        );
        for field in Field::ALL {
            output += &format!("\n{}", field_line(form, field));
        }
        Ok(CommandOutput::Text(output))
    }
}

fn field_line(form: &ParameterForm, field: Field) -> String {
    let value = match form.effective(field) {
        Derived::Value(v) => format!("{} {}", v, field.unit()),
        Derived::Unavailable => "-".to_string(),
    };
    let status = if !field.is_overridable() && !form.is_enabled(field) {
        "(disabled)"
    } else if field.is_overridable() && !form.is_overridden(field) {
        "(default)"
    } else {
        ""
    };
    format!("  {:<18} {:<16} {:<10} {}", field.name(), value, status, field.description())
}
