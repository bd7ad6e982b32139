use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::form::Field;
use crate::session::Session;

pub struct Override;

impl Command for Override {
    fn name(&self) -> &str {
        "OVERRIDE"
    }
    fn description(&self) -> &str {
        "Switch a field between its default and a user value"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.len() < 2 {
            return Err(Error::Parse("OVERRIDE requires a field and ON or OFF".into()));
        }
        let field: Field = args[0].parse()?;
        let on = match args[1].to_uppercase().as_str() {
            "ON" => true,
            "OFF" => false,
            other => {
                return Err(Error::Parse(format!(
                    "expected ON or OFF, got {}",
                    other
                )))
            }
        };
        session.form.set_override(field, on)?;
        session.invalidate();

        let shown = session
            .form
            .effective(field)
            .value()
            .map(|v| format!("{} {}", v, field.unit()))
            .unwrap_or_else(|| "unavailable".to_string());
        let state = if on { "override on" } else { "default" };
        Ok(CommandOutput::Text(format!("{} = {} ({})", field, shown, state)))
    }
}
