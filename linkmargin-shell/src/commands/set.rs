use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::form::Field;
use crate::parser::parse_f64;
use crate::session::Session;

pub struct Set;

impl Command for Set {
    fn name(&self) -> &str {
        "SET"
    }
    fn description(&self) -> &str {
        "Set a parameter value"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.len() < 2 {
            return Err(Error::Parse("SET requires a field and a value".into()));
        }
        let field: Field = args[0].parse()?;
        let value = parse_f64(args[1], field.name())?;
        session.form.set(field, value)?;
        session.invalidate();
        Ok(CommandOutput::Text(format!(
            "{} = {} {}",
            field,
            value,
            field.unit()
        )))
    }
}

pub struct Unset;

impl Command for Unset {
    fn name(&self) -> &str {
        "UNSET"
    }
    fn description(&self) -> &str {
        "Clear a parameter value"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("UNSET requires a field".into()));
        }
        let field: Field = args[0].parse()?;
        let old = session.form.unset(field);
        session.invalidate();
        let msg = match old {
            Some(v) => format!("{} cleared (was {})", field, v),
            None => format!("{} was not set", field),
        };
        Ok(CommandOutput::Text(msg))
    }
}
