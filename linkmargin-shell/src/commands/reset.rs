use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Reset;

impl Command for Reset {
    fn name(&self) -> &str {
        "RESET"
    }
    fn description(&self) -> &str {
        "Clear all parameters and restore defaults"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        session.form.reset();
        session.invalidate();
        Ok(CommandOutput::Text(
            "Parameters cleared (target Earth, coding Uncoded)".to_string(),
        ))
    }
}
