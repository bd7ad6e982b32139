use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Coding;

impl Command for Coding {
    fn name(&self) -> &str {
        "CODING"
    }
    fn description(&self) -> &str {
        "Select the channel coding scheme"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if !args.is_empty() {
            let coding = linkmargin_core::Coding::lookup(&args.join(" "))?;
            session.form.set_coding(coding);
            session.invalidate();
        }
        let scheme = session.form.coding().scheme();
        Ok(CommandOutput::Text(format!(
            "Coding: {} (rate {:.4}, required Eb/No {} dB)",
            scheme.name, scheme.code_rate, scheme.required_eb_no
        )))
    }
}
