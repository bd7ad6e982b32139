use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;
use linkmargin_core::Body;

pub struct Target;

impl Command for Target {
    fn name(&self) -> &str {
        "TARGET"
    }
    fn description(&self) -> &str {
        "Select the target body"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Text(format!(
                "Target: {}",
                session.form.target()
            )));
        }
        let body = Body::lookup(&args.join(" "))?;
        session.form.set_target(body);
        session.invalidate();
        let geometry = if body.is_near_earth() {
            "near-body geometry"
        } else {
            "deep-space geometry, elongation required"
        };
        Ok(CommandOutput::Text(format!("Target: {} ({})", body, geometry)))
    }
}
