use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;
use std::path::Path;

pub struct Load;

impl Command for Load {
    fn name(&self) -> &str { "LOAD" }
    fn description(&self) -> &str { "Load parameters from file" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("LOAD requires a filename".into()));
        }
        let count = session.load_file(Path::new(args[0]))?;
        Ok(CommandOutput::Text(format!(
            "Loaded {} values from {} (target {}, coding {})",
            count,
            args[0],
            session.form.target(),
            session.form.coding()
        )))
    }
}
