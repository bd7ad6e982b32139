use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;
use std::path::Path;

pub struct Save;

impl Command for Save {
    fn name(&self) -> &str { "SAVE" }
    fn description(&self) -> &str { "Save parameters to file" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("SAVE requires a filename".into()));
        }
        session.save_file(Path::new(args[0]))?;
        Ok(CommandOutput::Text(format!("Parameters saved to {}", args[0])))
    }
}
