use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;
use linkmargin_core::export::render_csv;
use std::path::Path;
use tracing::debug;

pub struct Export;

impl Command for Export {
    fn name(&self) -> &str { "EXPORT" }
    fn description(&self) -> &str { "Write the last result as CSV or JSON" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(Error::Parse("EXPORT requires a filename".into()));
        }
        let path = Path::new(args[0]);
        let result = session.result()?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let content = match extension.as_deref() {
            Some("csv") => render_csv(result),
            Some("json") => serde_json::to_string_pretty(result)? + "\n",
            _ => {
                return Err(Error::Parse(
                    "EXPORT writes .csv or .json files".into(),
                ))
            }
        };
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "result exported");
        Ok(CommandOutput::Text(format!("Result exported to {}", args[0])))
    }
}
