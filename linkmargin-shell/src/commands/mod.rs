pub mod calc;
pub mod coding;
pub mod export;
pub mod help;
pub mod load;
pub mod override_field;
pub mod reset;
pub mod save;
pub mod set;
pub mod show;
pub mod tables;
pub mod target;
pub mod terms;

use crate::error::Result;
use crate::session::Session;
use tracing::debug;

#[derive(Debug)]
pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    None,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_uppercase();
    let args = &parts[1..];
    debug!(command = %cmd_name, args = args.len(), "dispatch");
    match cmd_name.as_str() {
        "BODIES" => tables::Bodies.execute(session, args),
        "CALC" => calc::Calc.execute(session, args),
        "CODING" => coding::Coding.execute(session, args),
        "CODINGS" => tables::Codings.execute(session, args),
        "EXPORT" => export::Export.execute(session, args),
        "HELP" => help::Help.execute(session, args),
        "LOAD" => load::Load.execute(session, args),
        "OVERRIDE" => override_field::Override.execute(session, args),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        "RESET" => reset::Reset.execute(session, args),
        "SAVE" => save::Save.execute(session, args),
        "SET" => set::Set.execute(session, args),
        "SHOW" => show::Show.execute(session, args),
        "TARGET" => target::Target.execute(session, args),
        "TEMPS" => tables::Temps.execute(session, args),
        "TERMS" => terms::Terms.execute(session, args),
        "UNSET" => set::Unset.execute(session, args),
        _ => Err(crate::error::Error::Parse(format!(
            "unknown command: {}",
            parts[0]
        ))),
    }
}

pub(crate) fn format_db(value: f64) -> String {
    format!("{:.3}", value)
}
