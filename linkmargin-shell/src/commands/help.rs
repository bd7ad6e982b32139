use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

fn command_help(cmd: &str) -> String {
    match cmd.to_uppercase().as_str() {
        "SET" => "SET <field> <value>\n  Enter a parameter value\n  Example: SET downlink_freq 8.4\n  SHOW lists the field names and units".into(),
        "UNSET" => "UNSET <field>\n  Clear a parameter value".into(),
        "TARGET" => "TARGET [body]\n  Show or select the target body (see BODIES)\n  Earth and Moon use the near-body range; other bodies need an elongation".into(),
        "CODING" => "CODING [scheme]\n  Show or select the coding scheme by name or alias (see CODINGS)\n  Example: CODING turbo-1/6".into(),
        "OVERRIDE" => "OVERRIDE <field> ON|OFF\n  Replace a default with your own value, or restore the default\n  Fields: sc_efficiency gs_efficiency gs_pointing uplink_temp downlink_temp".into(),
        "CALC" => "CALC\n  Compute uplink and downlink SNR and margin".into(),
        "TERMS" => "TERMS\n  Show every budget term of the last result, uplink beside downlink".into(),
        "SHOW" => "SHOW\n  Display target, coding and all parameter fields".into(),
        "BODIES" => "BODIES\n  List the celestial body catalog".into(),
        "CODINGS" => "CODINGS\n  List the coding schemes with code rate and required Eb/No".into(),
        "TEMPS" => "TEMPS [freq_ghz]\n  Look up system noise temperatures\n  No args = at the current uplink and downlink frequencies".into(),
        "LOAD" => "LOAD <file>\n  Load parameters from a key = value file".into(),
        "SAVE" => "SAVE <file>\n  Save parameters to a key = value file".into(),
        "EXPORT" => "EXPORT <file.csv|file.json>\n  Write the last result; the format follows the extension".into(),
        "RESET" => "RESET\n  Clear all parameters and restore defaults".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    "\
Commands:
  SET <field> <value>   Enter a parameter
  UNSET <field>         Clear a parameter
  OVERRIDE <field> ON|OFF
                        Use your own value instead of the default
  TARGET [body]         Select target body
  CODING [scheme]       Select coding scheme

  CALC                  Compute link margins
  TERMS                 Show budget breakdown
  SHOW                  Show all parameters

  BODIES                List body catalog
  CODINGS               List coding schemes
  TEMPS [freq]          Noise temperature lookup

  LOAD <file>           Load parameters
  SAVE <file>           Save parameters
  EXPORT <file>         Export last result (.csv or .json)
  RESET                 Clear all parameters

  HELP [command]        Show help
  QUIT                  Exit"
        .into()
}
