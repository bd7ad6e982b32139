use super::{format_db, Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;
use linkmargin_core::{DirectionBudget, LinkBudgetResult};

pub struct Calc;

impl Command for Calc {
    fn name(&self) -> &str {
        "CALC"
    }
    fn description(&self) -> &str {
        "Compute uplink and downlink margins"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let result = session.calculate()?;
        Ok(margin_table(result))
    }
}

pub fn margin_table(result: &LinkBudgetResult) -> CommandOutput {
    let headers = ["Link", "Freq (GHz)", "SNR (dB)", "Eb/No req (dB)", "Margin (dB)", ""]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = [&result.uplink, &result.downlink]
        .into_iter()
        .map(margin_row)
        .collect();
    CommandOutput::Table { headers, rows }
}

fn margin_row(budget: &DirectionBudget) -> Vec<String> {
    let verdict = if budget.has_margin() { "closes" } else { "FAILS" };
    vec![
        budget.direction.to_string(),
        format!("{:.4}", budget.frequency_ghz),
        format_db(budget.snr_db),
        format!("{}", budget.required_eb_no_db),
        format!("{:.5}", budget.margin_db),
        verdict.to_string(),
    ]
}
