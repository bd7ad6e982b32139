use super::{format_db, Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;
use linkmargin_core::export::export_rows;
use linkmargin_core::LinkBudgetResult;

pub struct Terms;

impl Command for Terms {
    fn name(&self) -> &str {
        "TERMS"
    }
    fn description(&self) -> &str {
        "Show the per-term budget breakdown of the last result"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        Ok(terms_table(session.result()?))
    }
}

/// Uplink and downlink terms side by side, paired by budget position.
pub fn terms_table(result: &LinkBudgetResult) -> CommandOutput {
    let headers = ["Term", "Uplink", "dB", "Downlink", "dB"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = export_rows(result)
        .into_iter()
        .map(|row| {
            vec![
                row.description.to_string(),
                row.uplink_symbol,
                format_db(row.uplink_db),
                row.downlink_symbol,
                format_db(row.downlink_db),
            ]
        })
        .collect();
    CommandOutput::Table { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn terms_without_result_errors() {
        let mut session = Session::new();
        let err = Terms.execute(&mut session, &[]).err();
        assert!(matches!(err, Some(Error::NoResult)));
    }
}
