use crate::error::{Error, Result};
use crate::form::ParameterForm;
use crate::parser::{apply_parameters, parse_parameters, write_parameters};
use linkmargin_core::{compute_link_budget, LinkBudgetResult};
use std::path::Path;
use tracing::debug;

#[derive(Default)]
pub struct Session {
    pub form: ParameterForm,
    pub last_result: Option<LinkBudgetResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the last result after the form changed.
    pub fn invalidate(&mut self) {
        self.last_result = None;
    }

    pub fn calculate(&mut self) -> Result<&LinkBudgetResult> {
        self.last_result = None;
        let params = self.form.resolve()?;
        let result = compute_link_budget(&params)?;
        debug!(
            target_body = %result.target,
            coding = %result.coding,
            uplink_margin = result.uplink_margin_db(),
            downlink_margin = result.downlink_margin_db(),
            "link budget computed"
        );
        Ok(&*self.last_result.insert(result))
    }

    pub fn result(&self) -> Result<&LinkBudgetResult> {
        self.last_result.as_ref().ok_or(Error::NoResult)
    }

    /// Replaces the form with the contents of a parameter file.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let lines = parse_parameters(&content)?;
        let mut form = ParameterForm::new();
        let count = apply_parameters(&mut form, &lines)?;
        self.form = form;
        self.invalidate();
        debug!(path = %path.display(), values = count, "parameters loaded");
        Ok(count)
    }

    pub fn save_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, write_parameters(&self.form))?;
        debug!(path = %path.display(), "parameters saved");
        Ok(())
    }
}
