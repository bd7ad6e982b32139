//! Parameter files.
//!
//! One `key = value` per line; `#` starts a comment. Keys are the form field
//! names plus `target` and `coding`:
//!
//! ```text
//! # Mars orbiter, X-band
//! target = Mars
//! coding = Turbo-Codes: r=1/6
//! downlink_freq = 8.4
//! elongation = 90
//! sc_efficiency = 0.6
//! ```
//!
//! An overridable field present in the file is loaded with its override on.

use crate::error::{Error, Result};
use crate::form::{Field, ParameterForm};
use linkmargin_core::{Body, Coding};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    Target(Body),
    Coding(Coding),
    Value(Field, f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub setting: Setting,
}

pub fn parse_parameters(content: &str) -> Result<Vec<ParameterLine>> {
    let mut out = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let text = strip_comment(raw).trim();
        if text.is_empty() {
            continue;
        }
        let (key, value) = text
            .split_once('=')
            .ok_or_else(|| Error::Parse(format!("line {}: expected key = value", line)))?;
        let key = key.trim();
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::Parse(format!("line {}: {} has no value", line, key)));
        }
        let setting = parse_setting(key, value).map_err(|e| at_line(line, e))?;
        out.push(ParameterLine { line, setting });
    }
    Ok(out)
}

fn parse_setting(key: &str, value: &str) -> Result<Setting> {
    if key.eq_ignore_ascii_case("target") {
        return Ok(Setting::Target(Body::lookup(value)?));
    }
    if key.eq_ignore_ascii_case("coding") {
        return Ok(Setting::Coding(Coding::lookup(value)?));
    }
    let field: Field = key.parse()?;
    Ok(Setting::Value(field, parse_f64(value, field.name())?))
}

/// Applies parsed lines to `form`. Selections go first so that the
/// elongation gate sees the file's target regardless of line order.
pub fn apply_parameters(form: &mut ParameterForm, lines: &[ParameterLine]) -> Result<usize> {
    for pl in lines {
        match pl.setting {
            Setting::Target(body) => form.set_target(body),
            Setting::Coding(coding) => form.set_coding(coding),
            Setting::Value(..) => {}
        }
    }
    let mut count = 0;
    for pl in lines {
        if let Setting::Value(field, value) = pl.setting {
            if field.is_overridable() {
                form.set_override(field, true)?;
            }
            form.set(field, value).map_err(|e| at_line(pl.line, e))?;
            count += 1;
        }
    }
    Ok(count)
}

pub fn write_parameters(form: &ParameterForm) -> String {
    let mut out = String::from("# link margin parameters\n");
    out += &format!("target = {}\n", form.target());
    out += &format!("coding = {}\n", form.coding());
    for (field, value) in form.entries() {
        out += &format!("{} = {}\n", field, value);
    }
    out
}

pub(crate) fn parse_f64(s: &str, field: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|e| Error::Parse(format!("{}: {}", field, e)))
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

fn at_line(line: usize, err: Error) -> Error {
    match err {
        Error::Parse(msg) => Error::Parse(format!("line {}: {}", line, msg)),
        Error::UnknownField(key) => Error::Parse(format!("line {}: unknown key {}", line, key)),
        Error::Link(e) => Error::Parse(format!("line {}: {}", line, e)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkmargin_core::units::Derived;

    const MARS: &str = "\
# Mars orbiter
target = Mars
coding = LDPC: r=3/4   # alias ldpc-3/4 works too

downlink_freq = 8.4
turn_around_ratio = 0.85
elongation = 90
sc_efficiency = 0.6
";

    #[test]
    fn parse_skips_comments_and_blanks() {
        let lines = parse_parameters(MARS).unwrap();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].line, 2);
        assert_eq!(lines[0].setting, Setting::Target(Body::Mars));
        assert_eq!(lines[1].setting, Setting::Coding(Coding::LdpcThreeQuarters));
        assert_eq!(lines[2].setting, Setting::Value(Field::DownlinkFreq, 8.4));
        assert_eq!(lines[5].line, 8);
    }

    #[test]
    fn unknown_key_names_line() {
        let err = parse_parameters("altitude = 500\nwarp = 9\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
        assert!(err.to_string().contains("warp"), "{}", err);
    }

    #[test]
    fn non_numeric_value_names_line() {
        let err = parse_parameters("\n\naltitude = low\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 3") && msg.contains("altitude"), "{}", msg);
    }

    #[test]
    fn unknown_body_is_parse_error() {
        let err = parse_parameters("target = Pluto\n").unwrap_err();
        assert!(err.to_string().contains("Pluto"), "{}", err);
    }

    #[test]
    fn missing_equals_or_value_fails() {
        assert!(parse_parameters("altitude 500\n").is_err());
        assert!(parse_parameters("altitude =\n").is_err());
    }

    #[test]
    fn apply_sets_target_before_elongation() {
        let lines = parse_parameters("elongation = 60\ntarget = Venus\n").unwrap();
        let mut form = ParameterForm::new();
        assert_eq!(apply_parameters(&mut form, &lines).unwrap(), 1);
        assert_eq!(form.target(), Body::Venus);
        assert_eq!(form.value(Field::Elongation), Some(60.0));
    }

    #[test]
    fn apply_turns_overrides_on() {
        let lines = parse_parameters(MARS).unwrap();
        let mut form = ParameterForm::new();
        apply_parameters(&mut form, &lines).unwrap();
        assert!(form.is_overridden(Field::SpacecraftEfficiency));
        assert_eq!(form.effective(Field::SpacecraftEfficiency), Derived::Value(0.6));
        assert!(!form.is_overridden(Field::GroundEfficiency));
    }

    #[test]
    fn elongation_for_earth_fails_with_line() {
        let lines = parse_parameters("target = Earth\nelongation = 60\n").unwrap();
        let err = apply_parameters(&mut ParameterForm::new(), &lines).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn written_file_reloads_to_same_form() {
        let mut form = ParameterForm::new();
        apply_parameters(&mut form, &parse_parameters(MARS).unwrap()).unwrap();
        let text = write_parameters(&form);
        assert!(text.contains("coding = LDPC: r=3/4\n"));

        let mut reloaded = ParameterForm::new();
        apply_parameters(&mut reloaded, &parse_parameters(&text).unwrap()).unwrap();
        assert_eq!(reloaded, form);
    }
}
