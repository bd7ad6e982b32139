//! Flat export of a computed budget.
//!
//! Rows pair the uplink and downlink value of the same budget term, followed
//! by the SNR, required Eb/N0 and margin rows. [`render_csv`] lays each row out
//! as `quantity, description, dB` for the uplink and again for the downlink.

use crate::budget::{BudgetTerm, LinkBudgetResult};
use crate::noise::Direction;

/// One budget line for both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub description: &'static str,
    pub uplink_symbol: String,
    pub uplink_db: f64,
    pub downlink_symbol: String,
    pub downlink_db: f64,
}

pub const CSV_HEADER: &str =
    "uplink_quantity,uplink_description,uplink_db,downlink_quantity,downlink_description,downlink_db";

pub fn export_rows(result: &LinkBudgetResult) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = BudgetTerm::ALL
        .iter()
        .map(|term| ExportRow {
            description: term.description(),
            uplink_symbol: term.symbol(Direction::Uplink),
            uplink_db: result.uplink.term(*term),
            downlink_symbol: term.symbol(Direction::Downlink),
            downlink_db: result.downlink.term(*term),
        })
        .collect();

    let summary = [
        ("SNR", "Signal-to-noise ratio", result.uplink.snr_db, result.downlink.snr_db),
        (
            "Eb_No_req",
            "Required Eb/No",
            result.uplink.required_eb_no_db,
            result.downlink.required_eb_no_db,
        ),
        ("margin", "Link margin", result.uplink.margin_db, result.downlink.margin_db),
    ];
    for (symbol, description, up, down) in summary {
        rows.push(ExportRow {
            description,
            uplink_symbol: format!("{}_uplink", symbol),
            uplink_db: up,
            downlink_symbol: format!("{}_downlink", symbol),
            downlink_db: down,
        });
    }
    rows
}

/// CSV text with [`CSV_HEADER`] and one line per [`ExportRow`].
pub fn render_csv(result: &LinkBudgetResult) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in export_rows(result) {
        out += &format!(
            "{},{},{},{},{},{}\n",
            row.uplink_symbol,
            row.description,
            row.uplink_db,
            row.downlink_symbol,
            row.description,
            row.downlink_db
        );
    }
    out
}
