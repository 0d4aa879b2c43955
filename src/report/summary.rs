use derive_getters::Getters;
use serde::Serialize;

use crate::models::Summary;

use super::{
    format::{CurrencyFormat, format_percent},
    style::SignClass,
};

/// Display strings for the summary block, keyed like the page elements.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct SummaryView {
    report_date: String,
    total_investment: String,
    current_value: String,
    overall_pnl: String,
    overall_pnl_percent: String,
    pnl_class: SignClass,
    holdings_count: String,
}

pub fn summary_view(summary: &Summary, format: &CurrencyFormat) -> SummaryView {
    SummaryView {
        report_date: summary.report_date().clone(),
        total_investment: format.currency(*summary.total_investment()),
        current_value: format.currency(*summary.total_current_value()),
        overall_pnl: format.currency(*summary.total_pnl()),
        overall_pnl_percent: format_percent(*summary.total_pnl_percent()),
        pnl_class: SignClass::of(summary.total_pnl()),
        holdings_count: summary.holdings_count().to_string(),
    }
}
