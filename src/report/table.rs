use derive_getters::Getters;
use serde::Serialize;

use crate::models::Holding;

use super::{
    format::{format_fixed, format_percent},
    style::SignClass,
};

pub const TABLE_HEADERS: [&str; 9] = [
    "Symbol",
    "Company",
    "Qty",
    "Avg Price",
    "LTP",
    "Investment",
    "Current Value",
    "P&L",
    "P&L %",
];

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct HoldingRow {
    cells: Vec<String>,
    pnl_class: SignClass,
    pnl_percent_class: SignClass,
}

impl HoldingRow {
    fn from_holding(holding: &Holding) -> Self {
        Self {
            cells: vec![
                holding.symbol().clone(),
                holding.company_name().clone(),
                holding.quantity().to_string(),
                format_fixed(*holding.avg_price()),
                format_fixed(*holding.ltp()),
                format_fixed(*holding.investment_value()),
                format_fixed(*holding.current_value()),
                format_fixed(*holding.pnl()),
                format_percent(*holding.pnl_percent()),
            ],
            pnl_class: SignClass::of(holding.pnl()),
            pnl_percent_class: SignClass::of(holding.pnl_percent()),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.cells[0]
    }
}

/// One row per holding, largest current value first. Ties keep input order.
pub fn holdings_table(holdings: &[Holding]) -> Vec<HoldingRow> {
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| b.current_value().cmp(a.current_value()));

    sorted.iter().map(HoldingRow::from_holding).collect()
}
