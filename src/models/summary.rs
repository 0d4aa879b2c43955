use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-wide aggregates. `report_date` is display-only.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Summary {
    total_investment: Decimal,
    total_current_value: Decimal,
    total_pnl: Decimal,
    total_pnl_percent: Decimal,
    holdings_count: usize,
    report_date: String,
}
