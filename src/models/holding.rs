use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single stock position as it appears in the report dataset.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Holding {
    symbol: String,
    company_name: String,
    quantity: i64,
    avg_price: Decimal,
    ltp: Decimal,
    current_value: Decimal,
    investment_value: Decimal,
    pnl: Decimal,
    pnl_percent: Decimal,
}
