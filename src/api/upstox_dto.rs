use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{dataset::percent_of, errors::ReportError, models::Holding};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize, Getters, new)]
pub struct UpstoxResponseDto {
    status: Option<String>,
    data: Option<Vec<UpstoxHoldingDto>>,
}

impl UpstoxResponseDto {
    pub fn into_holdings(self) -> Result<Vec<UpstoxHoldingDto>> {
        match (self.status.as_deref(), self.data) {
            (Some("success"), Some(data)) => Ok(data),
            _ => Err(ReportError::Api(String::from("No holdings data found in the response")).into()),
        }
    }
}

/// Raw long-term holding as returned by the broker. Absent fields default.
#[derive(Clone, Debug, Default, Deserialize, Getters, new)]
#[serde(default)]
pub struct UpstoxHoldingDto {
    tradingsymbol: Option<String>,
    company_name: Option<String>,
    quantity: i64,
    average_price: Decimal,
    last_price: Decimal,
    pnl: Decimal,
}

impl UpstoxHoldingDto {
    pub fn to_holding(&self) -> Holding {
        let quantity = Decimal::from(self.quantity);
        let current_value = quantity * self.last_price;
        let investment_value = quantity * self.average_price;

        Holding::new(
            self.tradingsymbol
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            self.company_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            self.quantity,
            self.average_price,
            self.last_price,
            current_value,
            investment_value,
            self.pnl,
            percent_of(self.pnl, investment_value),
        )
    }
}
