use derive_getters::Getters;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::models::Holding;

use super::{
    format::{CurrencyFormat, format_fixed},
    style::{
        AllocationBucket, INVESTMENT_BACKGROUND, INVESTMENT_BORDER, LOSS_BACKGROUND, LOSS_BORDER,
        PROFIT_BACKGROUND, PROFIT_BORDER,
    },
};

pub const INVESTMENT_SERIES: &str = "Investment Value";
pub const PNL_SERIES: &str = "Profit/Loss";

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct AllocationSlice {
    label: String,
    value: Decimal,
    bucket: AllocationBucket,
    share_percent: Decimal,
    tooltip: String,
}

/// Doughnut of current value per holding, in dataset order.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct AllocationChart {
    slices: Vec<AllocationSlice>,
    total: Decimal,
}

impl AllocationChart {
    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn colors(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.bucket.hex()).collect()
    }
}

pub fn allocation_chart(holdings: &[Holding], format: &CurrencyFormat) -> AllocationChart {
    let total: Decimal = holdings.iter().map(|h| *h.current_value()).sum();

    let slices = holdings
        .iter()
        .map(|holding| {
            let value = *holding.current_value();
            let share_percent = if total.is_zero() {
                Decimal::ZERO
            } else {
                value / total * dec!(100)
            };

            AllocationSlice {
                label: holding.symbol().clone(),
                value,
                bucket: AllocationBucket::of(holding.pnl_percent()),
                share_percent,
                tooltip: format!(
                    "{}: {} ({}%)",
                    holding.symbol(),
                    format.currency(value),
                    format_fixed(share_percent)
                ),
            }
        })
        .collect();

    AllocationChart { slices, total }
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct PerformanceSeries {
    label: String,
    data: Vec<Decimal>,
    background: Vec<&'static str>,
    border: Vec<&'static str>,
    tooltips: Vec<String>,
}

/// Grouped bars of investment against P&L, best performer first.
#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize)]
pub struct PerformanceChart {
    labels: Vec<String>,
    investment: PerformanceSeries,
    pnl: PerformanceSeries,
}

impl PerformanceChart {
    /// Largest bar magnitude across both series.
    pub fn max_magnitude(&self) -> Decimal {
        self.investment
            .data
            .iter()
            .chain(self.pnl.data.iter())
            .map(|v| v.abs())
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Evenly spaced y-axis ticks from the top of the scale down to zero.
    pub fn axis_ticks(&self, steps: u32, format: &CurrencyFormat) -> Vec<String> {
        let max = self.max_magnitude();
        if steps == 0 || max.is_zero() {
            return vec![format.axis_tick(Decimal::ZERO)];
        }

        (0..=steps)
            .rev()
            .map(|i| format.axis_tick(max * Decimal::from(i) / Decimal::from(steps)))
            .collect()
    }
}

pub fn performance_chart(holdings: &[Holding], format: &CurrencyFormat) -> PerformanceChart {
    let mut sorted = holdings.to_vec();
    sorted.sort_by(|a, b| b.pnl_percent().cmp(a.pnl_percent()));

    let labels = sorted.iter().map(|h| h.symbol().clone()).collect();

    let investment_data: Vec<Decimal> = sorted.iter().map(|h| *h.investment_value()).collect();
    let investment = PerformanceSeries {
        label: String::from(INVESTMENT_SERIES),
        background: vec![INVESTMENT_BACKGROUND; investment_data.len()],
        border: vec![INVESTMENT_BORDER; investment_data.len()],
        tooltips: series_tooltips(INVESTMENT_SERIES, &investment_data, format),
        data: investment_data,
    };

    let pnl_data: Vec<Decimal> = sorted.iter().map(|h| *h.pnl()).collect();
    let pnl = PerformanceSeries {
        label: String::from(PNL_SERIES),
        background: pnl_data
            .iter()
            .map(|v| if *v >= Decimal::ZERO { PROFIT_BACKGROUND } else { LOSS_BACKGROUND })
            .collect(),
        border: pnl_data
            .iter()
            .map(|v| if *v >= Decimal::ZERO { PROFIT_BORDER } else { LOSS_BORDER })
            .collect(),
        tooltips: series_tooltips(PNL_SERIES, &pnl_data, format),
        data: pnl_data,
    };

    PerformanceChart {
        labels,
        investment,
        pnl,
    }
}

fn series_tooltips(label: &str, data: &[Decimal], format: &CurrencyFormat) -> Vec<String> {
    data.iter()
        .map(|v| format!("{}: {}", label, format.currency(*v)))
        .collect()
}
