use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Style class applied to signed figures.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SignClass {
    Positive,
    Negative,
}

impl SignClass {
    pub fn of(value: &Decimal) -> Self {
        if *value >= Decimal::ZERO {
            SignClass::Positive
        } else {
            SignClass::Negative
        }
    }
}

/// Allocation slice colour, bucketed by P&L percentage.
///
/// A holding at exactly 0% lands in `SmallNegative`.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AllocationBucket {
    StrongPositive,
    Positive,
    SmallNegative,
    StrongNegative,
}

impl AllocationBucket {
    pub fn of(pnl_percent: &Decimal) -> Self {
        if *pnl_percent > dec!(20) {
            AllocationBucket::StrongPositive
        } else if *pnl_percent > Decimal::ZERO {
            AllocationBucket::Positive
        } else if *pnl_percent > dec!(-10) {
            AllocationBucket::SmallNegative
        } else {
            AllocationBucket::StrongNegative
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            AllocationBucket::StrongPositive => "#4caf50",
            AllocationBucket::Positive => "#81c784",
            AllocationBucket::SmallNegative => "#ffb74d",
            AllocationBucket::StrongNegative => "#e57373",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            AllocationBucket::StrongPositive => (76, 175, 80),
            AllocationBucket::Positive => (129, 199, 132),
            AllocationBucket::SmallNegative => (255, 183, 77),
            AllocationBucket::StrongNegative => (229, 115, 115),
        }
    }
}

pub const INVESTMENT_BACKGROUND: &str = "rgba(30, 136, 229, 0.7)";
pub const INVESTMENT_BORDER: &str = "rgba(30, 136, 229, 1)";
pub const PROFIT_BACKGROUND: &str = "rgba(76, 175, 80, 0.7)";
pub const PROFIT_BORDER: &str = "rgba(76, 175, 80, 1)";
pub const LOSS_BACKGROUND: &str = "rgba(244, 67, 54, 0.7)";
pub const LOSS_BORDER: &str = "rgba(244, 67, 54, 1)";
