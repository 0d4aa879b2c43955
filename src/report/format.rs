use derive_getters::Getters;
use derive_new::new;
use rust_decimal::{Decimal, RoundingStrategy};
use strum_macros::{Display, EnumString};

/// Digit grouping of the integer part of a currency amount.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Grouping {
    /// `12,34,567.89`
    #[default]
    Indian,
    /// `1,234,567.89`
    Western,
}

impl Grouping {
    /// BCP 47 locale the browser report hands to `Intl.NumberFormat`.
    pub fn locale(&self) -> &'static str {
        match self {
            Grouping::Indian => "en-IN",
            Grouping::Western => "en-US",
        }
    }

    fn group_size(&self) -> usize {
        match self {
            Grouping::Indian => 2,
            Grouping::Western => 3,
        }
    }
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct CurrencyFormat {
    symbol: String,
    grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(String::from("₹"), Grouping::Indian)
    }
}

impl CurrencyFormat {
    /// Currency amount with grouping and exactly two fractional digits.
    pub fn currency(&self, value: Decimal) -> String {
        let rounded = round2(value);
        let fixed = format_fixed(rounded.abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };

        format!(
            "{}{}{}.{}",
            sign,
            self.symbol,
            group_digits(integer, self.grouping),
            fraction
        )
    }

    /// Y-axis label: currency with the first `.00` dropped.
    pub fn axis_tick(&self, value: Decimal) -> String {
        self.currency(value).replacen(".00", "", 1)
    }
}

pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two decimals, no grouping.
pub fn format_fixed(value: Decimal) -> String {
    format!("{:.2}", round2(value))
}

pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_fixed(value))
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let size = grouping.group_size();

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);

    groups.join(",")
}
