mod dataset;
mod format;
mod html;
mod text;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Holding, HoldingsData, Summary};

pub const ICICI_DATA_JS: &str = r#"const holdingsData = {
  "holdings": [
    {
      "symbol": "ICICIB22",
      "company_name": "ICICIPRAMC - BHARATIWIN",
      "quantity": 1,
      "avg_price": 27.68,
      "ltp": 108.01,
      "current_value": 108.01,
      "investment_value": 27.68,
      "pnl": 80.33,
      "pnl_percent": 290.20953757225436
    }
  ],
  "summary": {
    "total_investment": 27.68,
    "total_current_value": 108.01,
    "total_pnl": 80.33000000000001,
    "total_pnl_percent": 290.20953757225436,
    "holdings_count": 1,
    "report_date": "2025-08-21 11:18:11"
  }
};"#;

pub fn holding(symbol: &str, current_value: Decimal, investment_value: Decimal) -> Holding {
    let pnl = current_value - investment_value;
    let pnl_percent = if investment_value.is_zero() {
        Decimal::ZERO
    } else {
        pnl / investment_value * dec!(100)
    };

    Holding::new(
        symbol.to_string(),
        format!("{} LTD", symbol),
        10,
        investment_value / dec!(10),
        current_value / dec!(10),
        current_value,
        investment_value,
        pnl,
        pnl_percent,
    )
}

pub fn sample_data() -> HoldingsData {
    let holdings = vec![
        holding("TCS", dec!(4250), dec!(3500)),
        holding("INFY", dec!(15000), dec!(16000)),
        holding("HDFCBANK", dec!(9000), dec!(9000)),
        holding("ITC", dec!(450), dec!(600)),
    ];

    let total_investment: Decimal = holdings.iter().map(|h| *h.investment_value()).sum();
    let total_current_value: Decimal = holdings.iter().map(|h| *h.current_value()).sum();
    let total_pnl = total_current_value - total_investment;

    let summary = Summary::new(
        total_investment,
        total_current_value,
        total_pnl,
        total_pnl / total_investment * dec!(100),
        holdings.len(),
        String::from("2025-08-21 11:18:11"),
    );

    HoldingsData::new(holdings, summary)
}
