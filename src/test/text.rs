#[cfg(test)]
mod tests {
    use crate::{
        app::text,
        report::{CurrencyFormat, render},
        test::sample_data,
    };

    #[test]
    fn prints_rows_in_table_order_with_totals() {
        let data = sample_data();
        let view = render(Some(&data), &CurrencyFormat::default()).unwrap();

        let output = text::render(&view);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[1], "HOLDINGS AS OF 2025-08-21 11:18:11");
        assert!(lines[3].starts_with("SYMBOL          QTY      AVG PRICE"));
        assert!(lines[5].starts_with("INFY            10       1600.00      1500.00    15000.00"));
        assert!(lines[8].starts_with("ITC "));
        assert_eq!(lines[10], "TOTAL INVESTMENT: ₹29,100.00");
        assert_eq!(lines[11], "TOTAL CURRENT VALUE: ₹28,700.00");
        assert!(lines[12].starts_with("OVERALL P&L: -₹400.00 (-1.37%)"));
    }
}
