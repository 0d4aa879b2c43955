#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::report::{
        CurrencyFormat, Grouping,
        format::{format_fixed, format_percent},
    };

    #[test]
    fn currency_uses_indian_grouping_by_default() {
        let format = CurrencyFormat::default();

        assert_eq!(format.currency(dec!(108.01)), "₹108.01");
        assert_eq!(format.currency(dec!(1234567.891)), "₹12,34,567.89");
        assert_eq!(format.currency(dec!(100000)), "₹1,00,000.00");
        assert_eq!(format.currency(dec!(999)), "₹999.00");
    }

    #[test]
    fn currency_supports_western_grouping() {
        let format = CurrencyFormat::new(String::from("$"), Grouping::Western);

        assert_eq!(format.currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format.currency(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        let format = CurrencyFormat::default();

        assert_eq!(format.currency(dec!(-80.33)), "-₹80.33");
        assert_eq!(format.currency(dec!(-123456.7)), "-₹1,23,456.70");
        assert_eq!(format.currency(dec!(-0.001)), "₹0.00");
    }

    #[test]
    fn fixed_rounds_half_away_from_zero_and_pads() {
        assert_eq!(format_fixed(dec!(290.20953757225436)), "290.21");
        assert_eq!(format_fixed(dec!(0.125)), "0.13");
        assert_eq!(format_fixed(dec!(-0.125)), "-0.13");
        assert_eq!(format_fixed(dec!(27.6)), "27.60");
        assert_eq!(format_fixed(dec!(1)), "1.00");
    }

    #[test]
    fn percent_appends_sign() {
        assert_eq!(format_percent(dec!(290.20953757225436)), "290.21%");
        assert_eq!(format_percent(dec!(-6.25)), "-6.25%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn axis_tick_drops_whole_number_fraction() {
        let format = CurrencyFormat::default();

        assert_eq!(format.axis_tick(dec!(5000)), "₹5,000");
        assert_eq!(format.axis_tick(dec!(2500.5)), "₹2,500.50");
        assert_eq!(format.axis_tick(dec!(0)), "₹0");
    }

    #[test]
    fn grouping_parses_case_insensitively() {
        assert_eq!("indian".parse::<Grouping>().unwrap(), Grouping::Indian);
        assert_eq!("Western".parse::<Grouping>().unwrap(), Grouping::Western);
        assert!("metric".parse::<Grouping>().is_err());
        assert_eq!(Grouping::Indian.locale(), "en-IN");
    }
}
