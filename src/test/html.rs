#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::{
        app::html,
        models::{Holding, HoldingsData},
        report::{CurrencyFormat, render},
        test::sample_data,
    };

    fn page(data: &HoldingsData) -> String {
        let format = CurrencyFormat::default();
        let view = render(Some(data), &format).unwrap();
        html::generate(data, &view, &format).unwrap()
    }

    #[test]
    fn page_provides_every_element_the_script_fills() {
        let html = page(&sample_data());

        for id in [
            "id=\"date-value\"",
            "id=\"total-investment\"",
            "id=\"current-value\"",
            "id=\"overall-pnl\"",
            "id=\"overall-pnl-percent\"",
            "id=\"holdings-count\"",
            "id=\"holdings-table\"",
            "<tbody>",
            "id=\"allocation-chart\"",
            "id=\"performance-chart\"",
        ] {
            assert!(html.contains(id), "missing {}", id);
        }
        assert!(!html.contains("__"), "unfilled placeholder left in page");
    }

    #[test]
    fn page_embeds_chart_configurations() {
        let html = page(&sample_data());

        assert!(html.contains("\"type\":\"doughnut\""));
        assert!(html.contains("\"type\":\"bar\""));
        assert!(html.contains("\"label\":\"Investment Value\""));
        assert!(html.contains("\"backgroundColor\":[\"#4caf50\",\"#ffb74d\",\"#ffb74d\",\"#e57373\"]"));
        assert!(html.contains("\"locale\":\"en-IN\""));
    }

    #[test]
    fn embedded_text_cannot_close_the_script() {
        let mut data = sample_data();
        let mut holdings = data.holdings().clone();
        let first = &holdings[0];
        holdings[0] = Holding::new(
            String::from("EVIL"),
            String::from("</script><script>alert(1)</script>"),
            *first.quantity(),
            *first.avg_price(),
            *first.ltp(),
            *first.current_value(),
            *first.investment_value(),
            *first.pnl(),
            *first.pnl_percent(),
        );
        data = HoldingsData::new(holdings, data.summary().clone());

        let html = page(&data);

        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<\\/script><script>alert(1)<\\/script>"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("index.html");
        let data = sample_data();
        let format = CurrencyFormat::default();
        let view = render(Some(&data), &format).unwrap();

        html::write(&path, &data, &view, &format).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<!DOCTYPE html>"));
    }
}
