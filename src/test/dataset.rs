#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    use crate::{
        dataset::{self, DatasetFormat},
        errors::ReportError,
        test::{ICICI_DATA_JS, sample_data},
    };

    #[test]
    fn loads_script_wrapper() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holdings_data.js");
        fs::write(&path, ICICI_DATA_JS).unwrap();

        let data = dataset::load(&path).unwrap().unwrap();

        assert_eq!(data.holdings().len(), 1);
        let holding = &data.holdings()[0];
        assert_eq!(holding.symbol(), "ICICIB22");
        assert_eq!(*holding.quantity(), 1);
        assert_eq!(*holding.avg_price(), dec!(27.68));
        assert_eq!(*data.summary().holdings_count(), 1);
        assert_eq!(data.summary().report_date(), "2025-08-21 11:18:11");
    }

    #[test]
    fn plain_json_and_wrapper_parse_identically() {
        let json = ICICI_DATA_JS
            .trim_start_matches("const holdingsData = ")
            .trim_end_matches(';');

        let from_json = dataset::parse(json).unwrap();
        let from_script = dataset::parse(ICICI_DATA_JS).unwrap();

        assert!(from_json.is_some());
        assert_eq!(from_json, from_script);
    }

    #[test]
    fn missing_file_means_no_dataset() {
        let dir = tempdir().unwrap();
        let result = dataset::load(&dir.path().join("absent.json")).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn incomplete_or_empty_content_means_no_dataset() {
        assert!(dataset::parse("").unwrap().is_none());
        assert!(dataset::parse("null").unwrap().is_none());
        assert!(dataset::parse(r#"{"holdings": []}"#).unwrap().is_none());
        assert!(dataset::parse("const holdingsData = null;").unwrap().is_none());
    }

    #[test]
    fn malformed_content_is_invalid() {
        let err = dataset::parse("const holdingsData = {holdings: oops};").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::InvalidDataset(_))
        ));
    }

    #[test]
    fn wrong_field_types_are_invalid() {
        let text = r#"{"holdings": [{"symbol": 5}], "summary": {}}"#;
        let err = dataset::parse(text).unwrap_err();

        assert!(err.to_string().starts_with("Invalid holdings dataset"));
    }

    #[test]
    fn saved_script_wrapper_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report").join("holdings_data.js");
        let data = sample_data();

        dataset::save(&path, &data, DatasetFormat::from_path(&path)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("const holdingsData = {\n  \"holdings\""));
        assert!(contents.ends_with("};"));
        assert!(contents.contains("\"current_value\": 4250"));

        let loaded = dataset::load(&path).unwrap().unwrap();
        assert_eq!(loaded.holdings().len(), data.holdings().len());
        assert_eq!(loaded.summary().total_pnl(), data.summary().total_pnl());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DatasetFormat::from_path("a/holdings_data.js".as_ref()),
            DatasetFormat::JsWrapper
        );
        assert_eq!(
            DatasetFormat::from_path("a/holdings_data.json".as_ref()),
            DatasetFormat::Json
        );
        assert_eq!(DatasetFormat::from_path("holdings".as_ref()), DatasetFormat::Json);
    }
}
