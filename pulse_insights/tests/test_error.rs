use pulse_insights::roi::roi_percent;
use pulse_insights::{InsightError, RecordLoader};
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let insight_error = InsightError::from(io_error);
    assert!(matches!(insight_error, InsightError::IoError(_)));

    let json_error = serde_json::from_str::<Vec<f64>>("[1.0,").unwrap_err();
    assert!(matches!(InsightError::from(json_error), InsightError::JsonError(_)));

    let math_error = trend_math::TrendWindow::new(0).unwrap_err();
    assert!(matches!(InsightError::from(math_error), InsightError::MathError(_)));
}

#[test]
fn test_error_display() {
    let error = InsightError::InvalidParameter("spend must be positive".to_string());
    assert_eq!(error.to_string(), "Invalid parameter: spend must be positive");

    let error = InsightError::from(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
    let error_string = error.to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}

#[test]
fn test_loader_errors() {
    assert!(matches!(
        RecordLoader::from_json_path("/nonexistent/records.json"),
        Err(InsightError::IoError(_))
    ));
    assert!(matches!(
        RecordLoader::from_json_reader("{\"not\": \"an array\"}".as_bytes()),
        Err(InsightError::JsonError(_))
    ));
    assert!(matches!(
        RecordLoader::from_csv_reader("engagement\nabc\n".as_bytes()),
        Err(InsightError::CsvError(_))
    ));
}

#[test]
fn test_roi_errors() {
    assert!(matches!(roi_percent(-1.0, 10.0), Err(InsightError::InvalidParameter(_))));
    assert!(matches!(roi_percent(10.0, f64::NAN), Err(InsightError::InvalidParameter(_))));
}
