//! Engagement records and their loaders
//!
//! Records arrive already extracted from upstream sources (spreadsheets,
//! scrapers). Every field is optional; a missing numeric field reads as zero
//! wherever a series is built from the records.

use crate::error::{InsightError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One observation of campaign or competitor performance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<f64>,
}

impl EngagementRecord {
    /// Record carrying only an engagement value
    pub fn with_engagement(engagement: f64) -> Self {
        Self {
            engagement: Some(engagement),
            ..Self::default()
        }
    }

    /// Engagement value, zero when missing
    pub fn engagement_or_zero(&self) -> f64 {
        self.engagement.unwrap_or(0.0)
    }

    /// Competitor name, if present and non-blank
    pub fn competitor_name(&self) -> Option<&str> {
        self.competitor.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Engagement values of the records in order, missing values as zero
pub fn engagement_series(records: &[EngagementRecord]) -> Vec<f64> {
    records.iter().map(EngagementRecord::engagement_or_zero).collect()
}

/// The most recent `window` records, or all of them when no window is set
pub fn recent(records: &[EngagementRecord], window: Option<usize>) -> &[EngagementRecord] {
    match window {
        Some(size) if size < records.len() => &records[records.len() - size..],
        _ => records,
    }
}

/// Per-metric value series collected from records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub engagement: Vec<f64>,
    pub conversion: Vec<f64>,
    pub reach: Vec<f64>,
    pub sentiment: Vec<f64>,
}

impl MetricSeries {
    /// Collect the values each record actually carries
    pub fn from_records(records: &[EngagementRecord]) -> Self {
        let mut series = Self::default();
        series.extend(records);
        series
    }

    /// Append the values of further records
    pub fn extend(&mut self, records: &[EngagementRecord]) {
        for record in records {
            self.engagement.extend(record.engagement);
            self.conversion.extend(record.conversion);
            self.reach.extend(record.reach);
            self.sentiment.extend(record.sentiment);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.engagement.is_empty()
            && self.conversion.is_empty()
            && self.reach.is_empty()
            && self.sentiment.is_empty()
    }
}

/// Loader for engagement records
#[derive(Debug)]
pub struct RecordLoader;

impl RecordLoader {
    /// Load records from a JSON file holding an array of records
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Vec<EngagementRecord>> {
        let file = File::open(path.as_ref())?;
        let records = Self::from_json_reader(BufReader::new(file))?;
        log::info!("Loaded {} records from {}", records.len(), path.as_ref().display());
        Ok(records)
    }

    /// Load records from a reader yielding a JSON array of records
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<EngagementRecord>> {
        let records: Vec<EngagementRecord> = serde_json::from_reader(reader)?;
        Self::check(records)
    }

    /// Load records from a CSV file with a header row
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<EngagementRecord>> {
        let file = File::open(path.as_ref())?;
        let records = Self::from_csv_reader(file)?;
        log::info!("Loaded {} records from {}", records.len(), path.as_ref().display());
        Ok(records)
    }

    /// Load records from a reader yielding CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<EngagementRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<EngagementRecord>, csv::Error>>()?;
        Self::check(records)
    }

    /// Load records from a path, choosing the format by file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<EngagementRecord>> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_path(path),
            Some("csv") => Self::from_csv_path(path),
            other => Err(InsightError::InvalidParameter(format!(
                "Unsupported record file extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Reject numeric fields that are not finite
    fn check(records: Vec<EngagementRecord>) -> Result<Vec<EngagementRecord>> {
        for (index, record) in records.iter().enumerate() {
            let values = [record.engagement, record.conversion, record.reach, record.sentiment];
            if values.iter().flatten().any(|value| !value.is_finite()) {
                return Err(InsightError::DataError(format!(
                    "Record {} contains a non-finite value",
                    index
                )));
            }
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_series_defaults_missing_to_zero() {
        let records = vec![
            EngagementRecord::with_engagement(4.0),
            EngagementRecord::default(),
            EngagementRecord::with_engagement(6.5),
        ];
        assert_eq!(engagement_series(&records), vec![4.0, 0.0, 6.5]);
    }

    #[test]
    fn test_recent_window() {
        let records: Vec<_> = (1..=5).map(|v| EngagementRecord::with_engagement(v as f64)).collect();

        assert_eq!(engagement_series(recent(&records, Some(2))), vec![4.0, 5.0]);
        assert_eq!(recent(&records, Some(10)).len(), 5);
        assert_eq!(recent(&records, None).len(), 5);
    }

    #[test]
    fn test_competitor_name_ignores_blank() {
        let mut record = EngagementRecord::default();
        record.competitor = Some("   ".to_string());
        assert_eq!(record.competitor_name(), None);

        record.competitor = Some("Acme".to_string());
        assert_eq!(record.competitor_name(), Some("Acme"));
    }

    #[test]
    fn test_metric_series_skips_missing() {
        let records = vec![
            EngagementRecord {
                engagement: Some(1.0),
                reach: Some(100.0),
                ..EngagementRecord::default()
            },
            EngagementRecord {
                conversion: Some(0.2),
                ..EngagementRecord::default()
            },
        ];
        let series = MetricSeries::from_records(&records);

        assert_eq!(series.engagement, vec![1.0]);
        assert_eq!(series.conversion, vec![0.2]);
        assert_eq!(series.reach, vec![100.0]);
        assert!(series.sentiment.is_empty());
    }

    #[test]
    fn test_json_reader() {
        let json = r#"[
            {"date": "2024-03-01", "competitor": "Acme", "engagement": 12.5},
            {"content_type": "Video"}
        ]"#;
        let records = RecordLoader::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(records[0].engagement, Some(12.5));
        assert_eq!(records[1].content_type.as_deref(), Some("Video"));
        assert_eq!(records[1].engagement, None);
    }

    #[test]
    fn test_csv_reader() {
        let csv = "date,competitor,strategy,content_type,engagement,conversion,reach,sentiment\n\
                   2024-03-01,Acme,Reels,Video,12.5,,,\n\
                   2024-03-02,,,Blog,,0.3,,\n";
        let records = RecordLoader::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].competitor.as_deref(), Some("Acme"));
        assert_eq!(records[0].engagement, Some(12.5));
        assert_eq!(records[1].engagement, None);
        assert_eq!(records[1].conversion, Some(0.3));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = RecordLoader::from_path("records.xlsx");
        assert!(matches!(result, Err(InsightError::InvalidParameter(_))));
    }
}
