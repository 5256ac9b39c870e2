//! Insight engine owning the analysis context
//!
//! The engine keeps the configuration, the metric series seen so far and the
//! insights from the latest run. Callers own it and pass it where needed.

use crate::config::InsightConfig;
use crate::data::{EngagementRecord, MetricSeries};
use crate::error::Result;
use crate::insights::{Insight, PRODUCERS};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the engine state for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub metrics: MetricSeries,
    pub insights: Vec<Insight>,
    pub generated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct InsightEngine {
    config: InsightConfig,
    metrics: MetricSeries,
    insights: Vec<Insight>,
}

impl InsightEngine {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            config,
            metrics: MetricSeries::default(),
            insights: Vec::new(),
        }
    }

    /// Run every producer over the records and keep the resulting insights.
    ///
    /// Insights from a previous run are replaced; metric series accumulate.
    pub fn generate_insights(&mut self, records: &[EngagementRecord]) -> &[Insight] {
        self.metrics.extend(records);

        self.insights = PRODUCERS
            .iter()
            .filter_map(|(name, producer)| {
                let insight = producer(records, &self.config);
                if insight.is_none() {
                    log::debug!("No {} insight for {} records", name, records.len());
                }
                insight
            })
            .collect();

        log::info!(
            "Generated {} insights from {} records",
            self.insights.len(),
            records.len()
        );
        &self.insights
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn metrics(&self) -> &MetricSeries {
        &self.metrics
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Drop collected metrics and insights, keeping the configuration
    pub fn reset(&mut self) {
        self.metrics = MetricSeries::default();
        self.insights.clear();
    }

    /// Report stamped with the current time
    pub fn report(&self) -> AnalyticsReport {
        self.report_at(Utc::now())
    }

    /// Report stamped with the given time
    pub fn report_at(&self, generated: DateTime<Utc>) -> AnalyticsReport {
        AnalyticsReport {
            metrics: self.metrics.clone(),
            insights: self.insights.clone(),
            generated,
        }
    }

    /// Pretty-printed JSON of the current report
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::InsightKind;
    use chrono::TimeZone;

    fn records(values: &[f64]) -> Vec<EngagementRecord> {
        values.iter().map(|&v| EngagementRecord::with_engagement(v)).collect()
    }

    #[test]
    fn test_rising_engagement_run() {
        let mut engine = InsightEngine::default();
        let kinds: Vec<_> = engine
            .generate_insights(&records(&[10.0, 12.0, 14.0, 16.0, 18.0]))
            .iter()
            .map(|i| i.kind)
            .collect();

        // No competitors in the data; content falls back to "Unknown"
        assert_eq!(
            kinds,
            vec![
                InsightKind::Success,
                InsightKind::Recommendation,
                InsightKind::Prediction,
                InsightKind::Opportunity,
            ]
        );
    }

    #[test]
    fn test_runs_replace_insights_and_accumulate_metrics() {
        let mut engine = InsightEngine::default();
        engine.generate_insights(&records(&[10.0, 12.0, 14.0, 16.0, 18.0]));
        engine.generate_insights(&records(&[0.0, 0.0, 0.0]));

        let kinds: Vec<_> = engine.insights().iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![InsightKind::Recommendation, InsightKind::Opportunity]);
        assert_eq!(engine.metrics().engagement.len(), 8);

        engine.reset();
        assert!(engine.insights().is_empty());
        assert!(engine.metrics().is_empty());
    }

    #[test]
    fn test_report_at() {
        let mut engine = InsightEngine::new(InsightConfig::default());
        engine.generate_insights(&records(&[5.0, 5.0]));

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let report = engine.report_at(at);
        assert_eq!(report.generated, at);
        assert_eq!(report.metrics.engagement, vec![5.0, 5.0]);
        assert_eq!(report.insights, engine.insights());
    }
}
