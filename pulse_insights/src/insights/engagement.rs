//! Engagement trend insight

use super::{Insight, InsightKind, InsightMetrics, Priority};
use crate::config::InsightConfig;
use crate::data::{engagement_series, recent, EngagementRecord};
use trend_math::{compute_trend, stats::mean};

/// Report a notable rise or fall in engagement.
///
/// Growth must exceed the growth threshold and decline must fall below the
/// decline threshold; both comparisons are strict. An indeterminate trend
/// reports nothing.
pub fn analyze_engagement(records: &[EngagementRecord], config: &InsightConfig) -> Option<Insight> {
    let average = mean(&engagement_series(records))?;
    let window = recent(records, config.engagement.trend_window);
    let trend = match compute_trend(&engagement_series(window)).value() {
        Some(trend) => trend,
        None => {
            log::warn!("Engagement trend is indeterminate over {} records", window.len());
            return None;
        }
    };

    if trend > config.engagement.growth_threshold {
        Some(
            Insight::new(
                InsightKind::Success,
                "Engagement",
                "Engagement Trending Up",
                format!(
                    "Your engagement rate has increased by {:.1}% over the past week",
                    trend * 100.0
                ),
                "Continue with current content strategy and consider increasing posting frequency",
                Priority::High,
            )
            .with_metrics(InsightMetrics {
                current: average,
                change: trend,
                target: average * 1.2,
            }),
        )
    } else if trend < config.engagement.decline_threshold {
        Some(
            Insight::new(
                InsightKind::Warning,
                "Engagement",
                "Engagement Declining",
                format!("Engagement has dropped by {:.1}% this week", (trend * 100.0).abs()),
                "Review recent content performance and adjust strategy",
                Priority::Critical,
            )
            .with_metrics(InsightMetrics {
                current: average,
                change: trend,
                target: average * 1.5,
            }),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn records(values: &[f64]) -> Vec<EngagementRecord> {
        values.iter().map(|&v| EngagementRecord::with_engagement(v)).collect()
    }

    #[test]
    fn test_trending_up() {
        let insight = analyze_engagement(&records(&[10.0, 12.0, 14.0, 16.0, 18.0]), &InsightConfig::default()).unwrap();

        assert_eq!(insight.kind, InsightKind::Success);
        assert_eq!(insight.priority, Priority::High);
        assert_eq!(insight.title, "Engagement Trending Up");
        assert_eq!(
            insight.description,
            "Your engagement rate has increased by 14.3% over the past week"
        );
        let metrics = insight.metrics.unwrap();
        assert_relative_eq!(metrics.current, 14.0);
        assert_relative_eq!(metrics.target, 16.8, epsilon = 1e-12);
    }

    #[test]
    fn test_declining() {
        // slope -1 over mean 10
        let insight = analyze_engagement(&records(&[12.0, 11.0, 10.0, 9.0, 8.0]), &InsightConfig::default()).unwrap();

        assert_eq!(insight.kind, InsightKind::Warning);
        assert_eq!(insight.priority, Priority::Critical);
        assert_eq!(insight.description, "Engagement has dropped by 10.0% this week");
        assert_relative_eq!(insight.metrics.unwrap().target, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mild_trend_is_silent() {
        // slope 1 over mean 20 is +0.05
        assert!(analyze_engagement(&records(&[18.0, 19.0, 20.0, 21.0, 22.0]), &InsightConfig::default()).is_none());
        // slope -0.5 over mean 20 is -0.025
        assert!(analyze_engagement(&records(&[21.0, 20.5, 20.0, 19.5, 19.0]), &InsightConfig::default()).is_none());
    }

    #[test]
    fn test_thresholds_are_strict() {
        // [10, 20, 30] has slope 10 over mean 20, exactly +0.5
        let rising = records(&[10.0, 20.0, 30.0]);
        let falling = records(&[30.0, 20.0, 10.0]);

        let mut config = InsightConfig::default();
        config.engagement.growth_threshold = 0.5;
        config.engagement.decline_threshold = -0.5;
        assert!(analyze_engagement(&rising, &config).is_none());
        assert!(analyze_engagement(&falling, &config).is_none());

        config.engagement.growth_threshold = 0.49;
        config.engagement.decline_threshold = -0.49;
        assert_eq!(analyze_engagement(&rising, &config).unwrap().kind, InsightKind::Success);
        assert_eq!(analyze_engagement(&falling, &config).unwrap().kind, InsightKind::Warning);
    }

    #[test]
    fn test_empty_and_zero_input_is_silent() {
        assert!(analyze_engagement(&[], &InsightConfig::default()).is_none());
        assert!(analyze_engagement(&records(&[0.0, 0.0, 0.0]), &InsightConfig::default()).is_none());
    }

    #[test]
    fn test_trend_window_limits_series() {
        let mut config = InsightConfig::default();
        config.engagement.trend_window = Some(3);

        // Last three points are flat, the earlier rise is ignored
        let data = records(&[1.0, 5.0, 10.0, 10.0, 10.0]);
        assert!(analyze_engagement(&data, &InsightConfig::default()).is_some());
        assert!(analyze_engagement(&data, &config).is_none());
    }
}
