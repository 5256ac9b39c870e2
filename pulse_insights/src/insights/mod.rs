//! Insight records and the producers that derive them from engagement data
//!
//! Each producer looks at the whole record set and either emits one insight
//! or stays silent.

use crate::config::{InsightConfig, MarketSegment};
use crate::data::EngagementRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use trend_math::Prediction;

pub mod competitor;
pub mod content;
pub mod engagement;
pub mod forecast;
pub mod opportunity;

pub use competitor::{analyze_competitors, find_top_performer, TopPerformer};
pub use content::{analyze_content, categorize_content, ContentStats};
pub use engagement::analyze_engagement;
pub use forecast::predict_trends;
pub use opportunity::{detect_opportunities, find_market_gaps};

/// Kind of insight, used by presentation layers to pick a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Insight,
    Recommendation,
    Prediction,
    Opportunity,
}

/// Urgency of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

/// Current value, observed change and suggested target of a metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightMetrics {
    pub current: f64,
    pub change: f64,
    pub target: f64,
}

/// Structured data backing an insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InsightDetail {
    TopPerformer(TopPerformer),
    Content(ContentStats),
    Forecast(Prediction),
    MarketGap(MarketSegment),
}

/// A single insight ready for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub category: String,
    pub title: String,
    pub description: String,
    pub actionable: String,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<InsightMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<InsightDetail>,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        category: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        actionable: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            kind,
            category: category.to_string(),
            title: title.into(),
            description: description.into(),
            actionable: actionable.into(),
            priority,
            confidence: None,
            metrics: None,
            detail: None,
        }
    }

    pub fn with_metrics(mut self, metrics: InsightMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_detail(mut self, detail: InsightDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}: {}", self.priority, self.category, self.title)?;
        writeln!(f, "  {}", self.description)?;
        write!(f, "  -> {}", self.actionable)
    }
}

/// Signature shared by all insight producers
pub type InsightProducer = fn(&[EngagementRecord], &InsightConfig) -> Option<Insight>;

/// Producers in the order their insights are reported
pub const PRODUCERS: [(&str, InsightProducer); 5] = [
    ("engagement", analyze_engagement),
    ("competitor", analyze_competitors),
    ("content", analyze_content),
    ("forecast", predict_trends),
    ("opportunity", detect_opportunities),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_insight_serializes_lowercase_kinds() {
        let insight = Insight::new(
            InsightKind::Opportunity,
            "Market Opportunity",
            "Title",
            "Description",
            "Do it",
            Priority::High,
        );
        let json = serde_json::to_value(&insight).unwrap();

        assert_eq!(json["kind"], "opportunity");
        assert_eq!(json["priority"], "high");
        assert!(json.get("confidence").is_none());
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_display() {
        let insight = Insight::new(
            InsightKind::Warning,
            "Engagement",
            "Engagement Declining",
            "Engagement has dropped",
            "Review content",
            Priority::Critical,
        );
        assert_eq!(
            insight.to_string(),
            "[critical] Engagement: Engagement Declining\n  Engagement has dropped\n  -> Review content"
        );
    }
}
