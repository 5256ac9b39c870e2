//! Content type performance insight

use super::{Insight, InsightDetail, InsightKind, Priority};
use crate::config::InsightConfig;
use crate::data::EngagementRecord;
use serde::{Deserialize, Serialize};

/// Category used for records without a content type
pub const UNKNOWN_CONTENT: &str = "Unknown";

/// Engagement totals for one content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStats {
    pub content_type: String,
    pub count: usize,
    pub total_engagement: f64,
    pub average_engagement: f64,
}

impl ContentStats {
    fn new(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            count: 0,
            total_engagement: 0.0,
            average_engagement: 0.0,
        }
    }

    fn add(&mut self, engagement: f64) {
        self.count += 1;
        self.total_engagement += engagement;
        self.average_engagement = self.total_engagement / self.count as f64;
    }

    /// Weekly post count suggested when doubling down on this content type
    pub fn suggested_posts_per_week(&self) -> usize {
        (self.count as f64 * 1.5).ceil() as usize
    }
}

/// Group records by content type, in order of first appearance
pub fn categorize_content(records: &[EngagementRecord]) -> Vec<ContentStats> {
    let mut categories: Vec<ContentStats> = Vec::new();

    for record in records {
        let content_type = record
            .content_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_CONTENT);

        let index = match categories.iter().position(|c| c.content_type == content_type) {
            Some(index) => index,
            None => {
                categories.push(ContentStats::new(content_type));
                categories.len() - 1
            }
        };
        categories[index].add(record.engagement_or_zero());
    }

    categories
}

/// Recommend more of the content type with the best average engagement
pub fn analyze_content(records: &[EngagementRecord], _config: &InsightConfig) -> Option<Insight> {
    let best = categorize_content(records)
        .into_iter()
        .fold(None::<ContentStats>, |best, stats| match best {
            Some(current) if current.average_engagement >= stats.average_engagement => Some(current),
            _ => Some(stats),
        })?;

    Some(
        Insight::new(
            InsightKind::Recommendation,
            "Content Strategy",
            "High-Performing Content Type",
            format!(
                "{} content generates {:.0} average engagement",
                best.content_type, best.average_engagement
            ),
            format!(
                "Increase {} content to {} posts per week",
                best.content_type,
                best.suggested_posts_per_week()
            ),
            Priority::High,
        )
        .with_detail(InsightDetail::Content(best)),
    )
}
