//! Competitor strategy insight

use super::{Insight, InsightDetail, InsightKind, Priority};
use crate::config::InsightConfig;
use crate::data::EngagementRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Strategy reported when the top performer's record does not name one
pub const DEFAULT_STRATEGY: &str = "Video content";

/// Best performing competitor among the records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub competitor: String,
    /// Percentage above the mean engagement of all competitor records, rounded
    pub performance: i64,
    pub strategy: String,
    pub engagement: f64,
}

/// Find the competitor record with the highest engagement.
///
/// Only records naming a competitor with nonzero engagement take part; ties
/// keep the earliest record.
pub fn find_top_performer(records: &[EngagementRecord]) -> Option<TopPerformer> {
    let mut performers: Vec<(&str, &EngagementRecord, f64)> = records
        .iter()
        .filter_map(|record| {
            let name = record.competitor_name()?;
            let engagement = record.engagement.filter(|&e| e != 0.0)?;
            Some((name, record, engagement))
        })
        .collect();

    performers.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    let &(name, record, engagement) = performers.first()?;
    let average = performers.iter().map(|p| p.2).sum::<f64>() / performers.len() as f64;

    Some(TopPerformer {
        competitor: name.to_string(),
        performance: ((engagement / average - 1.0) * 100.0).round() as i64,
        strategy: record
            .strategy
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STRATEGY.to_string()),
        engagement,
    })
}

/// Point out the competitor whose strategy is outperforming the field
pub fn analyze_competitors(records: &[EngagementRecord], _config: &InsightConfig) -> Option<Insight> {
    let top = find_top_performer(records)?;

    Some(
        Insight::new(
            InsightKind::Insight,
            "Competitive Analysis",
            "Competitor Strategy Identified",
            format!(
                "{} is seeing {}% better engagement using {}",
                top.competitor, top.performance, top.strategy
            ),
            "Consider adapting this strategy for your campaigns",
            Priority::Medium,
        )
        .with_detail(InsightDetail::TopPerformer(top)),
    )
}
