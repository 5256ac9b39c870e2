//! Market gap insight

use super::{Insight, InsightDetail, InsightKind, Priority};
use crate::config::{InsightConfig, MarketSegment, OpportunityConfig};
use crate::data::EngagementRecord;
use std::cmp::Ordering;

/// Segments with low competition and high potential, best gap first
pub fn find_market_gaps(config: &OpportunityConfig) -> Vec<MarketSegment> {
    let mut gaps: Vec<MarketSegment> = config
        .segments
        .iter()
        .filter(|s| s.competition < config.max_competition && s.potential > config.min_potential)
        .cloned()
        .collect();

    gaps.sort_by(|a, b| {
        let gap_a = a.potential - a.competition;
        let gap_b = b.potential - b.competition;
        gap_b.partial_cmp(&gap_a).unwrap_or(Ordering::Equal)
    });

    gaps
}

/// Suggest a campaign for the most underserved segment
pub fn detect_opportunities(_records: &[EngagementRecord], config: &InsightConfig) -> Option<Insight> {
    let top = find_market_gaps(&config.opportunity).into_iter().next()?;

    Some(
        Insight::new(
            InsightKind::Opportunity,
            "Market Opportunity",
            "Untapped Market Segment",
            format!("{} shows high potential with low competition", top.segment),
            format!("Launch targeted campaign for {} audience", top.segment),
            Priority::High,
        )
        .with_detail(InsightDetail::MarketGap(top)),
    )
}
