//! Next-week engagement forecast

use super::{Insight, InsightDetail, InsightKind, Priority};
use crate::config::InsightConfig;
use crate::data::{engagement_series, EngagementRecord};
use trend_math::predict;

/// Surface the engagement prediction when it is confident enough.
///
/// With the default gate of 0.7 this only happens for trends steeper than
/// 7% per step in either direction.
pub fn predict_trends(records: &[EngagementRecord], config: &InsightConfig) -> Option<Insight> {
    let prediction = predict(&engagement_series(records));
    log::debug!("Engagement forecast: {}", prediction);

    if prediction.confidence <= config.forecast.min_confidence {
        return None;
    }

    Some(
        Insight::new(
            InsightKind::Prediction,
            "Trend Forecast",
            format!("{} Expected Next Week", prediction.direction),
            format!(
                "Our AI model predicts a {:.1}% {} in engagement",
                prediction.magnitude_percent,
                prediction.direction.change_word()
            ),
            prediction.recommendation.message(),
            Priority::Medium,
        )
        .with_confidence(prediction.confidence)
        .with_detail(InsightDetail::Forecast(prediction)),
    )
}
