//! Synthetic metric series for demos and tests

use crate::data::EngagementRecord;
use crate::error::{InsightError, Result};
use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Generate a noisy upward-drifting series clamped to `[min, max]`.
///
/// The walk starts 30% of the way into the range and each step adds an even
/// share of the range plus uniform noise scaled by `volatility`.
pub fn generate_trend_data<R: Rng + ?Sized>(
    points: usize,
    min: f64,
    max: f64,
    volatility: f64,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if points == 0 {
        return Err(InsightError::InvalidParameter(
            "Number of points must be greater than zero".to_string(),
        ));
    }
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(InsightError::InvalidParameter(format!(
            "Range must be finite with min < max, got [{}, {}]",
            min, max
        )));
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(InsightError::InvalidParameter(format!(
            "Volatility must be non-negative, got {}",
            volatility
        )));
    }

    let range = max - min;
    let step = range / points as f64;
    let mut current = min + range * 0.3;
    let mut data = Vec::with_capacity(points);

    for _ in 0..points {
        let noise = (rng.gen::<f64>() - 0.5) * volatility * range;
        current = (current + step + noise).clamp(min, max);
        data.push(current);
    }

    Ok(data)
}

/// The `days` consecutive dates ending at `today`, oldest first
pub fn day_range(days: usize, today: NaiveDate) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .map(|offset| today - Duration::days(offset as i64))
        .collect()
}

/// Short date labels for the `days` days ending at `today`, oldest first
pub fn time_labels(days: usize, today: NaiveDate) -> Vec<String> {
    day_range(days, today)
        .into_iter()
        .map(|date| date.format("%b %-d").to_string())
        .collect()
}

/// One dated engagement record per day ending at `today`, values drawn from
/// [`generate_trend_data`] over the typical engagement range
pub fn demo_records<R: Rng + ?Sized>(
    points: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Result<Vec<EngagementRecord>> {
    let values = generate_trend_data(points, 65.0, 112.0, 0.15, rng)?;

    Ok(day_range(points, today)
        .into_iter()
        .zip(values)
        .map(|(date, value)| EngagementRecord {
            date: Some(date),
            ..EngagementRecord::with_engagement(value)
        })
        .collect())
}
