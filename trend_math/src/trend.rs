//! Normalized trend of an observation series
//!
//! The trend is the least-squares slope of `(index, value)` pairs divided by
//! the series mean, so a slope of 5 on a mean of 100 reads as `0.05`: a 5%
//! relative change per step.

use crate::stats::{mean, ols_slope};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a trend computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Slope relative to the series mean
    Normalized(f64),
    /// The series mean is zero or the arithmetic was not finite
    Indeterminate,
}

impl Trend {
    /// The normalized value, if the trend is defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Trend::Normalized(value) => Some(*value),
            Trend::Indeterminate => None,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Trend::Indeterminate)
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Normalized(value) => write!(f, "{:+.4}", value),
            Trend::Indeterminate => write!(f, "indeterminate"),
        }
    }
}

/// Compute the normalized trend of a series.
///
/// Fewer than two points carry no trend signal and yield `Normalized(0.0)`.
/// A zero mean (all zeros, or values cancelling out) yields `Indeterminate`,
/// as does any input that makes the result non-finite. A mean within rounding
/// error of zero, relative to the magnitude of the values, counts as zero.
pub fn compute_trend(series: &[f64]) -> Trend {
    let (slope, mean) = match (ols_slope(series), mean(series)) {
        (Some(slope), Some(mean)) => (slope, mean),
        _ => return Trend::Normalized(0.0),
    };

    let magnitude: f64 = series.iter().map(|v| v.abs()).sum();
    if mean.abs() <= f64::EPSILON * magnitude {
        warn!("Series of {} points has zero mean, trend is indeterminate", series.len());
        return Trend::Indeterminate;
    }

    let normalized = slope / mean;
    if !normalized.is_finite() {
        warn!("Non-finite trend over {} points (slope {}, mean {})", series.len(), slope, mean);
        return Trend::Indeterminate;
    }

    debug!("Trend over {} points: slope {:.4}, mean {:.4}, normalized {:.4}", series.len(), slope, mean, normalized);
    Trend::Normalized(normalized)
}
