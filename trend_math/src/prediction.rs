//! Directional prediction derived from a normalized trend
//!
//! The confidence score is a heuristic, not a statistical interval: it maps
//! trend magnitude linearly onto `[0, 0.95]`.

use crate::trend::{compute_trend, Trend};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier from absolute trend to confidence
pub const CONFIDENCE_SCALE: f64 = 10.0;

/// Upper bound on the confidence score
pub const CONFIDENCE_CAP: f64 = 0.95;

/// Direction of the predicted movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Growth,
    Decline,
    /// Only produced for an indeterminate trend
    Indeterminate,
}

impl Direction {
    /// Verb used when describing the predicted change
    pub fn change_word(&self) -> &'static str {
        match self {
            Direction::Growth => "increase",
            Direction::Decline => "decrease",
            Direction::Indeterminate => "change",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Growth => write!(f, "Growth"),
            Direction::Decline => write!(f, "Decline"),
            Direction::Indeterminate => write!(f, "Indeterminate"),
        }
    }
}

/// Strategy recommendation attached to a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Keep the current course and scale what works
    Maintain,
    /// Change course and experiment
    Pivot,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::Maintain => "Maintain current strategy and scale successful campaigns",
            Recommendation::Pivot => "Pivot strategy and test new content formats",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Prediction derived from the trend of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Trend the prediction was derived from
    pub trend: Trend,
    /// Growth when the trend is strictly positive, decline otherwise
    pub direction: Direction,
    /// Absolute trend as a percentage, rounded to one decimal place
    pub magnitude_percent: f64,
    /// Heuristic confidence in `[0, 0.95]`
    pub confidence: f64,
    /// Maintain when the trend is strictly positive, pivot otherwise
    pub recommendation: Recommendation,
}

impl Prediction {
    /// Build a prediction from an already computed trend
    pub fn from_trend(trend: Trend) -> Self {
        match trend {
            Trend::Normalized(value) => {
                let growing = value > 0.0;
                Self {
                    trend,
                    direction: if growing { Direction::Growth } else { Direction::Decline },
                    magnitude_percent: round_to_tenth(value.abs() * 100.0),
                    confidence: confidence_for(value),
                    recommendation: if growing {
                        Recommendation::Maintain
                    } else {
                        Recommendation::Pivot
                    },
                }
            }
            Trend::Indeterminate => Self {
                trend,
                direction: Direction::Indeterminate,
                magnitude_percent: 0.0,
                confidence: 0.0,
                recommendation: Recommendation::Pivot,
            },
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {:.1}% (confidence {:.2}): {}",
            self.direction, self.magnitude_percent, self.confidence, self.recommendation
        )
    }
}

/// Predict the direction of a series from its normalized trend
pub fn predict(series: &[f64]) -> Prediction {
    Prediction::from_trend(compute_trend(series))
}

/// Confidence score for a normalized trend value
pub fn confidence_for(trend: f64) -> f64 {
    (trend.abs() * CONFIDENCE_SCALE).min(CONFIDENCE_CAP)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
