//! # Trend Math
//!
//! Normalized linear trend calculations for metric series.
//! This crate turns an ordered series of observations into a trend that is
//! relative to the series' own scale, and derives a directional prediction
//! with a heuristic confidence score from it.
//!
//! ```
//! use trend_math::{compute_trend, predict, Direction};
//!
//! let series = [10.0, 12.0, 14.0, 16.0, 18.0];
//! let trend = compute_trend(&series).value().unwrap();
//! assert!((trend - 2.0 / 14.0).abs() < 1e-12);
//!
//! let prediction = predict(&series);
//! assert_eq!(prediction.direction, Direction::Growth);
//! assert_eq!(prediction.magnitude_percent, 14.3);
//! ```

use thiserror::Error;

pub mod prediction;
pub mod stats;
pub mod trend;
pub mod window;

pub use prediction::{predict, Direction, Prediction, Recommendation};
pub use trend::{compute_trend, Trend};
pub use window::TrendWindow;

/// Errors that can occur in trend calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
