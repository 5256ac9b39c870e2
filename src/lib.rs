//! # Pulse
//!
//! `pulse_workspace` bundles the crates of the Pulse project: normalized
//! trend math and the engagement insight engine built on it.
//!
//! ## Example
//!
//! ```
//! use pulse_workspace::trend_math::{predict, Direction};
//! use pulse_workspace::pulse_insights::{EngagementRecord, InsightEngine};
//!
//! let series = [10.0, 12.0, 14.0, 16.0, 18.0];
//! assert_eq!(predict(&series).direction, Direction::Growth);
//!
//! let records: Vec<_> = series.iter().map(|&v| EngagementRecord::with_engagement(v)).collect();
//! let mut engine = InsightEngine::default();
//! assert!(!engine.generate_insights(&records).is_empty());
//! ```

pub use pulse_insights;
pub use trend_math;
