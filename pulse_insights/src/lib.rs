//! # Pulse Insights
//!
//! Insight engine for marketing dashboards. Engagement records go in;
//! categorized, human-readable insights come out.
//!
//! ## Features
//!
//! - Engagement trend alerts built on the normalized trend from `trend_math`
//! - Competitor, content type and market gap analysis
//! - Next-week forecasts gated on a heuristic confidence score
//! - Campaign ROI summaries
//! - JSON report export and TOML configuration
//!
//! ## Quick Start
//!
//! ```no_run
//! use pulse_insights::{InsightConfig, InsightEngine, RecordLoader};
//!
//! let records = RecordLoader::from_json_path("records.json")?;
//! let mut engine = InsightEngine::new(InsightConfig::default());
//!
//! for insight in engine.generate_insights(&records) {
//!     println!("{}", insight);
//! }
//!
//! let report = engine.export_json()?;
//! # Ok::<(), pulse_insights::InsightError>(())
//! ```

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod insights;
pub mod roi;
pub mod synthetic;

// Re-export commonly used types
pub use crate::config::InsightConfig;
pub use crate::data::{EngagementRecord, MetricSeries, RecordLoader};
pub use crate::engine::{AnalyticsReport, InsightEngine};
pub use crate::error::{InsightError, Result};
pub use crate::insights::{Insight, InsightKind, Priority};
pub use crate::roi::{CampaignSpend, RoiSummary};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
