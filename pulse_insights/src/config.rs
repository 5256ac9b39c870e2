//! Insight engine configuration
//!
//! Every field has a serde default, so a config file only needs to name the
//! values it overrides. The default thresholds are heuristics carried over
//! as literal constants.

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engagement trend above which growth is reported
pub const ENGAGEMENT_GROWTH_THRESHOLD: f64 = 0.10;

/// Engagement trend below which a decline is reported
pub const ENGAGEMENT_DECLINE_THRESHOLD: f64 = -0.05;

/// Forecasts at or below this confidence are suppressed
pub const FORECAST_MIN_CONFIDENCE: f64 = 0.7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub engagement: EngagementConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
    #[serde(default)]
    pub opportunity: OpportunityConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementConfig {
    #[serde(default = "default_growth_threshold")]
    pub growth_threshold: f64,
    #[serde(default = "default_decline_threshold")]
    pub decline_threshold: f64,
    /// Only the most recent N records feed the trend; all records when unset
    #[serde(default)]
    pub trend_window: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityConfig {
    /// Segments with competition at or above this are not gaps
    #[serde(default = "default_max_competition")]
    pub max_competition: f64,
    /// Segments with potential at or below this are not gaps
    #[serde(default = "default_min_potential")]
    pub min_potential: f64,
    #[serde(default = "default_segments")]
    pub segments: Vec<MarketSegment>,
}

/// Audience segment with estimated competition and potential, both in `[0, 1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSegment {
    pub segment: String,
    pub competition: f64,
    pub potential: f64,
}

impl MarketSegment {
    pub fn new(segment: &str, competition: f64, potential: f64) -> Self {
        Self {
            segment: segment.to_string(),
            competition,
            potential,
        }
    }
}

fn default_growth_threshold() -> f64 { ENGAGEMENT_GROWTH_THRESHOLD }
fn default_decline_threshold() -> f64 { ENGAGEMENT_DECLINE_THRESHOLD }
fn default_min_confidence() -> f64 { FORECAST_MIN_CONFIDENCE }
fn default_max_competition() -> f64 { 0.5 }
fn default_min_potential() -> f64 { 0.8 }

fn default_segments() -> Vec<MarketSegment> {
    vec![
        MarketSegment::new("Gen Z Mobile Users", 0.3, 0.9),
        MarketSegment::new("B2B Decision Makers", 0.7, 0.8),
        MarketSegment::new("Health & Wellness Enthusiasts", 0.5, 0.85),
    ]
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            growth_threshold: default_growth_threshold(),
            decline_threshold: default_decline_threshold(),
            trend_window: None,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
        }
    }
}

impl Default for OpportunityConfig {
    fn default() -> Self {
        Self {
            max_competition: default_max_competition(),
            min_potential: default_min_potential(),
            segments: default_segments(),
        }
    }
}

impl InsightConfig {
    /// Load and validate a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded insight config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds are consistent
    pub fn validate(&self) -> Result<()> {
        let engagement = &self.engagement;
        if engagement.decline_threshold > engagement.growth_threshold {
            return Err(InsightError::ConfigError(format!(
                "decline_threshold ({}) must not exceed growth_threshold ({})",
                engagement.decline_threshold, engagement.growth_threshold
            )));
        }

        if engagement.trend_window.is_some_and(|window| window < 2) {
            return Err(InsightError::ConfigError(
                "trend_window must be at least 2 when set".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.forecast.min_confidence) {
            return Err(InsightError::ConfigError(format!(
                "forecast min_confidence must be within [0, 1], got {}",
                self.forecast.min_confidence
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = InsightConfig::default();

        assert_eq!(config.engagement.growth_threshold, 0.10);
        assert_eq!(config.engagement.decline_threshold, -0.05);
        assert_eq!(config.engagement.trend_window, None);
        assert_eq!(config.forecast.min_confidence, 0.7);
        assert_eq!(config.opportunity.segments.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = InsightConfig::from_toml_str(
            r#"
            [engagement]
            trend_window = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.engagement.trend_window, Some(7));
        assert_eq!(config.engagement.growth_threshold, ENGAGEMENT_GROWTH_THRESHOLD);
        assert_eq!(config.forecast, ForecastConfig::default());
        assert_eq!(config.opportunity, OpportunityConfig::default());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(InsightConfig::from_toml_str("").unwrap(), InsightConfig::default());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let result = InsightConfig::from_toml_str(
            r#"
            [engagement]
            growth_threshold = -0.2
            "#,
        );
        assert!(matches!(result, Err(InsightError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_tiny_window() {
        let result = InsightConfig::from_toml_str("[engagement]\ntrend_window = 1\n");
        assert!(matches!(result, Err(InsightError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = InsightConfig::from_toml_str("[engagement\n");
        assert!(matches!(result, Err(InsightError::TomlError(_))));
    }
}
