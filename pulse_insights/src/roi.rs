//! Campaign return on investment

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};

/// Spend and revenue attributed to one campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSpend {
    pub name: String,
    pub spend: f64,
    pub revenue: f64,
}

impl CampaignSpend {
    pub fn new(name: &str, spend: f64, revenue: f64) -> Self {
        Self {
            name: name.to_string(),
            spend,
            revenue,
        }
    }
}

/// ROI of a single campaign, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRoi {
    pub name: String,
    pub spend: f64,
    pub revenue: f64,
    pub roi: f64,
}

/// Totals and per-campaign ROI across a set of campaigns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub total_spend: f64,
    pub total_revenue: f64,
    pub roi: f64,
    pub campaigns: Vec<CampaignRoi>,
}

/// Net return as a percentage of spend
pub fn roi_percent(spend: f64, revenue: f64) -> Result<f64> {
    if !(spend.is_finite() && spend > 0.0) {
        return Err(InsightError::InvalidParameter(format!(
            "Spend must be a positive number, got {}",
            spend
        )));
    }
    if !revenue.is_finite() {
        return Err(InsightError::InvalidParameter(format!(
            "Revenue must be finite, got {}",
            revenue
        )));
    }

    Ok((revenue - spend) / spend * 100.0)
}

impl RoiSummary {
    pub fn from_campaigns(campaigns: &[CampaignSpend]) -> Result<Self> {
        if campaigns.is_empty() {
            return Err(InsightError::DataError(
                "At least one campaign is required for an ROI summary".to_string(),
            ));
        }

        let campaign_rois = campaigns
            .iter()
            .map(|c| {
                Ok(CampaignRoi {
                    name: c.name.clone(),
                    spend: c.spend,
                    revenue: c.revenue,
                    roi: roi_percent(c.spend, c.revenue)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total_spend: f64 = campaigns.iter().map(|c| c.spend).sum();
        let total_revenue: f64 = campaigns.iter().map(|c| c.revenue).sum();

        Ok(Self {
            total_spend,
            total_revenue,
            roi: roi_percent(total_spend, total_revenue)?,
            campaigns: campaign_rois,
        })
    }

    /// Campaign with the highest ROI, earliest first on ties
    pub fn best_campaign(&self) -> Option<&CampaignRoi> {
        self.campaigns
            .iter()
            .fold(None, |best: Option<&CampaignRoi>, c| match best {
                Some(b) if b.roi >= c.roi => Some(b),
                _ => Some(c),
            })
    }
}
