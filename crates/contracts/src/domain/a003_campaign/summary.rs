use serde::{Deserialize, Serialize};

use super::aggregate::Campaign;
use crate::shared::metrics::average_engagement;

/// Summary cards under the campaigns table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub count: usize,
    pub total_reach: i64,
    /// One decimal, "0.0" when there are no campaigns
    pub average_engagement: String,
    pub total_invested: f64,
}

impl CampaignSummary {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            count: campaigns.len(),
            total_reach: campaigns.iter().map(|c| c.reach).sum(),
            average_engagement: average_engagement(campaigns.iter().map(|c| c.engagement)),
            total_invested: campaigns.iter().map(|c| c.amount_spent).sum(),
        }
    }
}
