use serde::{Deserialize, Serialize};

use crate::shared::funnel::Creative;

/// Headline cards of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Followers gained by C1 contents; losses count as zero
    pub followers_gained: i64,
    /// Total C1 spend over followers gained, two decimals
    pub average_cost_per_follower: String,
    pub active_campaigns: usize,
    /// Spend against budget across all projects
    pub budget_percentage: i64,
    /// Contents plus campaigns
    pub total_invested: f64,
}

/// Response for the dashboard overview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub stats: OverviewStats,
    /// Best creative per funnel stage
    pub best_creatives: Vec<Creative>,
}
