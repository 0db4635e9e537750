use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::classification::Classification;
use crate::shared::format::{format_thousands, to_fixed};
use crate::shared::funnel::FunnelMetric;
use crate::shared::metrics::total_engagements;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub i64);

impl AggregateId for CampaignId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

/// Share of viewers still watching at each quartile of the video, percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RetentionCurve {
    #[serde(default)]
    pub reproduction_25: f64,
    #[serde(default)]
    pub reproduction_50: f64,
    #[serde(default)]
    pub reproduction_75: f64,
    #[serde(default)]
    pub reproduction_95: f64,
    #[serde(default)]
    pub reproduction_100: f64,
}

impl RetentionCurve {
    /// (watched %, viewers %) pairs in playback order
    pub fn points(&self) -> [(u8, f64); 5] {
        [
            (25, self.reproduction_25),
            (50, self.reproduction_50),
            (75, self.reproduction_75),
            (95, self.reproduction_95),
            (100, self.reproduction_100),
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Paid nurture/awareness/conversion campaign (C2–C4)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub project_id: ProjectId,
    /// Business code of the promoted content
    pub content_id: String,
    pub classification: Classification,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reach: i64,
    pub engagement: f64,
    pub thruplay: f64,
    pub frequency: f64,
    pub amount_spent: f64,
    /// Computed once when the campaign is created
    pub cost_per_engagement: f64,
    #[serde(flatten)]
    pub retention: RetentionCurve,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn total_engagements(&self) -> f64 {
        total_engagements(self.reach, self.engagement)
    }

    /// Stage metric used in creative rankings. C1 is not a campaign stage.
    pub fn funnel_metric(&self) -> Option<FunnelMetric> {
        match self.classification {
            Classification::C1 => None,
            Classification::C2 => Some(FunnelMetric::Engagement {
                percent: self.engagement,
            }),
            Classification::C3 => Some(FunnelMetric::ThruPlay {
                percent: self.thruplay,
            }),
            Classification::C4 => Some(FunnelMetric::Completion {
                percent: self.retention.reproduction_100,
            }),
        }
    }
}

impl AggregateRoot for Campaign {
    type Id = CampaignId;
    type Dto = CampaignDto;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_dto(id: Self::Id, dto: Self::Dto, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: dto.name,
            project_id: dto.project_id,
            content_id: dto.content_id,
            classification: dto.classification,
            start_date: dto.start_date,
            end_date: dto.end_date,
            reach: dto.reach,
            engagement: dto.engagement,
            thruplay: dto.thruplay,
            frequency: dto.frequency,
            amount_spent: dto.amount_spent,
            cost_per_engagement: dto.cost_per_engagement,
            retention: dto.retention,
            created_at,
        }
    }

    fn collection_name() -> &'static str {
        "campaigns"
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Insert payload for a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDto {
    pub name: String,
    pub project_id: ProjectId,
    pub content_id: String,
    pub classification: Classification,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reach: i64,
    pub engagement: f64,
    pub thruplay: f64,
    pub frequency: f64,
    pub amount_spent: f64,
    pub cost_per_engagement: f64,
    #[serde(flatten)]
    pub retention: RetentionCurve,
}

/// Campaign table row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRow {
    #[serde(flatten)]
    pub campaign: Campaign,
    /// Stored cost, two decimals
    pub cost_per_engagement_display: String,
    /// e.g. "8.920"
    pub reach_display: String,
    /// Retention chart series, (watched %, viewers %)
    pub retention_points: [(u8, f64); 5],
}

impl From<Campaign> for CampaignRow {
    fn from(campaign: Campaign) -> Self {
        Self {
            cost_per_engagement_display: to_fixed(campaign.cost_per_engagement, 2),
            reach_display: format_thousands(campaign.reach),
            retention_points: campaign.retention.points(),
            campaign,
        }
    }
}
