use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::classification::Classification;
use crate::shared::funnel::FunnelMetric;
use crate::shared::metrics::{cost_per_follower, new_followers};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub i64);

impl AggregateId for ContentId {
    fn value(&self) -> i64 {
        self.0
    }

    fn from_value(value: i64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A published piece of content and its organic/paid results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub name: String,
    pub project_id: ProjectId,
    pub classification: Classification,
    pub reach: i64,
    /// Engagement rate, percent
    pub engagement: f64,
    pub followers_before: i64,
    pub followers_after: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub amount_spent: f64,
    pub cpm: f64,
    /// Business code shown in tables, e.g. "C001"
    pub content_id: String,
    pub created_at: DateTime<Utc>,
}

impl Content {
    pub fn new_followers(&self) -> i64 {
        new_followers(self.followers_before, self.followers_after)
    }

    pub fn cost_per_follower(&self) -> String {
        cost_per_follower(self.amount_spent, self.followers_before, self.followers_after)
    }

    /// Stage metric used in creative rankings.
    /// Contents carry no view-through data, so C3/C4 have none.
    pub fn funnel_metric(&self) -> Option<FunnelMetric> {
        match self.classification {
            Classification::C1 => Some(FunnelMetric::Followers {
                gained: self.new_followers(),
            }),
            Classification::C2 => Some(FunnelMetric::Engagement {
                percent: self.engagement,
            }),
            Classification::C3 | Classification::C4 => None,
        }
    }
}

impl AggregateRoot for Content {
    type Id = ContentId;
    type Dto = ContentDto;

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
            classification: dto.classification,
            reach: dto.reach,
            engagement: dto.engagement,
            followers_before: dto.followers_before,
            followers_after: dto.followers_after,
            start_date: dto.start_date,
            end_date: dto.end_date,
            amount_spent: dto.amount_spent,
            cpm: dto.cpm,
            content_id: dto.content_id,
            created_at,
        }
    }

    fn collection_name() -> &'static str {
        "contents"
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Insert payload for a content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDto {
    pub name: String,
    pub project_id: ProjectId,
    pub classification: Classification,
    pub reach: i64,
    pub engagement: f64,
    pub followers_before: i64,
    pub followers_after: i64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub amount_spent: f64,
    pub cpm: f64,
    pub content_id: String,
}

/// Content table row with derived columns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRow {
    #[serde(flatten)]
    pub content: Content,
    /// Funnel stage name, e.g. "Atrair Seguidores"
    pub stage_name: String,
    pub new_followers: i64,
    pub cost_per_follower: String,
}

impl From<Content> for ContentRow {
    fn from(content: Content) -> Self {
        Self {
            stage_name: content.classification.display_name().to_string(),
            new_followers: content.new_followers(),
            cost_per_follower: content.cost_per_follower(),
            content,
        }
    }
}
