use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::project_status::status_label;
use crate::shared::format::format_money;
use crate::shared::metrics::{budget_bar_width, budget_percentage, budget_tone, BudgetTone};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl AggregateId for ProjectId {
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
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub monthly_budget: f64,
    /// Maintained by the store; zero for a fresh project
    #[serde(default)]
    pub current_spend: f64,
    /// Status code as stored. Unknown codes are kept verbatim.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn status_label(&self) -> String {
        status_label(&self.status)
    }

    pub fn budget_percentage(&self) -> i64 {
        budget_percentage(self.current_spend, self.monthly_budget)
    }

    pub fn is_over_budget(&self) -> bool {
        self.current_spend > self.monthly_budget
    }
}

impl AggregateRoot for Project {
    type Id = ProjectId;
    type Dto = ProjectDto;

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
            monthly_budget: dto.monthly_budget,
            current_spend: 0.0,
            status: dto.status,
            created_at,
        }
    }

    fn collection_name() -> &'static str {
        "projects"
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Insert payload for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    pub name: String,
    pub monthly_budget: f64,
    pub status: String,
}

/// Project joined with its budget metrics, one card per project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub budget_percentage: i64,
    pub bar_width: u8,
    pub tone: BudgetTone,
    pub status_label: String,
    pub over_budget: bool,
    /// e.g. "R$ 4.500,00"
    pub spend_display: String,
    pub budget_display: String,
}

/// Entry of the project picker in the content and campaign dialogs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOption {
    pub id: ProjectId,
    pub name: String,
}

impl From<&Project> for ProjectOption {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
        }
    }
}

impl From<Project> for ProjectCard {
    fn from(project: Project) -> Self {
        let budget_percentage = project.budget_percentage();
        Self {
            bar_width: budget_bar_width(budget_percentage),
            tone: budget_tone(budget_percentage),
            status_label: project.status_label(),
            over_budget: project.is_over_budget(),
            spend_display: format_money(project.current_spend),
            budget_display: format_money(project.monthly_budget),
            budget_percentage,
            project,
        }
    }
}
