use serde::{Deserialize, Serialize};

use super::aggregate::Project;
use crate::shared::metrics::budget_percentage;

/// Budget totals across a list of projects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub count: usize,
    pub total_budget: f64,
    pub total_spend: f64,
    pub overall_percentage: i64,
}

impl ProjectSummary {
    pub fn from_projects(projects: &[Project]) -> Self {
        let total_budget: f64 = projects.iter().map(|p| p.monthly_budget).sum();
        let total_spend: f64 = projects.iter().map(|p| p.current_spend).sum();
        Self {
            count: projects.len(),
            total_budget,
            total_spend,
            overall_percentage: budget_percentage(total_spend, total_budget),
        }
    }
}
