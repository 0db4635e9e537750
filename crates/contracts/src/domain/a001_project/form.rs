use serde::{Deserialize, Serialize};

use super::aggregate::ProjectDto;
use crate::enums::project_status::ProjectStatus;
use crate::shared::form_input::{parse_float_or_zero, required, FormError};

/// Raw "new project" dialog state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    pub monthly_budget: String,
    pub status: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            monthly_budget: String::new(),
            status: ProjectStatus::default().code().to_string(),
        }
    }
}

impl ProjectForm {
    /// Both name and budget must be filled in. Unknown statuses fall back
    /// to `active`.
    pub fn into_dto(self) -> Result<ProjectDto, FormError> {
        let name = required(&self.name).ok_or(FormError::MissingName)?;
        if self.monthly_budget.trim().is_empty() {
            return Err(FormError::MissingBudget);
        }
        let status = ProjectStatus::from_code(self.status.trim()).unwrap_or_default();

        Ok(ProjectDto {
            name,
            monthly_budget: parse_float_or_zero(&self.monthly_budget),
            status: status.code().to_string(),
        })
    }
}
