use serde::{Deserialize, Serialize};

use super::aggregate::ContentDto;
use crate::domain::a001_project::aggregate::ProjectId;
use crate::enums::classification::Classification;
use crate::shared::form_input::{
    parse_date, parse_float_or_zero, parse_int_or_zero, required, FormError,
};

/// Raw "new content" dialog state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentForm {
    pub name: String,
    pub project_id: String,
    pub classification: String,
    pub reach: String,
    pub engagement: String,
    pub followers_before: String,
    pub followers_after: String,
    pub start_date: String,
    pub end_date: String,
    pub amount_spent: String,
    pub cpm: String,
    pub content_id: String,
}

impl Default for ContentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            project_id: String::new(),
            classification: Classification::C1.code().to_string(),
            reach: String::new(),
            engagement: String::new(),
            followers_before: String::new(),
            followers_after: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            amount_spent: String::new(),
            cpm: String::new(),
            content_id: String::new(),
        }
    }
}

impl ContentForm {
    pub fn into_dto(self) -> Result<ContentDto, FormError> {
        let name = required(&self.name).ok_or(FormError::MissingName)?;
        if self.project_id.trim().is_empty() {
            return Err(FormError::MissingProject);
        }
        let classification = Classification::from_code(&self.classification)
            .ok_or_else(|| FormError::UnknownClassification(self.classification.clone()))?;

        Ok(ContentDto {
            name,
            project_id: ProjectId(parse_int_or_zero(&self.project_id)),
            classification,
            reach: parse_int_or_zero(&self.reach),
            engagement: parse_float_or_zero(&self.engagement),
            followers_before: parse_int_or_zero(&self.followers_before),
            followers_after: parse_int_or_zero(&self.followers_after),
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
            amount_spent: parse_float_or_zero(&self.amount_spent),
            cpm: parse_float_or_zero(&self.cpm),
            content_id: self.content_id.trim().to_string(),
        })
    }
}
