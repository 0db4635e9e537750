use serde::{Deserialize, Serialize};

use super::aggregate::{CampaignDto, RetentionCurve};
use crate::domain::a001_project::aggregate::ProjectId;
use crate::enums::classification::Classification;
use crate::shared::form_input::{
    parse_date, parse_float_or_zero, parse_int_or_zero, required, FormError,
};
use crate::shared::metrics::cost_per_engagement;

/// Raw "new campaign" dialog state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignForm {
    pub name: String,
    pub project_id: String,
    pub content_id: String,
    pub classification: String,
    pub start_date: String,
    pub end_date: String,
    pub reach: String,
    pub engagement: String,
    pub thruplay: String,
    pub frequency: String,
    pub amount_spent: String,
    pub reproduction_25: String,
    pub reproduction_50: String,
    pub reproduction_75: String,
    pub reproduction_95: String,
    pub reproduction_100: String,
}

impl Default for CampaignForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            project_id: String::new(),
            content_id: String::new(),
            classification: Classification::C2.code().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            reach: String::new(),
            engagement: String::new(),
            thruplay: String::new(),
            frequency: String::new(),
            amount_spent: String::new(),
            reproduction_25: String::new(),
            reproduction_50: String::new(),
            reproduction_75: String::new(),
            reproduction_95: String::new(),
            reproduction_100: String::new(),
        }
    }
}

impl CampaignForm {
    /// Validates the dialog and computes the cost per engagement that is
    /// stored with the campaign.
    pub fn into_dto(self) -> Result<CampaignDto, FormError> {
        let name = required(&self.name).ok_or(FormError::MissingName)?;
        if self.project_id.trim().is_empty() {
            return Err(FormError::MissingProject);
        }
        let classification = Classification::from_code(&self.classification)
            .ok_or_else(|| FormError::UnknownClassification(self.classification.clone()))?;
        if !classification.is_campaign_kind() {
            return Err(FormError::ClassificationNotAllowed(
                classification.code().to_string(),
            ));
        }

        let reach = parse_int_or_zero(&self.reach);
        let engagement = parse_float_or_zero(&self.engagement);
        let amount_spent = parse_float_or_zero(&self.amount_spent);
        // Stored as the rounded figure the table shows
        let cost = parse_float_or_zero(&cost_per_engagement(amount_spent, reach, engagement));

        Ok(CampaignDto {
            name,
            project_id: ProjectId(parse_int_or_zero(&self.project_id)),
            content_id: self.content_id.trim().to_string(),
            classification,
            start_date: parse_date(&self.start_date),
            end_date: parse_date(&self.end_date),
            reach,
            engagement,
            thruplay: parse_float_or_zero(&self.thruplay),
            frequency: parse_float_or_zero(&self.frequency),
            amount_spent,
            cost_per_engagement: cost,
            retention: RetentionCurve {
                reproduction_25: parse_float_or_zero(&self.reproduction_25),
                reproduction_50: parse_float_or_zero(&self.reproduction_50),
                reproduction_75: parse_float_or_zero(&self.reproduction_75),
                reproduction_95: parse_float_or_zero(&self.reproduction_95),
                reproduction_100: parse_float_or_zero(&self.reproduction_100),
            },
        })
    }
}
