use anyhow::Context;
use contracts::domain::a003_campaign::aggregate::{Campaign, CampaignId, CampaignRow};
use contracts::domain::a003_campaign::form::CampaignForm;
use contracts::domain::a003_campaign::summary::CampaignSummary;

use crate::shared::data::Repository;

/// Create a campaign. The cost per engagement is computed from the form
/// and stored with the record.
pub async fn create(
    repo: &dyn Repository<Campaign>,
    form: CampaignForm,
) -> anyhow::Result<Campaign> {
    let dto = form.into_dto().context("Invalid campaign form")?;
    let campaign = repo.create(dto).await.context("Cannot create campaign")?;
    tracing::info!(
        "Created campaign {} ({:?}), cost per engagement {}",
        campaign.name,
        campaign.id,
        campaign.cost_per_engagement
    );
    Ok(campaign)
}

pub async fn list(repo: &dyn Repository<Campaign>) -> anyhow::Result<Vec<CampaignRow>> {
    let campaigns = repo.list().await.context("Cannot load campaigns")?;
    Ok(campaigns.into_iter().map(CampaignRow::from).collect())
}

pub async fn delete(repo: &dyn Repository<Campaign>, id: CampaignId) -> anyhow::Result<bool> {
    let deleted = repo.delete(id).await.context("Cannot delete campaign")?;
    if deleted {
        tracing::info!("Deleted campaign {:?}", id);
    } else {
        tracing::warn!("Campaign {:?} not found", id);
    }
    Ok(deleted)
}

pub async fn summary(repo: &dyn Repository<Campaign>) -> anyhow::Result<CampaignSummary> {
    let campaigns = repo.list().await.context("Cannot load campaigns")?;
    Ok(CampaignSummary::from_campaigns(&campaigns))
}
