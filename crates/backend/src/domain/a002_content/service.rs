use anyhow::Context;
use contracts::domain::a002_content::aggregate::{Content, ContentId, ContentRow};
use contracts::domain::a002_content::form::ContentForm;
use contracts::domain::a002_content::summary::ContentSummary;

use crate::shared::data::Repository;

pub async fn create(repo: &dyn Repository<Content>, form: ContentForm) -> anyhow::Result<Content> {
    let dto = form.into_dto().context("Invalid content form")?;
    let content = repo.create(dto).await.context("Cannot create content")?;
    tracing::info!(
        "Created content {} ({:?}, {})",
        content.name,
        content.id,
        content.classification
    );
    Ok(content)
}

/// Content rows with follower gain and cost per follower
pub async fn list(repo: &dyn Repository<Content>) -> anyhow::Result<Vec<ContentRow>> {
    let contents = repo.list().await.context("Cannot load contents")?;
    Ok(contents.into_iter().map(ContentRow::from).collect())
}

pub async fn delete(repo: &dyn Repository<Content>, id: ContentId) -> anyhow::Result<bool> {
    let deleted = repo.delete(id).await.context("Cannot delete content")?;
    if deleted {
        tracing::info!("Deleted content {:?}", id);
    } else {
        tracing::warn!("Content {:?} not found", id);
    }
    Ok(deleted)
}

pub async fn summary(repo: &dyn Repository<Content>) -> anyhow::Result<ContentSummary> {
    let contents = repo.list().await.context("Cannot load contents")?;
    Ok(ContentSummary::from_contents(&contents))
}
