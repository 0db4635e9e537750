use anyhow::Context;
use contracts::domain::a001_project::aggregate::{Project, ProjectCard, ProjectId, ProjectOption};
use contracts::domain::a001_project::form::ProjectForm;
use contracts::domain::a001_project::summary::ProjectSummary;

use crate::shared::data::Repository;

/// Create a project from the dialog form
pub async fn create(repo: &dyn Repository<Project>, form: ProjectForm) -> anyhow::Result<Project> {
    let dto = form.into_dto().context("Invalid project form")?;
    let project = repo.create(dto).await.context("Cannot create project")?;
    tracing::info!("Created project {} ({:?})", project.name, project.id);
    Ok(project)
}

/// Project cards, newest first
pub async fn list(repo: &dyn Repository<Project>) -> anyhow::Result<Vec<ProjectCard>> {
    let projects = repo.list().await.context("Cannot load projects")?;
    Ok(projects.into_iter().map(ProjectCard::from).collect())
}

/// Project picker entries for the content and campaign dialogs, by name
pub async fn options(repo: &dyn Repository<Project>) -> anyhow::Result<Vec<ProjectOption>> {
    let mut options: Vec<ProjectOption> = repo
        .list()
        .await
        .context("Cannot load projects")?
        .iter()
        .map(ProjectOption::from)
        .collect();
    options.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(options)
}

pub async fn delete(repo: &dyn Repository<Project>, id: ProjectId) -> anyhow::Result<bool> {
    let deleted = repo.delete(id).await.context("Cannot delete project")?;
    if deleted {
        tracing::info!("Deleted project {:?}", id);
    } else {
        tracing::warn!("Project {:?} not found", id);
    }
    Ok(deleted)
}

pub async fn summary(repo: &dyn Repository<Project>) -> anyhow::Result<ProjectSummary> {
    let projects = repo.list().await.context("Cannot load projects")?;
    Ok(ProjectSummary::from_projects(&projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::InMemoryRepository;
    use contracts::shared::metrics::BudgetTone;

    fn form(name: &str, budget: &str) -> ProjectForm {
        ProjectForm {
            name: name.into(),
            monthly_budget: budget.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_list_cards() {
        let repo = InMemoryRepository::<Project>::new();
        create(&repo, form("Projeto Alpha", "5000")).await.unwrap();

        let cards = list(&repo).await.unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].project.name, "Projeto Alpha");
        assert_eq!(cards[0].budget_percentage, 0);
        assert_eq!(cards[0].tone, BudgetTone::Healthy);
        assert_eq!(cards[0].status_label, "Ativo");
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_stored() {
        let repo = InMemoryRepository::<Project>::new();
        let err = create(&repo, form("", "5000")).await.unwrap_err();
        assert!(err.to_string().contains("Invalid project form"));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_options_are_sorted_by_name() {
        let repo = InMemoryRepository::<Project>::new();
        create(&repo, form("Projeto Gamma", "100")).await.unwrap();
        let alpha = create(&repo, form("Projeto Alpha", "100")).await.unwrap();
        create(&repo, form("Projeto Beta", "100")).await.unwrap();

        let opts = options(&repo).await.unwrap();
        let names: Vec<&str> = opts.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Projeto Alpha", "Projeto Beta", "Projeto Gamma"]);
        assert_eq!(opts[0].id, alpha.id);
    }

    #[tokio::test]
    async fn test_delete_and_summary() {
        let repo = InMemoryRepository::<Project>::new();
        let a = create(&repo, form("A", "1000")).await.unwrap();
        create(&repo, form("B", "3000")).await.unwrap();

        assert!(delete(&repo, a.id).await.unwrap());
        assert!(!delete(&repo, a.id).await.unwrap());

        let s = summary(&repo).await.unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.total_budget, 3000.0);
    }
}
