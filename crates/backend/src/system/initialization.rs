use anyhow::{Context, Result};
use contracts::domain::a001_project::aggregate::Project;
use contracts::domain::a002_content::aggregate::Content;
use contracts::domain::a003_campaign::aggregate::Campaign;
use std::sync::Arc;
use std::time::Duration;

use super::seed;
use crate::shared::config::{Config, StoreKind};
use crate::shared::data::{InMemoryRepository, Repository, RestRepository};

/// Repositories shared by all services
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn Repository<Project>>,
    pub contents: Arc<dyn Repository<Content>>,
    pub campaigns: Arc<dyn Repository<Campaign>>,
}

impl AppState {
    /// Empty in-memory store
    pub fn in_memory() -> Self {
        Self {
            projects: Arc::new(InMemoryRepository::<Project>::new()),
            contents: Arc::new(InMemoryRepository::<Content>::new()),
            campaigns: Arc::new(InMemoryRepository::<Campaign>::new()),
        }
    }

    /// In-memory store preloaded with the sample dashboard data
    pub fn seeded() -> Self {
        Self {
            projects: Arc::new(InMemoryRepository::with_records(seed::projects())),
            contents: Arc::new(InMemoryRepository::with_records(seed::contents())),
            campaigns: Arc::new(InMemoryRepository::with_records(seed::campaigns())),
        }
    }

    pub fn rest(url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            projects: Arc::new(RestRepository::<Project>::new(url, api_key, timeout)?),
            contents: Arc::new(RestRepository::<Content>::new(url, api_key, timeout)?),
            campaigns: Arc::new(RestRepository::<Campaign>::new(url, api_key, timeout)?),
        })
    }
}

/// Builds the repositories selected in the config
pub fn build_state(config: &Config) -> Result<AppState> {
    match config.store.kind {
        StoreKind::Memory => {
            tracing::info!("Using in-memory store with sample data");
            Ok(AppState::seeded())
        }
        StoreKind::Rest => {
            let url = config
                .store
                .url
                .as_deref()
                .context("store.url is required for the rest store")?;
            let api_key = config.store.api_key.as_deref().unwrap_or_default();
            if api_key.is_empty() {
                tracing::warn!("store.api_key is empty, requests will be anonymous");
            }
            tracing::info!("Using REST store at {}", url);
            AppState::rest(url, api_key, Duration::from_secs(config.store.timeout_secs))
                .context("Cannot create REST store client")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::parse_config;

    #[tokio::test]
    async fn test_memory_config_builds_seeded_state() {
        let config = parse_config("[store]\nkind = \"memory\"\n").unwrap();
        let state = build_state(&config).unwrap();
        assert!(!state.projects.list().await.unwrap().is_empty());
        assert!(!state.campaigns.list().await.unwrap().is_empty());
    }

    #[test]
    fn test_rest_config_builds_state() {
        let config = parse_config(
            "[store]\nkind = \"rest\"\nurl = \"https://demo.supabase.co\"\napi_key = \"anon\"\n",
        )
        .unwrap();
        assert!(build_state(&config).is_ok());
    }
}
