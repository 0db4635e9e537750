use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::common::{AggregateId, AggregateRoot};
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::repository::{Repository, RepositoryResult};

/// Process-local store used by tests and the demo binary.
///
/// Ids are assigned sequentially, starting after the highest seeded id.
pub struct InMemoryRepository<T: AggregateRoot> {
    records: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: AggregateRoot> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let max_id = records.iter().map(|r| r.id().value()).max().unwrap_or(0);
        Self {
            records: RwLock::new(records),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

impl<T: AggregateRoot> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: AggregateRoot> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> RepositoryResult<Vec<T>> {
        let mut items = self.records.read().await.clone();
        // Newest first; records created in the same instant by id
        items.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().value().cmp(&a.id().value()))
        });
        Ok(items)
    }

    async fn create(&self, dto: T::Dto) -> RepositoryResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = T::from_dto(T::Id::from_value(id), dto, Utc::now());
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<bool> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }
}
