use async_trait::async_trait;
use contracts::domain::common::AggregateRoot;
use thiserror::Error;

/// Failures of a record store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("cannot decode store response: {0}")]
    Decode(String),

    #[error("store rejected the record: {0}")]
    Validation(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// List/create/delete access to one collection of the store
#[async_trait]
pub trait Repository<T: AggregateRoot>: Send + Sync {
    /// All records, newest first
    async fn list(&self) -> RepositoryResult<Vec<T>>;

    /// Inserts the payload and returns the stored record
    async fn create(&self, dto: T::Dto) -> RepositoryResult<T>;

    /// `false` when nothing matched `id`
    async fn delete(&self, id: T::Id) -> RepositoryResult<bool>;
}
