use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use super::AggregateId;

/// A record owned by the external store.
///
/// `Dto` is the insert payload; the store fills in `id` and `created_at`.
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: AggregateId + Send + Sync;
    type Dto: Clone + Serialize + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    /// Materialize a stored record from its insert payload
    fn from_dto(id: Self::Id, dto: Self::Dto, created_at: DateTime<Utc>) -> Self;

    /// Table name in the store, e.g. "projects"
    fn collection_name() -> &'static str;
}
