use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Numeric record identifier assigned by the store
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    fn value(&self) -> i64;

    fn from_value(value: i64) -> Self;

    fn as_string(&self) -> String {
        self.value().to_string()
    }
}
