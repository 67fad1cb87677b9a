use async_trait::async_trait;

use super::domain::{NewPerson, Person};
use crate::errors::ServiceError;

/// Storage abstraction for phonebook entries.
///
/// Each call is atomic on its own; no guarantee spans two calls.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Person>, ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<Person>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, ServiceError>;
    /// Persist `new` under a store-allocated id.
    async fn insert(&self, new: NewPerson) -> Result<Person, ServiceError>;
    async fn update_number(&self, id: &str, number: &str) -> Result<Option<Person>, ServiceError>;
    /// Returns whether a record was removed.
    async fn remove(&self, id: &str) -> Result<bool, ServiceError>;
    async fn count(&self) -> Result<usize, ServiceError>;
}
