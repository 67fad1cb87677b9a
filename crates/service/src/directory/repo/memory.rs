use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::directory::domain::{NewPerson, Person};
use crate::directory::repository::EntryStore;
use crate::errors::ServiceError;

/// Volatile store keeping entries in insertion order.
///
/// Ids are `max(numeric ids) + 1`, starting at `1`. Deleting the entry with
/// the highest id therefore frees that id for the next insert.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<Vec<Person>>,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_entries(entries: Vec<Person>) -> Self {
        Self { entries: RwLock::new(entries) }
    }

    /// Store pre-filled with the four sample entries.
    pub fn seeded() -> Self {
        let sample = [
            ("1", "Arto Hellas", "040-123456"),
            ("2", "Ada Lovelace", "39-44-5323523"),
            ("3", "Dan Abramov", "12-43-234345"),
            ("4", "Mary Poppendieck", "39-23-6423122"),
        ];
        Self::with_entries(
            sample
                .into_iter()
                .map(|(id, name, number)| Person { id: id.into(), name: name.into(), number: number.into() })
                .collect(),
        )
    }
}

/// Non-numeric ids take no part in allocation.
fn next_id(entries: &[Person]) -> String {
    let max = entries
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

#[async_trait]
impl EntryStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        Ok(self.entries.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Person>, ServiceError> {
        Ok(self.entries.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, ServiceError> {
        Ok(self.entries.read().await.iter().find(|p| p.name == name).cloned())
    }

    async fn insert(&self, new: NewPerson) -> Result<Person, ServiceError> {
        let mut entries = self.entries.write().await;
        let person = Person { id: next_id(&entries), name: new.name, number: new.number };
        entries.push(person.clone());
        Ok(person)
    }

    async fn update_number(&self, id: &str, number: &str) -> Result<Option<Person>, ServiceError> {
        let mut entries = self.entries.write().await;
        Ok(entries.iter_mut().find(|p| p.id == id).map(|p| {
            p.number = number.to_string();
            p.clone()
        }))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|p| p.id != id);
        Ok(entries.len() != before)
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.entries.read().await.len())
    }
}
