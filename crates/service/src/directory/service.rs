use std::sync::Arc;

use chrono::Local;
use common::observability::{PERSONS_ADDED_TOTAL, PERSONS_DELETED_TOTAL};
use tracing::{debug, info, instrument};

use super::domain::{Info, NumberInput, Person, PersonInput, Validated};
use super::repository::EntryStore;
use crate::errors::{ServiceError, ValidationError};

const ENTITY: &str = "Person";

/// Phonebook business service independent of web framework and storage.
///
/// `add` checks name uniqueness and then inserts in two store calls, so two
/// concurrent adds of the same name can both pass the check on a store that
/// has no unique index of its own (the in-memory store).
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn EntryStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Person, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Validate and store a new entry.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::DirectoryService;
    /// use service::directory::{domain::PersonInput, repo::InMemoryStore};
    /// let svc = DirectoryService::new(Arc::new(InMemoryStore::new()));
    /// let p = tokio_test::block_on(svc.add(PersonInput::new("Ada Lovelace", "39-44-5323523"))).unwrap();
    /// assert_eq!(p.id, "1");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn add(&self, input: PersonInput) -> Result<Person, ServiceError> {
        let new = match input.validate() {
            Validated::Valid(new) => new,
            Validated::Invalid(reason) => return Err(reason.into()),
        };
        if let Some(existing) = self.store.find_by_name(&new.name).await? {
            debug!(id = %existing.id, "name already taken");
            return Err(ValidationError::DuplicateName.into());
        }
        let person = self.store.insert(new).await?;
        PERSONS_ADDED_TOTAL.inc();
        info!(id = %person.id, name = %person.name, "person_added");
        Ok(person)
    }

    /// Remove an entry. An unknown id is reported as `NotFound`.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.remove(id).await? {
            return Err(ServiceError::not_found(ENTITY));
        }
        PERSONS_DELETED_TOTAL.inc();
        info!(%id, "person_deleted");
        Ok(())
    }

    /// Replace the number of an existing entry; `id` and `name` never change.
    #[instrument(skip(self, input))]
    pub async fn update_number(&self, id: &str, input: NumberInput) -> Result<Person, ServiceError> {
        let number = input.validate()?;
        let person = self
            .store
            .update_number(id, &number)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        info!(%id, "person_number_updated");
        Ok(person)
    }

    pub async fn count(&self) -> Result<usize, ServiceError> {
        self.store.count().await
    }

    /// Count and clock are both sampled on every call.
    pub async fn info(&self) -> Result<Info, ServiceError> {
        Ok(Info { count: self.count().await?, at: Local::now() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::repo::InMemoryStore;

    fn svc(store: InMemoryStore) -> DirectoryService {
        DirectoryService::new(Arc::new(store))
    }

    fn is_missing(r: Result<Person, ServiceError>) -> bool {
        matches!(r, Err(ServiceError::Validation(ValidationError::MissingField)))
    }

    #[tokio::test]
    async fn add_to_empty_directory_gets_id_one() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::new());
        let p = svc.add(PersonInput::new("Ada Lovelace", "39-44-5323523")).await?;
        assert_eq!(
            p,
            Person { id: "1".into(), name: "Ada Lovelace".into(), number: "39-44-5323523".into() }
        );
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_and_store_unchanged() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::new());
        svc.add(PersonInput::new("Ada Lovelace", "39-44-5323523")).await?;
        let before = svc.list().await?;
        let err = svc.add(PersonInput::new("Ada Lovelace", "000")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::DuplicateName)));
        assert_eq!(svc.list().await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn name_match_is_case_sensitive() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::new());
        svc.add(PersonInput::new("Ada Lovelace", "1")).await?;
        svc.add(PersonInput::new("ada lovelace", "2")).await?;
        assert_eq!(svc.count().await?, 2);
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_always_fail() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::seeded());
        assert!(is_missing(svc.add(PersonInput::new("", "123")).await));
        assert!(is_missing(svc.add(PersonInput::new("Someone New", "")).await));
        // An empty name fails even when it would otherwise collide.
        assert!(is_missing(svc.add(PersonInput::new("", "")).await));
        assert!(is_missing(svc.add(PersonInput { name: Some("Arto Hellas".into()), number: None }).await));
        assert_eq!(svc.count().await?, 4);
        Ok(())
    }

    #[tokio::test]
    async fn names_stay_unique_across_many_adds() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::new());
        let names = ["a", "b", "a", "c", "b", "d", "a"];
        for (i, name) in names.iter().enumerate() {
            let _ = svc.add(PersonInput::new(*name, i.to_string())).await;
        }
        let mut listed: Vec<String> = svc.list().await?.into_iter().map(|p| p.name).collect();
        listed.sort();
        assert_eq!(listed, ["a", "b", "c", "d"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_round_trips_added_record() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::seeded());
        let p = svc.add(PersonInput::new("Grace Hopper", "555-0101")).await?;
        assert_eq!(svc.get_by_id(&p.id).await?, p);
        Ok(())
    }

    #[tokio::test]
    async fn deleted_record_is_not_found() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::seeded());
        svc.delete_by_id("2").await?;
        assert!(matches!(svc.get_by_id("2").await, Err(ServiceError::NotFound(_))));
        let ids: Vec<String> = svc.list().await?.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "3", "4"]);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_not_found() {
        let svc = svc(InMemoryStore::seeded());
        assert!(matches!(svc.delete_by_id("99").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let svc = svc(InMemoryStore::seeded());
        assert!(matches!(svc.get_by_id("99").await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_changes_only_number() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::seeded());
        let before = svc.get_by_id("3").await?;
        let after = svc.update_number("3", NumberInput::new("99-99")).await?;
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_eq!(after.number, "99-99");
        assert_eq!(svc.get_by_id("3").await?.number, "99-99");
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_or_empty_fails() {
        let svc = svc(InMemoryStore::seeded());
        assert!(matches!(
            svc.update_number("99", NumberInput::new("1")).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(is_missing(svc.update_number("1", NumberInput::default()).await));
    }

    #[tokio::test]
    async fn count_matches_list() -> Result<(), ServiceError> {
        let svc = svc(InMemoryStore::seeded());
        svc.add(PersonInput::new("Grace Hopper", "1")).await?;
        svc.delete_by_id("1").await?;
        assert_eq!(svc.count().await?, svc.list().await?.len());
        assert_eq!(svc.info().await?.count, 4);
        Ok(())
    }

    #[tokio::test]
    async fn same_invariants_hold_on_database_store() -> Result<(), anyhow::Error> {
        use crate::directory::repo::SeaOrmStore;
        let db = crate::test_support::sqlite_db().await?;
        let svc = DirectoryService::new(Arc::new(SeaOrmStore::new(db)));

        let p = svc.add(PersonInput::new("Ada Lovelace", "39-44-5323523")).await?;
        assert_eq!(svc.get_by_id(&p.id).await?, p);
        assert!(matches!(
            svc.add(PersonInput::new("Ada Lovelace", "000")).await,
            Err(ServiceError::Validation(ValidationError::DuplicateName))
        ));
        svc.delete_by_id(&p.id).await?;
        assert!(matches!(svc.get_by_id(&p.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_by_id(&p.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
