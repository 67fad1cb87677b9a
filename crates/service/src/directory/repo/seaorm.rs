use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::directory::domain::{NewPerson, Person};
use crate::directory::repository::EntryStore;
use crate::errors::ServiceError;
use models::person;

/// SeaORM-backed store. Ids are UUIDs generated on insert.
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// A string that is not a UUID cannot name a stored row.
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id).ok()
}

#[async_trait::async_trait]
impl EntryStore for SeaOrmStore {
    async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        let rows = person::Entity::find()
            .order_by_asc(person::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Person>, ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(None) };
        let row = person::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Person::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, ServiceError> {
        let row = person::Entity::find()
            .filter(person::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(row.map(Person::from))
    }

    async fn insert(&self, new: NewPerson) -> Result<Person, ServiceError> {
        let created = person::create(&self.db, &new.name, &new.number).await?;
        Ok(created.into())
    }

    async fn update_number(&self, id: &str, number: &str) -> Result<Option<Person>, ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(None) };
        let Some(found) = person::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: person::ActiveModel = found.into();
        am.number = Set(number.to_string());
        Ok(Some(am.update(&self.db).await?.into()))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let Some(id) = parse_id(id) else { return Ok(false) };
        let res = person::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<usize, ServiceError> {
        let n = person::Entity::find().count(&self.db).await?;
        Ok(n as usize)
    }
}
