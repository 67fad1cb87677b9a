use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a person with a freshly generated id.
///
/// A unique-key violation on `name` surfaces as [`ModelError::Conflict`].
pub async fn create(db: &DatabaseConnection, name: &str, number: &str) -> Result<Model, ModelError> {
    if name.is_empty() || number.is_empty() {
        return Err(ModelError::Validation("name or number missing".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        number: Set(number.to_string()),
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    async fn sqlite() -> anyhow::Result<DatabaseConnection> {
        let cfg = configs::DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            ..Default::default()
        };
        let db = crate::db::connect_with_config(&cfg).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(db)
    }

    #[tokio::test]
    async fn create_assigns_uuid_and_persists() -> anyhow::Result<()> {
        let db = sqlite().await?;
        let p = create(&db, "Arto Hellas", "040-123456").await?;
        let found = Entity::find_by_id(p.id).one(&db).await?.unwrap();
        assert_eq!(found, p);
        assert_eq!(found.number, "040-123456");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() -> anyhow::Result<()> {
        let db = sqlite().await?;
        create(&db, "Ada Lovelace", "1").await?;
        let err = create(&db, "Ada Lovelace", "2").await.unwrap_err();
        assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
        assert_eq!(Entity::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_fields_rejected_before_insert() -> anyhow::Result<()> {
        let db = sqlite().await?;
        assert!(matches!(create(&db, "", "1").await, Err(ModelError::Validation(_))));
        assert!(matches!(create(&db, "x", "").await, Err(ModelError::Validation(_))));
        Ok(())
    }
}
