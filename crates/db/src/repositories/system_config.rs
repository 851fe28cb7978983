//! System config repository for database operations.
//!
//! A flat key/value store for runtime-tunable settings. Writes are
//! upserts keyed on the config key.

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::system_configs;

/// System config repository.
#[derive(Debug, Clone)]
pub struct SystemConfigRepository {
    db: DatabaseConnection,
}

impl SystemConfigRepository {
    /// Creates a new system config repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a config row by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, key: &str) -> Result<Option<system_configs::Model>, DbErr> {
        system_configs::Entity::find()
            .filter(system_configs::Column::Key.eq(key))
            .one(&self.db)
            .await
    }

    /// Returns just the value for a key, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>, DbErr> {
        Ok(self.get(key).await?.map(|model| model.value))
    }

    /// Sets a key, inserting or replacing the existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn set(
        &self,
        key: &str,
        value: &str,
        description: Option<&str>,
        updated_by: Option<Uuid>,
    ) -> Result<system_configs::Model, DbErr> {
        let now = Utc::now().into();
        let model = system_configs::ActiveModel {
            id: Set(Uuid::new_v4()),
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            description: Set(description.map(String::from)),
            updated_by: Set(updated_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        system_configs::Entity::insert(model)
            .on_conflict(
                OnConflict::column(system_configs::Column::Key)
                    .update_columns([
                        system_configs::Column::Value,
                        system_configs::Column::Description,
                        system_configs::Column::UpdatedBy,
                        system_configs::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
    }

    /// Deletes a key; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, key: &str) -> Result<bool, DbErr> {
        let result = system_configs::Entity::delete_many()
            .filter(system_configs::Column::Key.eq(key))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists all config rows ordered by key.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<system_configs::Model>, DbErr> {
        system_configs::Entity::find()
            .order_by_asc(system_configs::Column::Key)
            .all(&self.db)
            .await
    }
}
