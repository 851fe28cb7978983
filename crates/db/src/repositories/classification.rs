//! Classification config repository for database operations.
//!
//! The four standard budget classifications are seeded by the initial
//! migration; this repository manages their display names and lets
//! administrators add local codes.

use chrono::Utc;
use dvtrack_shared::error::AppError;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::classification_configs;

/// Error types for classification config operations.
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    /// No config with that code.
    #[error("Classification not found: {0}")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::NotFound(_) => Self::NotFound(err.to_string()),
            ClassificationError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

/// Input for creating or replacing a classification config.
#[derive(Debug, Clone)]
pub struct ClassificationInput {
    /// Short code shown on vouchers, e.g. `PS`.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Whether the code is selectable for new vouchers.
    pub is_active: bool,
}

/// Classification config repository.
#[derive(Debug, Clone)]
pub struct ClassificationRepository {
    db: DatabaseConnection,
}

impl ClassificationRepository {
    /// Creates a new classification repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a config by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<classification_configs::Model>, DbErr> {
        classification_configs::Entity::find_by_id(id)
            .one(&self.db)
            .await
    }

    /// Finds a config by its code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<classification_configs::Model>, DbErr> {
        classification_configs::Entity::find()
            .filter(classification_configs::Column::Code.eq(code))
            .one(&self.db)
            .await
    }

    /// Lists configs ordered by code, optionally active ones only.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        active_only: bool,
    ) -> Result<Vec<classification_configs::Model>, DbErr> {
        let mut query = classification_configs::Entity::find();
        if active_only {
            query = query.filter(classification_configs::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(classification_configs::Column::Code)
            .all(&self.db)
            .await
    }

    /// Inserts the config, or updates the existing row with that code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database write fails.
    pub async fn upsert(
        &self,
        input: ClassificationInput,
    ) -> Result<classification_configs::Model, DbErr> {
        let now = Utc::now().into();
        let model = classification_configs::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            name: Set(input.name),
            description: Set(input.description),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        classification_configs::Entity::insert(model)
            .on_conflict(
                OnConflict::column(classification_configs::Column::Code)
                    .update_columns([
                        classification_configs::Column::Name,
                        classification_configs::Column::Description,
                        classification_configs::Column::IsActive,
                        classification_configs::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
    }

    /// Marks a code active or inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is missing or the update fails.
    pub async fn set_active(
        &self,
        code: &str,
        is_active: bool,
    ) -> Result<classification_configs::Model, ClassificationError> {
        let model = self
            .find_by_code(code)
            .await?
            .ok_or_else(|| ClassificationError::NotFound(code.to_string()))?;

        let mut active: classification_configs::ActiveModel = model.into();
        active.is_active = Set(is_active);
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a config by code; returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let result = classification_configs::Entity::delete_many()
            .filter(classification_configs::Column::Code.eq(code))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
