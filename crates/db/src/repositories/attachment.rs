//! Attachment repository for database operations.
//!
//! Rows carry storage-relative paths only; moving the bytes around is
//! the storage layer's job.

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::disbursement_attachments;

/// Input for registering an uploaded attachment.
#[derive(Debug, Clone)]
pub struct CreateAttachmentInput {
    /// Owning disbursement.
    pub disbursement_id: Uuid,
    /// Original file name.
    pub file_name: String,
    /// Storage-relative path.
    pub file_path: String,
    /// Size in bytes.
    pub file_size: i64,
    /// MIME type as reported at upload.
    pub mime_type: String,
    /// Uploading user.
    pub uploaded_by: Uuid,
}

/// Attachment repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AttachmentRepository {
    db: DatabaseConnection,
}

impl AttachmentRepository {
    /// Creates a new attachment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an attachment row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateAttachmentInput,
    ) -> Result<disbursement_attachments::Model, DbErr> {
        disbursement_attachments::ActiveModel {
            id: Set(Uuid::new_v4()),
            disbursement_id: Set(input.disbursement_id),
            file_name: Set(input.file_name),
            file_path: Set(input.file_path),
            file_size: Set(input.file_size),
            mime_type: Set(input.mime_type),
            uploaded_by: Set(input.uploaded_by),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
    }

    /// Finds an attachment by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<disbursement_attachments::Model>, DbErr> {
        disbursement_attachments::Entity::find_by_id(id)
            .one(&self.db)
            .await
    }

    /// Lists a disbursement's attachments, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_disbursement(
        &self,
        disbursement_id: Uuid,
    ) -> Result<Vec<disbursement_attachments::Model>, DbErr> {
        disbursement_attachments::Entity::find()
            .filter(disbursement_attachments::Column::DisbursementId.eq(disbursement_id))
            .order_by_asc(disbursement_attachments::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Counts a disbursement's attachments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_for_disbursement(&self, disbursement_id: Uuid) -> Result<u64, DbErr> {
        disbursement_attachments::Entity::find()
            .filter(disbursement_attachments::Column::DisbursementId.eq(disbursement_id))
            .count(&self.db)
            .await
    }

    /// Total stored bytes for a disbursement's attachments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total_size_for_disbursement(&self, disbursement_id: Uuid) -> Result<i64, DbErr> {
        // SUM over BIGINT comes back as NUMERIC on Postgres.
        let total: Option<Option<Decimal>> = disbursement_attachments::Entity::find()
            .select_only()
            .column_as(disbursement_attachments::Column::FileSize.sum(), "total")
            .filter(disbursement_attachments::Column::DisbursementId.eq(disbursement_id))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().and_then(|d| d.to_i64()).unwrap_or(0))
    }

    /// Deletes an attachment row; returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = disbursement_attachments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
