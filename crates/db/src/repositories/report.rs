//! Report repository for database operations.
//!
//! The reports table doubles as a work queue: rows are enqueued as
//! pending, claimed into processing, and finished as completed or
//! failed. Lifecycle edges are checked in `dvtrack-core` before any
//! status write.

use chrono::{DateTime, Utc};
use dvtrack_core::report::{can_transition, ReportError, ReportStatus as CoreStatus, ReportWindow};
use dvtrack_shared::error::AppError;
use dvtrack_shared::types::{PageRequest, PageResponse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::{
    reports,
    sea_orm_active_enums::{ReportStatus, ReportType},
};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportRepoError {
    /// Report not found.
    #[error("Report not found: {0}")]
    NotFound(Uuid),

    /// Lifecycle or parameter rule violation.
    #[error(transparent)]
    Lifecycle(#[from] ReportError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportRepoError> for AppError {
    fn from(err: ReportRepoError) -> Self {
        match err {
            ReportRepoError::NotFound(_) => Self::NotFound(err.to_string()),
            ReportRepoError::Lifecycle(ReportError::InvalidDateRange { .. }) => {
                Self::Validation(err.to_string())
            }
            ReportRepoError::Lifecycle(ReportError::InvalidTransition { .. }) => {
                Self::BusinessRule(err.to_string())
            }
            ReportRepoError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

/// Input for enqueueing a report.
#[derive(Debug, Clone)]
pub struct CreateReportInput {
    /// Display name.
    pub name: String,
    /// Report kind.
    pub report_type: ReportType,
    /// Free-form parameter document.
    pub parameters: Value,
    /// Date window; validated before the row is written.
    pub window: Option<ReportWindow>,
    /// Requesting user.
    pub created_by: Uuid,
}

/// Filter options for listing reports.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Filter by kind.
    pub report_type: Option<ReportType>,
    /// Filter by processing status.
    pub status: Option<ReportStatus>,
    /// Filter by requesting user.
    pub created_by: Option<Uuid>,
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enqueues a report as pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the date window is backwards or the insert
    /// fails.
    pub async fn enqueue(&self, input: CreateReportInput) -> Result<reports::Model, ReportRepoError> {
        if let Some(window) = &input.window {
            window.validate()?;
        }

        let model = reports::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            report_type: Set(input.report_type),
            parameters: Set(input.parameters),
            status: Set(ReportStatus::Pending),
            file_path: Set(None),
            error_message: Set(None),
            created_by: Set(input.created_by),
            created_at: Set(Utc::now().into()),
            completed_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        Ok(model)
    }

    /// Finds a report by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<reports::Model>, DbErr> {
        reports::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists reports matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &ReportFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<reports::Model>, DbErr> {
        let query = Self::apply_filter(reports::Entity::find(), filter);

        let total = query.clone().count(&self.db).await?;
        let data = query
            .order_by_desc(reports::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page, total))
    }

    /// Claims the oldest pending report, moving it to processing.
    ///
    /// Returns `None` when the queue is empty. Runs in a transaction so
    /// the claim is atomic against a single connection; concurrent
    /// workers should serialize on this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the database access fails.
    pub async fn claim_next_pending(&self) -> Result<Option<reports::Model>, ReportRepoError> {
        let txn = self.db.begin().await?;

        let Some(report) = reports::Entity::find()
            .filter(reports::Column::Status.eq(ReportStatus::Pending))
            .order_by_asc(reports::Column::CreatedAt)
            .lock_exclusive()
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        can_transition(to_core_report_status(&report.status), CoreStatus::Processing)?;

        let mut active: reports::ActiveModel = report.into();
        active.status = Set(ReportStatus::Processing);
        let claimed = active.update(&txn).await?;

        txn.commit().await?;
        Ok(Some(claimed))
    }

    /// Marks a processing report as completed with its output path.
    ///
    /// # Errors
    ///
    /// Returns an error if the report is missing, not processing, or the
    /// update fails.
    pub async fn mark_completed(
        &self,
        id: Uuid,
        file_path: &str,
    ) -> Result<reports::Model, ReportRepoError> {
        self.finish(id, ReportStatus::Completed, Some(file_path), None)
            .await
    }

    /// Marks a processing report as failed with the error message.
    ///
    /// # Errors
    ///
    /// Returns an error if the report is missing, not processing, or the
    /// update fails.
    pub async fn mark_failed(
        &self,
        id: Uuid,
        error_message: &str,
    ) -> Result<reports::Model, ReportRepoError> {
        self.finish(id, ReportStatus::Failed, None, Some(error_message))
            .await
    }

    async fn finish(
        &self,
        id: Uuid,
        target: ReportStatus,
        file_path: Option<&str>,
        error_message: Option<&str>,
    ) -> Result<reports::Model, ReportRepoError> {
        let report = self
            .find_by_id(id)
            .await?
            .ok_or(ReportRepoError::NotFound(id))?;

        can_transition(
            to_core_report_status(&report.status),
            to_core_report_status(&target),
        )?;

        let mut active: reports::ActiveModel = report.into();
        active.status = Set(target);
        active.file_path = Set(file_path.map(String::from));
        active.error_message = Set(error_message.map(String::from));
        active.completed_at = Set(Some(Utc::now().into()));

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a report row; returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = reports::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Deletes finished reports completed before the cutoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn cleanup_finished_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = reports::Entity::delete_many()
            .filter(
                reports::Column::Status
                    .is_in([ReportStatus::Completed, ReportStatus::Failed]),
            )
            .filter(reports::Column::CompletedAt.lt(cutoff))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts reports matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self, filter: &ReportFilter) -> Result<u64, DbErr> {
        Self::apply_filter(reports::Entity::find(), filter)
            .count(&self.db)
            .await
    }

    fn apply_filter(
        mut query: sea_orm::Select<reports::Entity>,
        filter: &ReportFilter,
    ) -> sea_orm::Select<reports::Entity> {
        if let Some(report_type) = &filter.report_type {
            query = query.filter(reports::Column::ReportType.eq(report_type.clone()));
        }
        if let Some(status) = &filter.status {
            query = query.filter(reports::Column::Status.eq(status.clone()));
        }
        if let Some(created_by) = filter.created_by {
            query = query.filter(reports::Column::CreatedBy.eq(created_by));
        }
        query
    }
}

/// Maps the database status to the core lifecycle status.
#[must_use]
pub fn to_core_report_status(status: &ReportStatus) -> CoreStatus {
    match status {
        ReportStatus::Pending => CoreStatus::Pending,
        ReportStatus::Processing => CoreStatus::Processing,
        ReportStatus::Completed => CoreStatus::Completed,
        ReportStatus::Failed => CoreStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_status_mapping_is_exhaustive() {
        assert_eq!(
            to_core_report_status(&ReportStatus::Pending),
            CoreStatus::Pending
        );
        assert_eq!(
            to_core_report_status(&ReportStatus::Processing),
            CoreStatus::Processing
        );
        assert_eq!(
            to_core_report_status(&ReportStatus::Completed),
            CoreStatus::Completed
        );
        assert_eq!(
            to_core_report_status(&ReportStatus::Failed),
            CoreStatus::Failed
        );
    }
}
