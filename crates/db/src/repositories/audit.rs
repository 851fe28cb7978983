//! Audit log repository for database operations.
//!
//! Append and read only. Disbursement mutations write their audit rows
//! inside the disbursement repository's transactions; this repository
//! covers everything else (logins, exports, views) plus querying.

use chrono::{DateTime, Utc};
use dvtrack_shared::types::{PageRequest, PageResponse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::{audit_logs, sea_orm_active_enums::AuditAction};

/// Input for recording an audit event.
#[derive(Debug, Clone)]
pub struct RecordAuditInput {
    /// Acting user.
    pub user_id: Uuid,
    /// What happened.
    pub action: AuditAction,
    /// Entity kind, e.g. "user", "report".
    pub entity_type: String,
    /// Affected entity.
    pub entity_id: Uuid,
    /// Set when the event concerns a disbursement.
    pub disbursement_id: Option<Uuid>,
    /// Prior field values, if any.
    pub old_values: Option<Value>,
    /// New field values, if any.
    pub new_values: Option<Value>,
    /// Client address, when known.
    pub ip_address: Option<String>,
}

/// Filter options for querying the audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Filter by acting user.
    pub user_id: Option<Uuid>,
    /// Filter by action kind.
    pub action: Option<AuditAction>,
    /// Filter by entity kind.
    pub entity_type: Option<String>,
    /// Filter by affected entity.
    pub entity_id: Option<Uuid>,
    /// Events at or after this instant.
    pub date_from: Option<DateTime<Utc>>,
    /// Events before this instant.
    pub date_to: Option<DateTime<Utc>>,
}

/// Audit log repository.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    db: DatabaseConnection,
}

impl AuditLogRepository {
    /// Creates a new audit log repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit event.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn record(&self, input: RecordAuditInput) -> Result<audit_logs::Model, DbErr> {
        audit_logs::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(input.user_id),
            action: Set(input.action),
            entity_type: Set(input.entity_type),
            entity_id: Set(input.entity_id),
            disbursement_id: Set(input.disbursement_id),
            old_values: Set(input.old_values),
            new_values: Set(input.new_values),
            ip_address: Set(input.ip_address),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await
    }

    /// Lists audit events matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &AuditFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<audit_logs::Model>, DbErr> {
        let query = Self::apply_filter(audit_logs::Entity::find(), filter);

        let total = query.clone().count(&self.db).await?;
        let data = query
            .order_by_desc(audit_logs::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page, total))
    }

    /// A disbursement's full audit history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_disbursement(
        &self,
        disbursement_id: Uuid,
    ) -> Result<Vec<audit_logs::Model>, DbErr> {
        audit_logs::Entity::find()
            .filter(audit_logs::Column::DisbursementId.eq(disbursement_id))
            .order_by_asc(audit_logs::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Counts audit events matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self, filter: &AuditFilter) -> Result<u64, DbErr> {
        Self::apply_filter(audit_logs::Entity::find(), filter)
            .count(&self.db)
            .await
    }

    /// Deletes events older than the cutoff (retention maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn cleanup_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = audit_logs::Entity::delete_many()
            .filter(audit_logs::Column::CreatedAt.lt(cutoff))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(
                deleted = result.rows_affected,
                %cutoff,
                "pruned audit log entries"
            );
        }
        Ok(result.rows_affected)
    }

    fn apply_filter(
        mut query: sea_orm::Select<audit_logs::Entity>,
        filter: &AuditFilter,
    ) -> sea_orm::Select<audit_logs::Entity> {
        if let Some(user_id) = filter.user_id {
            query = query.filter(audit_logs::Column::UserId.eq(user_id));
        }
        if let Some(action) = &filter.action {
            query = query.filter(audit_logs::Column::Action.eq(action.clone()));
        }
        if let Some(entity_type) = &filter.entity_type {
            query = query.filter(audit_logs::Column::EntityType.eq(entity_type));
        }
        if let Some(entity_id) = filter.entity_id {
            query = query.filter(audit_logs::Column::EntityId.eq(entity_id));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(audit_logs::Column::CreatedAt.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(audit_logs::Column::CreatedAt.lt(date_to));
        }
        query
    }
}
