//! Disbursement repository for database operations.
//!
//! Creation allocates the yearly voucher number and every mutation writes
//! an audit log row in the same database transaction, so the voucher
//! series and the audit trail can never drift from the records.

use chrono::{Datelike, NaiveDate, Utc};
use dvtrack_core::audit::diff_snapshots;
use dvtrack_core::disbursement::{
    can_archive, can_cancel, can_delete, can_modify, format_disbursement_no,
    parse_disbursement_no, validate_amount, AmountError, DisbursementStatus as CoreStatus,
    NumberingError, StatusError,
};
use dvtrack_shared::error::AppError;
use dvtrack_shared::types::{PageRequest, PageResponse, SortDirection};
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{
    audit_logs, disbursements,
    sea_orm_active_enums::{AuditAction, Classification, DisbursementStatus},
};

/// Error types for disbursement operations.
#[derive(Debug, thiserror::Error)]
pub enum DisbursementError {
    /// Disbursement not found.
    #[error("Disbursement not found: {0}")]
    NotFound(Uuid),

    /// Status lifecycle rule violation.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Amount rule violation.
    #[error(transparent)]
    Amount(#[from] AmountError),

    /// Stored voucher number could not be parsed.
    #[error(transparent)]
    Numbering(#[from] NumberingError),

    /// Yearly voucher series is exhausted.
    #[error("Voucher series exhausted for year {0}")]
    SeriesExhausted(i32),

    /// Snapshot serialization failed.
    #[error("Snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<DisbursementError> for AppError {
    fn from(err: DisbursementError) -> Self {
        match err {
            DisbursementError::NotFound(_) => Self::NotFound(err.to_string()),
            DisbursementError::Status(_) | DisbursementError::SeriesExhausted(_) => {
                Self::BusinessRule(err.to_string())
            }
            DisbursementError::Amount(_) => Self::Validation(err.to_string()),
            // A malformed stored number or unserializable model is data
            // corruption, not caller error.
            DisbursementError::Numbering(_) | DisbursementError::Snapshot(_) => {
                Self::Internal(err.to_string())
            }
            DisbursementError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

/// Input for creating a disbursement.
#[derive(Debug, Clone)]
pub struct CreateDisbursementInput {
    /// Payee name.
    pub payee: String,
    /// Amount, must be positive.
    pub amount: Decimal,
    /// Voucher date; determines the numbering series year.
    pub disbursement_date: NaiveDate,
    /// Funding source, e.g. "General Fund".
    pub fund_source: String,
    /// Budget classification.
    pub classification: Classification,
    /// Purpose of the payment.
    pub description: String,
    /// Optional external reference number.
    pub reference_number: Option<String>,
    /// Department charged.
    pub department: String,
    /// Recording user.
    pub created_by: Uuid,
}

/// Input for updating a disbursement; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateDisbursementInput {
    /// New payee.
    pub payee: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New voucher date.
    pub disbursement_date: Option<NaiveDate>,
    /// New fund source.
    pub fund_source: Option<String>,
    /// New classification.
    pub classification: Option<Classification>,
    /// New description.
    pub description: Option<String>,
    /// New reference number; `Some(None)` clears it.
    pub reference_number: Option<Option<String>>,
    /// New department.
    pub department: Option<String>,
}

/// Filter options for listing disbursements.
#[derive(Debug, Clone, Default)]
pub struct DisbursementFilter {
    /// Filter by status.
    pub status: Option<DisbursementStatus>,
    /// Filter by classification.
    pub classification: Option<Classification>,
    /// Filter by department.
    pub department: Option<String>,
    /// Filter by fund source.
    pub fund_source: Option<String>,
    /// Filter by recording user.
    pub created_by: Option<Uuid>,
    /// Voucher date range start, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Voucher date range end, inclusive.
    pub date_to: Option<NaiveDate>,
    /// Minimum amount, inclusive.
    pub min_amount: Option<Decimal>,
    /// Maximum amount, inclusive.
    pub max_amount: Option<Decimal>,
    /// Case-insensitive match on payee, description, or reference number.
    pub search: Option<String>,
}

/// Aggregate figures over a filtered set of disbursements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisbursementStats {
    /// Row count.
    pub count: u64,
    /// Sum of amounts.
    pub total_amount: Decimal,
    /// Average amount, zero when empty.
    pub average_amount: Decimal,
    /// Smallest amount, if any rows matched.
    pub min_amount: Option<Decimal>,
    /// Largest amount, if any rows matched.
    pub max_amount: Option<Decimal>,
}

/// Per-classification totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTotal {
    /// Budget classification.
    pub classification: Classification,
    /// Row count.
    pub count: u64,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

/// Per-department totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentTotal {
    /// Department name.
    pub department: String,
    /// Row count.
    pub count: u64,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

/// Per-status totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTotal {
    /// Lifecycle status.
    pub status: DisbursementStatus,
    /// Row count.
    pub count: u64,
    /// Sum of amounts.
    pub total_amount: Decimal,
}

/// Disbursement repository for CRUD and aggregate operations.
#[derive(Debug, Clone)]
pub struct DisbursementRepository {
    db: DatabaseConnection,
}

impl DisbursementRepository {
    /// Creates a new disbursement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    // ========================================================================
    // Creation
    // ========================================================================

    /// Records a disbursement, allocating the next voucher number for the
    /// voucher date's year and writing the CREATE audit row atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if number allocation or the insert fails.
    pub async fn create(
        &self,
        input: CreateDisbursementInput,
    ) -> Result<disbursements::Model, DisbursementError> {
        let txn = self.db.begin().await?;
        let model = Self::insert_one(&txn, input).await?;
        txn.commit().await?;
        Ok(model)
    }

    /// Records a batch of disbursements in a single transaction.
    ///
    /// All-or-nothing: one failure rolls back the whole batch.
    ///
    /// # Errors
    ///
    /// Returns an error if any allocation or insert fails.
    pub async fn create_many(
        &self,
        inputs: Vec<CreateDisbursementInput>,
    ) -> Result<Vec<disbursements::Model>, DisbursementError> {
        let txn = self.db.begin().await?;

        let mut models = Vec::with_capacity(inputs.len());
        for input in inputs {
            models.push(Self::insert_one(&txn, input).await?);
        }

        txn.commit().await?;
        Ok(models)
    }

    async fn insert_one(
        txn: &DatabaseTransaction,
        input: CreateDisbursementInput,
    ) -> Result<disbursements::Model, DisbursementError> {
        validate_amount(input.amount)?;

        let year = input.disbursement_date.year();
        let disbursement_no = Self::allocate_number(txn, year).await?;

        let now = Utc::now().into();
        let created_by = input.created_by;

        let model = disbursements::ActiveModel {
            id: Set(Uuid::new_v4()),
            disbursement_no: Set(disbursement_no),
            payee: Set(input.payee),
            amount: Set(input.amount),
            disbursement_date: Set(input.disbursement_date),
            fund_source: Set(input.fund_source),
            classification: Set(input.classification),
            description: Set(input.description),
            reference_number: Set(input.reference_number),
            department: Set(input.department),
            status: Set(DisbursementStatus::Active),
            created_by: Set(created_by),
            updated_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;

        let snapshot = serde_json::to_value(&model)?;
        audit_row(
            created_by,
            AuditAction::Create,
            model.id,
            Some(model.id),
            None,
            Some(snapshot),
        )
        .insert(txn)
        .await?;

        Ok(model)
    }

    /// Allocates the next voucher number in the year's series.
    ///
    /// Runs inside the caller's transaction; the unique constraint on
    /// disbursement_no backstops concurrent allocations.
    async fn allocate_number<C: ConnectionTrait>(
        conn: &C,
        year: i32,
    ) -> Result<String, DisbursementError> {
        let prefix = format!("DV-{year:04}-");

        // Zero-padded sequences sort lexicographically, so max() is the
        // latest voucher in the series.
        let latest: Option<String> = disbursements::Entity::find()
            .select_only()
            .column_as(disbursements::Column::DisbursementNo.max(), "latest")
            .filter(disbursements::Column::DisbursementNo.starts_with(&prefix))
            .into_tuple()
            .one(conn)
            .await?
            .flatten();

        let seq = next_sequence(latest.as_deref(), year)?;
        Ok(format_disbursement_no(year, seq))
    }

    // ========================================================================
    // Lookup & listing
    // ========================================================================

    /// Finds a disbursement by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<disbursements::Model>, DbErr> {
        disbursements::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a disbursement by voucher number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_number(
        &self,
        disbursement_no: &str,
    ) -> Result<Option<disbursements::Model>, DbErr> {
        disbursements::Entity::find()
            .filter(disbursements::Column::DisbursementNo.eq(disbursement_no))
            .one(&self.db)
            .await
    }

    /// Lists disbursements matching the filter, paginated, ordered by
    /// voucher date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &DisbursementFilter,
        page: &PageRequest,
        sort: SortDirection,
    ) -> Result<PageResponse<disbursements::Model>, DbErr> {
        let query = Self::apply_filter(disbursements::Entity::find(), filter);
        let total = query.clone().count(&self.db).await?;

        let query = match sort {
            SortDirection::Asc => query
                .order_by_asc(disbursements::Column::DisbursementDate)
                .order_by_asc(disbursements::Column::DisbursementNo),
            SortDirection::Desc => query
                .order_by_desc(disbursements::Column::DisbursementDate)
                .order_by_desc(disbursements::Column::DisbursementNo),
        };

        let data = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page, total))
    }

    /// Counts disbursements matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self, filter: &DisbursementFilter) -> Result<u64, DbErr> {
        Self::apply_filter(disbursements::Entity::find(), filter)
            .count(&self.db)
            .await
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Updates an active disbursement and records the field-level diff in
    /// the audit log, atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing, not active, or the
    /// update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateDisbursementInput,
        updated_by: Uuid,
    ) -> Result<disbursements::Model, DisbursementError> {
        let model = self
            .find_by_id(id)
            .await?
            .ok_or(DisbursementError::NotFound(id))?;

        can_modify(to_core_status(&model.status))?;
        if let Some(amount) = input.amount {
            validate_amount(amount)?;
        }

        let old_snapshot = serde_json::to_value(&model)?;

        let txn = self.db.begin().await?;

        let mut active: disbursements::ActiveModel = model.into();
        if let Some(payee) = input.payee {
            active.payee = Set(payee);
        }
        if let Some(amount) = input.amount {
            active.amount = Set(amount);
        }
        if let Some(date) = input.disbursement_date {
            active.disbursement_date = Set(date);
        }
        if let Some(fund_source) = input.fund_source {
            active.fund_source = Set(fund_source);
        }
        if let Some(classification) = input.classification {
            active.classification = Set(classification);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(reference_number) = input.reference_number {
            active.reference_number = Set(reference_number);
        }
        if let Some(department) = input.department {
            active.department = Set(department);
        }
        active.updated_by = Set(Some(updated_by));
        active.updated_at = Set(Utc::now().into());

        let updated = active.update(&txn).await?;

        let new_snapshot = serde_json::to_value(&updated)?;
        let diff = diff_snapshots(&old_snapshot, &new_snapshot);
        if !diff.is_empty() {
            audit_row(
                updated_by,
                AuditAction::Update,
                updated.id,
                Some(updated.id),
                Some(diff.old_values),
                Some(diff.new_values),
            )
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(updated)
    }

    /// Cancels an active disbursement.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or not active.
    pub async fn cancel(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<disbursements::Model, DisbursementError> {
        self.transition(id, user_id, DisbursementStatus::Cancelled)
            .await
    }

    /// Archives an active or cancelled disbursement.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or already archived.
    pub async fn archive(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<disbursements::Model, DisbursementError> {
        self.transition(id, user_id, DisbursementStatus::Archived)
            .await
    }

    async fn transition(
        &self,
        id: Uuid,
        user_id: Uuid,
        target: DisbursementStatus,
    ) -> Result<disbursements::Model, DisbursementError> {
        let model = self
            .find_by_id(id)
            .await?
            .ok_or(DisbursementError::NotFound(id))?;

        let current = to_core_status(&model.status);
        match target {
            DisbursementStatus::Cancelled => can_cancel(current)?,
            DisbursementStatus::Archived => can_archive(current)?,
            DisbursementStatus::Active => can_modify(current)?,
        }

        let old_status = serde_json::json!({ "status": model.status.clone() });
        let new_status = serde_json::json!({ "status": target.clone() });

        let txn = self.db.begin().await?;

        let mut active: disbursements::ActiveModel = model.into();
        active.status = Set(target);
        active.updated_by = Set(Some(user_id));
        active.updated_at = Set(Utc::now().into());
        let updated = active.update(&txn).await?;

        audit_row(
            user_id,
            AuditAction::Update,
            updated.id,
            Some(updated.id),
            Some(old_status),
            Some(new_status),
        )
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Archives all non-archived disbursements dated before the cutoff.
    ///
    /// Bulk maintenance path; individual audit rows are not written.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn archive_before(&self, cutoff: NaiveDate) -> Result<u64, DbErr> {
        let result = disbursements::Entity::update_many()
            .set(disbursements::ActiveModel {
                status: Set(DisbursementStatus::Archived),
                updated_at: Set(Utc::now().into()),
                ..Default::default()
            })
            .filter(disbursements::Column::Status.ne(DisbursementStatus::Archived))
            .filter(disbursements::Column::DisbursementDate.lt(cutoff))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(
                archived = result.rows_affected,
                %cutoff,
                "archived disbursements past retention window"
            );
        }
        Ok(result.rows_affected)
    }

    /// Deletes a cancelled disbursement; attachments cascade, audit rows
    /// survive with a nulled reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is missing or not cancelled.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), DisbursementError> {
        let model = self
            .find_by_id(id)
            .await?
            .ok_or(DisbursementError::NotFound(id))?;

        can_delete(to_core_status(&model.status))?;

        let snapshot = serde_json::to_value(&model)?;

        let txn = self.db.begin().await?;

        audit_row(
            user_id,
            AuditAction::Delete,
            model.id,
            None,
            Some(snapshot),
            None,
        )
        .insert(&txn)
        .await?;

        disbursements::Entity::delete_by_id(model.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Computes count/sum/avg/min/max of amounts over the filtered set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn stats(
        &self,
        filter: &DisbursementFilter,
    ) -> Result<DisbursementStats, DbErr> {
        let row: Option<(i64, Option<Decimal>, Option<Decimal>, Option<Decimal>, Option<Decimal>)> =
            Self::apply_filter(disbursements::Entity::find(), filter)
                .select_only()
                .column_as(disbursements::Column::Id.count(), "count")
                .column_as(disbursements::Column::Amount.sum(), "total")
                .column_as(
                    SimpleExpr::from(Func::avg(Expr::col(disbursements::Column::Amount))),
                    "average",
                )
                .column_as(disbursements::Column::Amount.min(), "min")
                .column_as(disbursements::Column::Amount.max(), "max")
                .into_tuple()
                .one(&self.db)
                .await?;

        let (count, total, average, min, max) = row.unwrap_or((0, None, None, None, None));

        Ok(DisbursementStats {
            count: count.unsigned_abs(),
            total_amount: total.unwrap_or(Decimal::ZERO),
            average_amount: average.unwrap_or(Decimal::ZERO),
            min_amount: min,
            max_amount: max,
        })
    }

    /// Totals grouped by classification.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn totals_by_classification(
        &self,
        filter: &DisbursementFilter,
    ) -> Result<Vec<ClassificationTotal>, DbErr> {
        let rows: Vec<(Classification, i64, Option<Decimal>)> =
            Self::apply_filter(disbursements::Entity::find(), filter)
                .select_only()
                .column(disbursements::Column::Classification)
                .column_as(disbursements::Column::Id.count(), "count")
                .column_as(disbursements::Column::Amount.sum(), "total")
                .group_by(disbursements::Column::Classification)
                .into_tuple()
                .all(&self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(classification, count, total)| ClassificationTotal {
                classification,
                count: count.unsigned_abs(),
                total_amount: total.unwrap_or(Decimal::ZERO),
            })
            .collect())
    }

    /// Totals grouped by department, largest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn totals_by_department(
        &self,
        filter: &DisbursementFilter,
    ) -> Result<Vec<DepartmentTotal>, DbErr> {
        let rows: Vec<(String, i64, Option<Decimal>)> =
            Self::apply_filter(disbursements::Entity::find(), filter)
                .select_only()
                .column(disbursements::Column::Department)
                .column_as(disbursements::Column::Id.count(), "count")
                .column_as(disbursements::Column::Amount.sum(), "total")
                .group_by(disbursements::Column::Department)
                .order_by_desc(disbursements::Column::Amount.sum())
                .into_tuple()
                .all(&self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(department, count, total)| DepartmentTotal {
                department,
                count: count.unsigned_abs(),
                total_amount: total.unwrap_or(Decimal::ZERO),
            })
            .collect())
    }

    /// Totals grouped by lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn totals_by_status(
        &self,
        filter: &DisbursementFilter,
    ) -> Result<Vec<StatusTotal>, DbErr> {
        let rows: Vec<(DisbursementStatus, i64, Option<Decimal>)> =
            Self::apply_filter(disbursements::Entity::find(), filter)
                .select_only()
                .column(disbursements::Column::Status)
                .column_as(disbursements::Column::Id.count(), "count")
                .column_as(disbursements::Column::Amount.sum(), "total")
                .group_by(disbursements::Column::Status)
                .into_tuple()
                .all(&self.db)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(status, count, total)| StatusTotal {
                status,
                count: count.unsigned_abs(),
                total_amount: total.unwrap_or(Decimal::ZERO),
            })
            .collect())
    }

    fn apply_filter(
        mut query: sea_orm::Select<disbursements::Entity>,
        filter: &DisbursementFilter,
    ) -> sea_orm::Select<disbursements::Entity> {
        if let Some(status) = &filter.status {
            query = query.filter(disbursements::Column::Status.eq(status.clone()));
        }
        if let Some(classification) = &filter.classification {
            query = query.filter(disbursements::Column::Classification.eq(classification.clone()));
        }
        if let Some(department) = &filter.department {
            query = query.filter(disbursements::Column::Department.eq(department));
        }
        if let Some(fund_source) = &filter.fund_source {
            query = query.filter(disbursements::Column::FundSource.eq(fund_source));
        }
        if let Some(created_by) = filter.created_by {
            query = query.filter(disbursements::Column::CreatedBy.eq(created_by));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(disbursements::Column::DisbursementDate.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(disbursements::Column::DisbursementDate.lte(date_to));
        }
        if let Some(min_amount) = filter.min_amount {
            query = query.filter(disbursements::Column::Amount.gte(min_amount));
        }
        if let Some(max_amount) = filter.max_amount {
            query = query.filter(disbursements::Column::Amount.lte(max_amount));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(disbursements::Column::Payee.like(&pattern))
                    .add(disbursements::Column::Description.like(&pattern))
                    .add(disbursements::Column::ReferenceNumber.like(&pattern)),
            );
        }
        query
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Maps the database status to the core lifecycle status.
#[must_use]
pub fn to_core_status(status: &DisbursementStatus) -> CoreStatus {
    match status {
        DisbursementStatus::Active => CoreStatus::Active,
        DisbursementStatus::Cancelled => CoreStatus::Cancelled,
        DisbursementStatus::Archived => CoreStatus::Archived,
    }
}

/// Next sequence in the year's series given the latest stored voucher.
fn next_sequence(latest: Option<&str>, year: i32) -> Result<u32, DisbursementError> {
    let Some(latest) = latest else {
        return Ok(1);
    };

    let (_, seq) = parse_disbursement_no(latest)?;
    seq.checked_add(1)
        .filter(|&s| s <= 999_999)
        .ok_or(DisbursementError::SeriesExhausted(year))
}

fn audit_row(
    user_id: Uuid,
    action: AuditAction,
    entity_id: Uuid,
    disbursement_id: Option<Uuid>,
    old_values: Option<serde_json::Value>,
    new_values: Option<serde_json::Value>,
) -> audit_logs::ActiveModel {
    audit_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        action: Set(action),
        entity_type: Set("disbursement".to_string()),
        entity_id: Set(entity_id),
        disbursement_id: Set(disbursement_id),
        old_values: Set(old_values),
        new_values: Set(new_values),
        ip_address: Set(None),
        created_at: Set(Utc::now().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_is_exhaustive() {
        assert_eq!(
            to_core_status(&DisbursementStatus::Active),
            CoreStatus::Active
        );
        assert_eq!(
            to_core_status(&DisbursementStatus::Cancelled),
            CoreStatus::Cancelled
        );
        assert_eq!(
            to_core_status(&DisbursementStatus::Archived),
            CoreStatus::Archived
        );
    }

    #[test]
    fn test_next_sequence_starts_at_one() {
        assert_eq!(next_sequence(None, 2026).unwrap(), 1);
    }

    #[test]
    fn test_next_sequence_increments_latest() {
        assert_eq!(next_sequence(Some("DV-2026-000041"), 2026).unwrap(), 42);
    }

    #[test]
    fn test_next_sequence_rejects_garbage() {
        assert!(matches!(
            next_sequence(Some("DV-2026-woops"), 2026),
            Err(DisbursementError::Numbering(_))
        ));
    }

    #[test]
    fn test_next_sequence_exhaustion() {
        assert!(matches!(
            next_sequence(Some("DV-2026-999999"), 2026),
            Err(DisbursementError::SeriesExhausted(2026))
        ));
    }

    #[test]
    fn test_audit_row_shape() {
        let user = Uuid::new_v4();
        let entity = Uuid::new_v4();
        let row = audit_row(user, AuditAction::Delete, entity, None, None, None);

        assert_eq!(row.user_id.as_ref(), &user);
        assert_eq!(row.entity_id.as_ref(), &entity);
        assert_eq!(row.entity_type.as_ref(), "disbursement");
    }
}
