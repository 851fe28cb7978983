//! Disbursement status lifecycle.
//!
//! A disbursement is `Active` when recorded. Cancelling keeps the record
//! for the audit trail but freezes it; archiving moves it out of the
//! working set. Archived and cancelled records are immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a disbursement record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisbursementStatus {
    /// Live record, may be edited.
    Active,
    /// Voided record, kept for the audit trail.
    Cancelled,
    /// Retained record moved out of the working set.
    Archived,
}

/// Errors from status lifecycle checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// Cancelled records reject edits.
    #[error("cannot modify a cancelled disbursement")]
    CannotModifyCancelled,

    /// Archived records reject edits.
    #[error("cannot modify an archived disbursement")]
    CannotModifyArchived,

    /// Only active records can be cancelled.
    #[error("only active disbursements can be cancelled")]
    CanOnlyCancelActive,

    /// Archived records cannot be archived again.
    #[error("disbursement is already archived")]
    AlreadyArchived,

    /// Only cancelled records can be deleted.
    #[error("only cancelled disbursements can be deleted")]
    CanOnlyDeleteCancelled,
}

/// Checks whether a disbursement may be edited.
///
/// # Errors
///
/// Returns an error for cancelled and archived records.
pub fn can_modify(status: DisbursementStatus) -> Result<(), StatusError> {
    match status {
        DisbursementStatus::Active => Ok(()),
        DisbursementStatus::Cancelled => Err(StatusError::CannotModifyCancelled),
        DisbursementStatus::Archived => Err(StatusError::CannotModifyArchived),
    }
}

/// Checks whether a disbursement may be cancelled.
///
/// # Errors
///
/// Returns an error unless the record is active.
pub fn can_cancel(status: DisbursementStatus) -> Result<(), StatusError> {
    match status {
        DisbursementStatus::Active => Ok(()),
        _ => Err(StatusError::CanOnlyCancelActive),
    }
}

/// Checks whether a disbursement may be archived.
///
/// Both active and cancelled records can be archived.
///
/// # Errors
///
/// Returns an error if the record is already archived.
pub fn can_archive(status: DisbursementStatus) -> Result<(), StatusError> {
    match status {
        DisbursementStatus::Archived => Err(StatusError::AlreadyArchived),
        _ => Ok(()),
    }
}

/// Checks whether a disbursement may be physically deleted.
///
/// Active and archived records are never deleted; cancellation is the
/// only path out of the ledger.
///
/// # Errors
///
/// Returns an error unless the record is cancelled.
pub fn can_delete(status: DisbursementStatus) -> Result<(), StatusError> {
    match status {
        DisbursementStatus::Cancelled => Ok(()),
        _ => Err(StatusError::CanOnlyDeleteCancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn status_strategy() -> impl Strategy<Value = DisbursementStatus> {
        prop_oneof![
            Just(DisbursementStatus::Active),
            Just(DisbursementStatus::Cancelled),
            Just(DisbursementStatus::Archived),
        ]
    }

    #[test]
    fn test_active_is_fully_mutable() {
        assert!(can_modify(DisbursementStatus::Active).is_ok());
        assert!(can_cancel(DisbursementStatus::Active).is_ok());
        assert!(can_archive(DisbursementStatus::Active).is_ok());
        assert!(can_delete(DisbursementStatus::Active).is_err());
    }

    #[test]
    fn test_cancelled_is_frozen_but_archivable_and_deletable() {
        assert_eq!(
            can_modify(DisbursementStatus::Cancelled),
            Err(StatusError::CannotModifyCancelled)
        );
        assert_eq!(
            can_cancel(DisbursementStatus::Cancelled),
            Err(StatusError::CanOnlyCancelActive)
        );
        assert!(can_archive(DisbursementStatus::Cancelled).is_ok());
        assert!(can_delete(DisbursementStatus::Cancelled).is_ok());
    }

    #[test]
    fn test_archived_is_terminal() {
        assert_eq!(
            can_modify(DisbursementStatus::Archived),
            Err(StatusError::CannotModifyArchived)
        );
        assert_eq!(
            can_cancel(DisbursementStatus::Archived),
            Err(StatusError::CanOnlyCancelActive)
        );
        assert_eq!(
            can_archive(DisbursementStatus::Archived),
            Err(StatusError::AlreadyArchived)
        );
        assert_eq!(
            can_delete(DisbursementStatus::Archived),
            Err(StatusError::CanOnlyDeleteCancelled)
        );
    }

    proptest! {
        /// Modification implies the record is active; nothing that rejects
        /// modification accepts cancellation either.
        #[test]
        fn prop_only_active_is_editable(status in status_strategy()) {
            let editable = can_modify(status).is_ok();
            prop_assert_eq!(editable, status == DisbursementStatus::Active);
            if !editable {
                prop_assert!(can_cancel(status).is_err());
            }
        }

        /// Deletion is only ever possible for records that reject edits;
        /// there is no state that is both editable and deletable.
        #[test]
        fn prop_no_state_is_editable_and_deletable(status in status_strategy()) {
            prop_assert!(!(can_modify(status).is_ok() && can_delete(status).is_ok()));
        }
    }
}
