//! Report lifecycle and parameter validation.
//!
//! Generated reports are queued as rows and walk
//! pending -> processing -> completed | failed. Parameters are a free-form
//! JSON document; the date window inside them is validated up front so a
//! report never fails deep inside generation for a backwards range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Processing status of a queued report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    /// Queued, not yet picked up.
    Pending,
    /// Generation in progress.
    Processing,
    /// Finished, output available.
    Completed,
    /// Generation failed.
    Failed,
}

/// Errors from report lifecycle and parameter checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Illegal status transition.
    #[error("cannot move report from {from:?} to {to:?}")]
    InvalidTransition {
        /// Current status.
        from: ReportStatus,
        /// Requested status.
        to: ReportStatus,
    },

    /// The requested date window is backwards.
    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// Window start.
        start: NaiveDate,
        /// Window end.
        end: NaiveDate,
    },
}

/// Date window common to all report parameter documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First day covered, inclusive.
    pub date_from: NaiveDate,
    /// Last day covered, inclusive.
    pub date_to: NaiveDate,
}

impl ReportWindow {
    /// Validates that the window is not backwards.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` when `date_from > date_to`.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.date_from > self.date_to {
            return Err(ReportError::InvalidDateRange {
                start: self.date_from,
                end: self.date_to,
            });
        }
        Ok(())
    }
}

/// Checks a report status transition.
///
/// Allowed edges: pending -> processing, processing -> completed,
/// processing -> failed. Everything else is rejected; completed and
/// failed are terminal.
///
/// # Errors
///
/// Returns `ReportError::InvalidTransition` for any other edge.
pub fn can_transition(from: ReportStatus, to: ReportStatus) -> Result<(), ReportError> {
    let allowed = matches!(
        (from, to),
        (ReportStatus::Pending, ReportStatus::Processing)
            | (ReportStatus::Processing, ReportStatus::Completed)
            | (ReportStatus::Processing, ReportStatus::Failed)
    );

    if allowed {
        Ok(())
    } else {
        Err(ReportError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ReportStatus::Pending, ReportStatus::Processing, true)]
    #[case(ReportStatus::Processing, ReportStatus::Completed, true)]
    #[case(ReportStatus::Processing, ReportStatus::Failed, true)]
    #[case(ReportStatus::Pending, ReportStatus::Completed, false)]
    #[case(ReportStatus::Pending, ReportStatus::Failed, false)]
    #[case(ReportStatus::Completed, ReportStatus::Processing, false)]
    #[case(ReportStatus::Failed, ReportStatus::Pending, false)]
    #[case(ReportStatus::Completed, ReportStatus::Failed, false)]
    fn test_transitions(
        #[case] from: ReportStatus,
        #[case] to: ReportStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(can_transition(from, to).is_ok(), allowed);
    }

    #[test]
    fn test_window_validation() {
        let ok = ReportWindow {
            date_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
        };
        assert!(ok.validate().is_ok());

        let single_day = ReportWindow {
            date_from: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        };
        assert!(single_day.validate().is_ok());

        let backwards = ReportWindow {
            date_from: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        assert!(matches!(
            backwards.validate(),
            Err(ReportError::InvalidDateRange { .. })
        ));
    }
}
