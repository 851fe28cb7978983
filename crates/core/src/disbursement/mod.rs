//! Disbursement voucher business rules.
//!
//! Numbering and status lifecycle for disbursement records. Persistence
//! lives in `dvtrack-db`; everything here is pure.

mod amount;
mod numbering;
mod status;

pub use amount::{validate_amount, AmountError, MAX_AMOUNT};
pub use numbering::{format_disbursement_no, parse_disbursement_no, NumberingError};
pub use status::{
    can_archive, can_cancel, can_delete, can_modify, DisbursementStatus, StatusError,
};
