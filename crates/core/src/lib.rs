//! Core business rules for dvtrack.
//!
//! Pure logic with no database or web dependencies:
//! - Password hashing and session token handling
//! - Disbursement voucher numbering and status lifecycle
//! - Audit snapshot diffing
//! - Report parameter validation and status transitions

pub mod audit;
pub mod auth;
pub mod disbursement;
pub mod report;
