//! `SeaORM` entity definitions for the disbursement tracking schema.

pub mod audit_logs;
pub mod classification_configs;
pub mod disbursement_attachments;
pub mod disbursements;
pub mod reports;
pub mod sea_orm_active_enums;
pub mod system_configs;
pub mod user_sessions;
pub mod users;
