//! Database enum mappings.
//!
//! Each type maps a Postgres enum created in the initial migration.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application role of a user.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Full access, including user and configuration management.
    #[sea_orm(string_value = "admin")]
    Admin,
    /// May record and edit disbursements.
    #[sea_orm(string_value = "encoder")]
    Encoder,
    /// Read-only access to records and reports.
    #[sea_orm(string_value = "viewer")]
    Viewer,
}

/// Budget classification of a disbursement.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "classification")]
pub enum Classification {
    /// Personal Services.
    #[sea_orm(string_value = "PS")]
    Ps,
    /// Maintenance and Other Operating Expenses.
    #[sea_orm(string_value = "MOOE")]
    Mooe,
    /// Capital Outlay.
    #[sea_orm(string_value = "CO")]
    Co,
    /// Trust Receipts.
    #[sea_orm(string_value = "TR")]
    Tr,
}

/// Lifecycle status of a disbursement record.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "disbursement_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum DisbursementStatus {
    /// Live record.
    #[sea_orm(string_value = "active")]
    Active,
    /// Voided record, kept for the audit trail.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    /// Retained record moved out of the working set.
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// Kind of user action recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "audit_action")]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    /// Entity created.
    #[sea_orm(string_value = "create")]
    Create,
    /// Entity updated.
    #[sea_orm(string_value = "update")]
    Update,
    /// Entity deleted.
    #[sea_orm(string_value = "delete")]
    Delete,
    /// User signed in.
    #[sea_orm(string_value = "login")]
    Login,
    /// User signed out.
    #[sea_orm(string_value = "logout")]
    Logout,
    /// Data exported.
    #[sea_orm(string_value = "export")]
    Export,
    /// Sensitive record viewed.
    #[sea_orm(string_value = "view")]
    View,
}

/// Kind of generated report.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "report_type")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportType {
    /// Totals over the requested window.
    #[sea_orm(string_value = "summary")]
    Summary,
    /// Full row listing.
    #[sea_orm(string_value = "detailed")]
    Detailed,
    /// Grouped by budget classification.
    #[sea_orm(string_value = "classification")]
    Classification,
    /// Grouped by department.
    #[sea_orm(string_value = "department")]
    Department,
    /// Caller-defined parameters.
    #[sea_orm(string_value = "custom")]
    Custom,
}

/// Processing status of a queued report.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "report_status")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportStatus {
    /// Queued, not yet picked up.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Generation in progress.
    #[sea_orm(string_value = "processing")]
    Processing,
    /// Finished, output available.
    #[sea_orm(string_value = "completed")]
    Completed,
    /// Generation failed.
    #[sea_orm(string_value = "failed")]
    Failed,
}
