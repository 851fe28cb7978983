//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. One repository per entity; business-rule checks call
//! into `dvtrack-core` before touching the database.

pub mod attachment;
pub mod audit;
pub mod classification;
pub mod disbursement;
pub mod report;
pub mod session;
pub mod system_config;
pub mod user;

pub use attachment::{AttachmentRepository, CreateAttachmentInput};
pub use audit::{AuditFilter, AuditLogRepository, RecordAuditInput};
pub use classification::{ClassificationError, ClassificationRepository, ClassificationInput};
pub use disbursement::{
    ClassificationTotal, CreateDisbursementInput, DepartmentTotal, DisbursementError,
    DisbursementFilter, DisbursementRepository, DisbursementStats, StatusTotal,
    UpdateDisbursementInput,
};
pub use report::{CreateReportInput, ReportFilter, ReportRepoError, ReportRepository};
pub use session::SessionRepository;
pub use system_config::SystemConfigRepository;
pub use user::{CreateUserInput, UpdateUserInput, UserError, UserFilter, UserRepository};
