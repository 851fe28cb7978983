//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the disbursement tracking schema
//! - Repository abstractions for data access
//! - Database migrations
//! - Connection lifecycle and raw query passthrough

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AttachmentRepository, AuditLogRepository, ClassificationRepository, DisbursementRepository,
    ReportRepository, SessionRepository, SystemConfigRepository, UserRepository,
};

use std::time::Duration;

use dvtrack_shared::config::DatabaseConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, ExecResult,
    QueryResult, Statement, Value,
};

/// Establishes a connection to the database with default pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Establishes a connection using pool sizing from [`DatabaseConfig`].
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs));

    Database::connect(options).await
}

/// Checks that the connection is alive.
///
/// # Errors
///
/// Returns an error if the database does not respond.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}

/// Runs a raw parameterized SELECT and returns the rows.
///
/// Escape hatch for queries the repositories do not cover; prefer the
/// typed repository methods.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn query_raw(
    db: &DatabaseConnection,
    sql: &str,
    values: Vec<Value>,
) -> Result<Vec<QueryResult>, DbErr> {
    db.query_all(Statement::from_sql_and_values(
        DbBackend::Postgres,
        sql,
        values,
    ))
    .await
}

/// Executes a raw parameterized statement and returns the result summary.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub async fn execute_raw(
    db: &DatabaseConnection,
    sql: &str,
    values: Vec<Value>,
) -> Result<ExecResult, DbErr> {
    db.execute(Statement::from_sql_and_values(
        DbBackend::Postgres,
        sql,
        values,
    ))
    .await
}
