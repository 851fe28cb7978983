//! Initial database migration.
//!
//! Creates the enums, core tables, indexes, and seed rows for the
//! disbursement tracking schema.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: USERS
        // ============================================================
        db.execute_unprepared(USERS_SQL).await?;

        // ============================================================
        // PART 3: DISBURSEMENTS & ATTACHMENTS
        // ============================================================
        db.execute_unprepared(DISBURSEMENTS_SQL).await?;
        db.execute_unprepared(ATTACHMENTS_SQL).await?;

        // ============================================================
        // PART 4: CONFIGURATION
        // ============================================================
        db.execute_unprepared(CLASSIFICATION_CONFIGS_SQL).await?;
        db.execute_unprepared(SYSTEM_CONFIGS_SQL).await?;

        // ============================================================
        // PART 5: AUDIT LOG & REPORTS
        // ============================================================
        db.execute_unprepared(AUDIT_LOGS_SQL).await?;
        db.execute_unprepared(REPORTS_SQL).await?;

        // ============================================================
        // PART 6: SEED DATA
        // ============================================================
        db.execute_unprepared(SEED_CLASSIFICATIONS_SQL).await?;
        db.execute_unprepared(SEED_SYSTEM_CONFIGS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Application roles
CREATE TYPE user_role AS ENUM ('admin', 'encoder', 'viewer');

-- Budget classifications (codes match government budget categories)
CREATE TYPE classification AS ENUM ('PS', 'MOOE', 'CO', 'TR');

-- Disbursement lifecycle
CREATE TYPE disbursement_status AS ENUM ('active', 'cancelled', 'archived');

-- Audited actions
CREATE TYPE audit_action AS ENUM (
    'create',
    'update',
    'delete',
    'login',
    'logout',
    'export',
    'view'
);

-- Report kinds
CREATE TYPE report_type AS ENUM (
    'summary',
    'detailed',
    'classification',
    'department',
    'custom'
);

-- Report processing states
CREATE TYPE report_status AS ENUM ('pending', 'processing', 'completed', 'failed');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) NOT NULL UNIQUE,
    username VARCHAR(100) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    role user_role NOT NULL DEFAULT 'viewer',
    department VARCHAR(100),
    is_active BOOLEAN NOT NULL DEFAULT true,
    last_login_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Role filter for the user management screen
CREATE INDEX idx_users_role ON users(role) WHERE is_active;
";

const DISBURSEMENTS_SQL: &str = r"
CREATE TABLE disbursements (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    disbursement_no VARCHAR(20) NOT NULL UNIQUE,
    payee VARCHAR(255) NOT NULL,
    amount NUMERIC(14, 2) NOT NULL CHECK (amount > 0),
    disbursement_date DATE NOT NULL,
    fund_source VARCHAR(100) NOT NULL,
    classification classification NOT NULL,
    description TEXT NOT NULL,
    reference_number VARCHAR(100),
    department VARCHAR(100) NOT NULL,
    status disbursement_status NOT NULL DEFAULT 'active',
    created_by UUID NOT NULL REFERENCES users(id),
    updated_by UUID REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Working-set listing: newest first within the live records
CREATE INDEX idx_disbursements_status_date
    ON disbursements(status, disbursement_date DESC);

-- Breakdown queries
CREATE INDEX idx_disbursements_classification ON disbursements(classification);
CREATE INDEX idx_disbursements_department ON disbursements(department);

-- Encoder's own entries view
CREATE INDEX idx_disbursements_created_by
    ON disbursements(created_by, created_at DESC);
";

const ATTACHMENTS_SQL: &str = r"
CREATE TABLE disbursement_attachments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    disbursement_id UUID NOT NULL REFERENCES disbursements(id) ON DELETE CASCADE,
    file_name VARCHAR(255) NOT NULL,
    file_path TEXT NOT NULL,
    file_size BIGINT NOT NULL CHECK (file_size >= 0),
    mime_type VARCHAR(127) NOT NULL,
    uploaded_by UUID NOT NULL REFERENCES users(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_attachments_disbursement
    ON disbursement_attachments(disbursement_id, created_at DESC);
";

const CLASSIFICATION_CONFIGS_SQL: &str = r"
CREATE TABLE classification_configs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    code VARCHAR(10) NOT NULL UNIQUE,
    name VARCHAR(100) NOT NULL,
    description TEXT,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const SYSTEM_CONFIGS_SQL: &str = r"
CREATE TABLE system_configs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    key VARCHAR(100) NOT NULL UNIQUE,
    value TEXT NOT NULL,
    description TEXT,
    updated_by UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const AUDIT_LOGS_SQL: &str = r"
CREATE TABLE audit_logs (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id),
    action audit_action NOT NULL,
    entity_type VARCHAR(50) NOT NULL,
    entity_id UUID NOT NULL,
    disbursement_id UUID REFERENCES disbursements(id) ON DELETE SET NULL,
    old_values JSONB,
    new_values JSONB,
    ip_address VARCHAR(45),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- System logs screen: newest first, filterable by actor and entity
CREATE INDEX idx_audit_logs_created ON audit_logs(created_at DESC);
CREATE INDEX idx_audit_logs_user ON audit_logs(user_id, created_at DESC);
CREATE INDEX idx_audit_logs_entity ON audit_logs(entity_type, entity_id);
CREATE INDEX idx_audit_logs_disbursement ON audit_logs(disbursement_id)
    WHERE disbursement_id IS NOT NULL;
";

const REPORTS_SQL: &str = r"
CREATE TABLE reports (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    report_type report_type NOT NULL,
    parameters JSONB NOT NULL DEFAULT '{}',
    status report_status NOT NULL DEFAULT 'pending',
    file_path TEXT,
    error_message TEXT,
    created_by UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    completed_at TIMESTAMPTZ
);

-- Worker queue scan
CREATE INDEX idx_reports_pending ON reports(created_at) WHERE status = 'pending';
CREATE INDEX idx_reports_created_by ON reports(created_by, created_at DESC);
";

const SEED_CLASSIFICATIONS_SQL: &str = r"
INSERT INTO classification_configs (code, name, description) VALUES
    ('PS',   'Personal Services',
     'Salaries, wages, and other compensation'),
    ('MOOE', 'Maintenance and Other Operating Expenses',
     'Operating expenses including supplies and utilities'),
    ('CO',   'Capital Outlay',
     'Infrastructure, equipment, and capital assets'),
    ('TR',   'Trust Receipts',
     'Funds held in trust for specific purposes');
";

const SEED_SYSTEM_CONFIGS_SQL: &str = r"
INSERT INTO system_configs (key, value, description) VALUES
    ('app.name', 'Disbursement Tracking System', 'Display name'),
    ('retention.audit_log_days', '730', 'Audit log retention window in days'),
    ('export.max_rows', '50000', 'Row cap for report exports');
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS reports CASCADE;
DROP TABLE IF EXISTS audit_logs CASCADE;
DROP TABLE IF EXISTS system_configs CASCADE;
DROP TABLE IF EXISTS classification_configs CASCADE;
DROP TABLE IF EXISTS disbursement_attachments CASCADE;
DROP TABLE IF EXISTS disbursements CASCADE;
DROP TABLE IF EXISTS users CASCADE;

DROP TYPE IF EXISTS report_status;
DROP TYPE IF EXISTS report_type;
DROP TYPE IF EXISTS audit_action;
DROP TYPE IF EXISTS disbursement_status;
DROP TYPE IF EXISTS classification;
DROP TYPE IF EXISTS user_role;
";
