//! User sessions migration.
//!
//! Creates the user_sessions table for opaque session token management.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(USER_SESSIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS user_sessions CASCADE;")
            .await?;
        Ok(())
    }
}

const USER_SESSIONS_SQL: &str = r"
CREATE TABLE user_sessions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    token_hash VARCHAR(64) NOT NULL UNIQUE,
    user_agent TEXT,
    ip_address VARCHAR(45),
    expires_at TIMESTAMPTZ NOT NULL,
    revoked_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_expires_future CHECK (expires_at > created_at)
);

-- Token lookup (most common operation)
CREATE INDEX idx_user_sessions_token ON user_sessions(token_hash)
    WHERE revoked_at IS NULL;

-- A user's active sessions, for the session management screen
CREATE INDEX idx_user_sessions_user ON user_sessions(user_id, created_at DESC)
    WHERE revoked_at IS NULL;

-- Cleanup of expired sessions
CREATE INDEX idx_user_sessions_expires ON user_sessions(expires_at)
    WHERE revoked_at IS NULL;
";
