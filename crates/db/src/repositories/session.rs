//! Session repository for database operations.
//!
//! Sessions carry opaque tokens; only the SHA-256 hash hits the table.

use chrono::{DateTime, Duration, Utc};
use dvtrack_core::auth::{generate_session_token, hash_session_token};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::user_sessions;

/// Session repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    /// Creates a new session repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a session and returns the plaintext token with the row.
    ///
    /// The token is shown to the caller exactly once; only its hash is
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        user_id: Uuid,
        ttl: Duration,
        user_agent: Option<&str>,
        ip_address: Option<&str>,
    ) -> Result<(String, user_sessions::Model), DbErr> {
        let token = generate_session_token();
        let now = Utc::now();

        let session = user_sessions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            token_hash: Set(hash_session_token(&token)),
            user_agent: Set(user_agent.map(String::from)),
            ip_address: Set(ip_address.map(String::from)),
            expires_at: Set((now + ttl).into()),
            revoked_at: Set(None),
            created_at: Set(now.into()),
        };

        let model = session.insert(&self.db).await?;
        Ok((token, model))
    }

    /// Finds a live (unrevoked, unexpired) session by its token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<user_sessions::Model>, DbErr> {
        user_sessions::Entity::find()
            .filter(user_sessions::Column::TokenHash.eq(hash_session_token(token)))
            .filter(user_sessions::Column::RevokedAt.is_null())
            .filter(user_sessions::Column::ExpiresAt.gt(Utc::now()))
            .one(&self.db)
            .await
    }

    /// Finds a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_sessions::Model>, DbErr> {
        user_sessions::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists a user's active sessions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<user_sessions::Model>, DbErr> {
        user_sessions::Entity::find()
            .filter(user_sessions::Column::UserId.eq(user_id))
            .filter(user_sessions::Column::RevokedAt.is_null())
            .filter(user_sessions::Column::ExpiresAt.gt(Utc::now()))
            .order_by_desc(user_sessions::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Revokes a session by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn revoke(&self, id: Uuid) -> Result<(), DbErr> {
        user_sessions::ActiveModel {
            id: Set(id),
            revoked_at: Set(Some(Utc::now().into())),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(())
    }

    /// Revokes a session by its token; returns whether one was found.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn revoke_by_token(&self, token: &str) -> Result<bool, DbErr> {
        match self.find_by_token(token).await? {
            Some(session) => {
                self.revoke(session.id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Revokes all of a user's sessions (e.g. on deactivation).
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn revoke_all_for_user(&self, user_id: Uuid) -> Result<u64, DbErr> {
        let result = user_sessions::Entity::update_many()
            .col_expr(
                user_sessions::Column::RevokedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .filter(user_sessions::Column::UserId.eq(user_id))
            .filter(user_sessions::Column::RevokedAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts a user's active sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_active(&self, user_id: Uuid) -> Result<u64, DbErr> {
        user_sessions::Entity::find()
            .filter(user_sessions::Column::UserId.eq(user_id))
            .filter(user_sessions::Column::RevokedAt.is_null())
            .filter(user_sessions::Column::ExpiresAt.gt(Utc::now()))
            .count(&self.db)
            .await
    }

    /// Deletes sessions that expired before the cutoff (maintenance).
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn cleanup_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = user_sessions::Entity::delete_many()
            .filter(user_sessions::Column::ExpiresAt.lt(cutoff))
            .exec(&self.db)
            .await?;

        if result.rows_affected > 0 {
            tracing::info!(deleted = result.rows_affected, "cleaned up expired sessions");
        }
        Ok(result.rows_affected)
    }
}
