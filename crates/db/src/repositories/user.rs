//! User repository for database operations.

use chrono::Utc;
use dvtrack_core::auth::{hash_password, PasswordError};
use dvtrack_shared::error::AppError;
use dvtrack_shared::types::{PageRequest, PageResponse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::UserRole, users};

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// User not found.
    #[error("User not found: {0}")]
    NotFound(Uuid),

    /// Email already registered.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Username already taken.
    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    /// Password hashing failed.
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => Self::NotFound(err.to_string()),
            UserError::DuplicateEmail(_) | UserError::DuplicateUsername(_) => {
                Self::Conflict(err.to_string())
            }
            UserError::Password(_) => Self::Internal(err.to_string()),
            UserError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Login email, unique.
    pub email: String,
    /// Display username, unique.
    pub username: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Application role.
    pub role: UserRole,
    /// Optional department assignment.
    pub department: Option<String>,
}

/// Input for updating a user; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserInput {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New department; `Some(None)` clears it.
    pub department: Option<Option<String>>,
    /// Activate or deactivate the account.
    pub is_active: Option<bool>,
}

/// Filter options for listing users.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Filter by role.
    pub role: Option<UserRole>,
    /// Filter by department.
    pub department: Option<String>,
    /// Filter by active flag.
    pub is_active: Option<bool>,
    /// Case-insensitive match on email, username, or names.
    pub search: Option<String>,
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
    }

    /// Creates a new user, hashing the password.
    ///
    /// # Errors
    ///
    /// Returns an error when the email or username is already taken,
    /// hashing fails, or the insert fails.
    pub async fn create(&self, input: CreateUserInput) -> Result<users::Model, UserError> {
        if self.email_exists(&input.email).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }
        if self.username_exists(&input.username).await? {
            return Err(UserError::DuplicateUsername(input.username));
        }

        let now = Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(input.email),
            username: Set(input.username),
            password_hash: Set(hash_password(&input.password)?),
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            role: Set(input.role),
            department: Set(input.department),
            is_active: Set(true),
            last_login_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(user.insert(&self.db).await?)
    }

    /// Updates a user's profile fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is missing or the update fails.
    pub async fn update(&self, id: Uuid, input: UpdateUserInput) -> Result<users::Model, UserError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let mut active: users::ActiveModel = user.into();

        if let Some(first_name) = input.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = input.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }
        if let Some(department) = input.department {
            active.department = Set(department);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Replaces a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing or the update fails.
    pub async fn change_password(&self, id: Uuid, new_password: &str) -> Result<(), UserError> {
        let user = users::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(id))?;

        let mut active: users::ActiveModel = user.into();
        active.password_hash = Set(hash_password(new_password)?);
        active.updated_at = Set(Utc::now().into());
        active.update(&self.db).await?;

        Ok(())
    }

    /// Stamps a successful login.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn record_login(&self, id: Uuid) -> Result<(), DbErr> {
        let now = Utc::now().into();

        users::ActiveModel {
            id: Set(id),
            last_login_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&self.db)
        .await?;

        Ok(())
    }

    /// Lists users matching the filter, paginated, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<users::Model>, DbErr> {
        let query = Self::apply_filter(users::Entity::find(), filter);

        let total = query.clone().count(&self.db).await?;
        let data = query
            .order_by_desc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(PageResponse::new(data, page, total))
    }

    /// Counts users matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self, filter: &UserFilter) -> Result<u64, DbErr> {
        Self::apply_filter(users::Entity::find(), filter)
            .count(&self.db)
            .await
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if a username is already taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    fn apply_filter(
        mut query: sea_orm::Select<users::Entity>,
        filter: &UserFilter,
    ) -> sea_orm::Select<users::Entity> {
        if let Some(role) = &filter.role {
            query = query.filter(users::Column::Role.eq(role.clone()));
        }
        if let Some(department) = &filter.department {
            query = query.filter(users::Column::Department.eq(department));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(users::Column::IsActive.eq(is_active));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{search}%");
            query = query.filter(
                Condition::any()
                    .add(users::Column::Email.like(&pattern))
                    .add(users::Column::Username.like(&pattern))
                    .add(users::Column::FirstName.like(&pattern))
                    .add(users::Column::LastName.like(&pattern)),
            );
        }
        query
    }
}
