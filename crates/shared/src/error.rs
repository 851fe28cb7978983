//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Access denied for the current role.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record lifecycle rule violation (e.g. editing an archived record).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict, typically a unique constraint (duplicate email, DV number).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code used in API responses and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for errors caused by the caller rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized(_)
                | Self::Forbidden(_)
                | Self::NotFound(_)
                | Self::Validation(_)
                | Self::BusinessRule(_)
                | Self::Conflict(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Unauthorized(String::new()), "UNAUTHORIZED")]
    #[case(AppError::Forbidden(String::new()), "FORBIDDEN")]
    #[case(AppError::NotFound(String::new()), "NOT_FOUND")]
    #[case(AppError::Validation(String::new()), "VALIDATION_ERROR")]
    #[case(AppError::BusinessRule(String::new()), "BUSINESS_RULE_VIOLATION")]
    #[case(AppError::Conflict(String::new()), "CONFLICT")]
    #[case(AppError::Database(String::new()), "DATABASE_ERROR")]
    #[case(AppError::Internal(String::new()), "INTERNAL_ERROR")]
    fn test_error_codes(#[case] err: AppError, #[case] code: &str) {
        assert_eq!(err.error_code(), code);
    }

    #[test]
    fn test_client_error_split() {
        assert!(AppError::NotFound("x".into()).is_client_error());
        assert!(AppError::Conflict("x".into()).is_client_error());
        assert!(!AppError::Database("x".into()).is_client_error());
        assert!(!AppError::Internal("x".into()).is_client_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Conflict("duplicate DV number".into()).to_string(),
            "Conflict: duplicate DV number"
        );
        assert_eq!(
            AppError::NotFound("disbursement".into()).to_string(),
            "Not found: disbursement"
        );
    }
}
