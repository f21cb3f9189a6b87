//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Not-found and wrong-tenant outcomes are deliberately collapsed into
/// `NotFound` so that a caller can never learn whether a row exists under
/// another household. Unknown-name and wrong-password logins both map to
/// `InvalidCredentials` for the same reason.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid session.
    #[error("Not authenticated")]
    Unauthorized,

    /// Bad login: unknown family name or wrong password.
    #[error("Invalid family name or password")]
    InvalidCredentials,

    /// Row absent, or owned by another household.
    #[error("{0} not found")]
    NotFound(String),

    /// Missing or empty required field, or out-of-range value. The message
    /// is the wire body, verbatim.
    #[error("{0}")]
    Validation(String),

    /// Registration conflict on family name.
    #[error("Family name already exists")]
    Duplicate,

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => 401,
            Self::NotFound(_) => 404,
            Self::Validation(_) | Self::Duplicate => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Duplicate => "DUPLICATE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::Unauthorized.status_code(), 401);
        assert_eq!(AppError::InvalidCredentials.status_code(), 401);
        assert_eq!(AppError::NotFound(String::new()).status_code(), 404);
        assert_eq!(AppError::Validation(String::new()).status_code(), 400);
        assert_eq!(AppError::Duplicate.status_code(), 400);
        assert_eq!(AppError::Database(String::new()).status_code(), 500);
        assert_eq!(AppError::Internal(String::new()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Unauthorized.error_code(), "UNAUTHORIZED");
        assert_eq!(
            AppError::InvalidCredentials.error_code(),
            "INVALID_CREDENTIALS"
        );
        assert_eq!(AppError::NotFound(String::new()).error_code(), "NOT_FOUND");
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::Duplicate.error_code(), "DUPLICATE");
        assert_eq!(
            AppError::Database(String::new()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(AppError::Unauthorized.to_string(), "Not authenticated");
        assert_eq!(
            AppError::InvalidCredentials.to_string(),
            "Invalid family name or password"
        );
        assert_eq!(
            AppError::NotFound("Loan".into()).to_string(),
            "Loan not found"
        );
        assert_eq!(
            AppError::Validation("Members array is required".into()).to_string(),
            "Members array is required"
        );
        assert_eq!(
            AppError::Duplicate.to_string(),
            "Family name already exists"
        );
        assert_eq!(
            AppError::Database("msg".into()).to_string(),
            "Database error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}
