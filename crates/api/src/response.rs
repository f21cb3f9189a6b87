//! Error-to-response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use hearth_db::repositories::{HouseholdError, LoanError, MemberError};
use hearth_shared::AppError;

/// Renders an `AppError` as `{"error": "..."}` with its status code.
///
/// Database and internal variants are logged and collapsed to a generic
/// message so raw storage text never reaches the client.
pub fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match err {
        AppError::Database(detail) | AppError::Internal(detail) => {
            error!(error = %detail, code = err.error_code(), "Request failed");
            "Server error".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(json!({ "error": message }))).into_response()
}

/// Maps a member repository error onto the shared taxonomy.
pub fn member_error(err: MemberError) -> AppError {
    match err {
        MemberError::EmptyName => AppError::Validation("Name is required".to_string()),
        MemberError::NotFound => AppError::NotFound("Family member".to_string()),
        MemberError::Database(e) => AppError::Database(e.to_string()),
    }
}

/// Maps a loan repository error onto the shared taxonomy.
pub fn loan_error(err: LoanError) -> AppError {
    match err {
        LoanError::EmptyField(_) | LoanError::AmountNotPositive | LoanError::NegativeRate => {
            AppError::Validation(err.to_string())
        }
        LoanError::NotFound => AppError::NotFound("Loan".to_string()),
        LoanError::Database(e) => AppError::Database(e.to_string()),
    }
}

/// Maps a household repository error onto the shared taxonomy.
pub fn household_error(err: HouseholdError) -> AppError {
    match err {
        HouseholdError::DuplicateName(_) => AppError::Duplicate,
        HouseholdError::Database(e) => AppError::Database(e.to_string()),
    }
}
