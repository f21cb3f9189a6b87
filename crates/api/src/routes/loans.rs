//! Loan routes.
//!
//! Responses embed the server-side interest projection so every client
//! renders the same numbers.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::AuthSession;
use crate::response::{error_response, loan_error};
use crate::AppState;
use hearth_core::interest;
use hearth_db::LoanRepository;
use hearth_db::entities::{loans, sea_orm_active_enums::LoanSource};
use hearth_db::repositories::CreateLoanInput;
use hearth_shared::AppError;

/// Creates the loan routes (requires auth middleware to be applied
/// externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/loans", get(list_loans))
        .route("/loans", post(create_loan))
        .route("/loans/{id}", put(update_loan))
        .route("/loans/{id}", delete(delete_loan))
}

/// Request body for creating or fully replacing a loan.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Borrowing family member's name.
    pub borrowed_by: Option<String>,
    /// Lender name.
    pub lender_name: Option<String>,
    /// Loan origin: `bank` or `shg`.
    pub loan_source: Option<String>,
    /// Principal amount.
    pub amount: Option<Decimal>,
    /// Calendar date the loan was taken.
    pub date: Option<NaiveDate>,
    /// Annual interest rate in percent.
    pub interest_rate: Option<Decimal>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl LoanRequest {
    /// Checks required fields and builds the repository input.
    ///
    /// Presence checks happen here at the gateway; range and blank-string
    /// checks live in the repository.
    fn into_input(self) -> Result<CreateLoanInput, AppError> {
        let (Some(borrowed_by), Some(lender_name), Some(source), Some(amount), Some(date)) = (
            self.borrowed_by,
            self.lender_name,
            self.loan_source,
            self.amount,
            self.date,
        ) else {
            return Err(AppError::Validation("Missing required fields".to_string()));
        };

        let loan_source = LoanSource::parse(&source).ok_or_else(|| {
            AppError::Validation("Loan source must be 'bank' or 'shg'".to_string())
        })?;

        Ok(CreateLoanInput {
            borrowed_by,
            lender_name,
            loan_source,
            amount,
            loan_date: date,
            interest_rate: self.interest_rate,
            notes: self.notes,
        })
    }
}

/// Response for a loan, including the projected current value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    /// Loan id.
    pub id: Uuid,
    /// Borrowing family member's name.
    pub borrowed_by: String,
    /// Lender name.
    pub lender_name: String,
    /// Loan origin.
    pub loan_source: &'static str,
    /// Principal amount.
    pub amount: Decimal,
    /// Calendar date the loan was taken.
    pub date: NaiveDate,
    /// Annual interest rate in percent, when accruing.
    pub interest_rate: Option<Decimal>,
    /// Free-text notes.
    pub notes: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
    /// Projected value as of today; equals `amount` without a rate.
    pub current_amount: Decimal,
    /// Interest accrued so far.
    pub interest_accrued: Decimal,
}

impl LoanResponse {
    /// Builds a response, projecting the loan's value at `as_of`.
    fn from_model(model: loans::Model, as_of: NaiveDate) -> Self {
        let current =
            interest::project(model.amount, model.interest_rate, model.loan_date, as_of);

        Self {
            id: model.id,
            borrowed_by: model.borrowed_by,
            lender_name: model.lender_name,
            loan_source: model.loan_source.as_str(),
            amount: model.amount,
            date: model.loan_date,
            interest_rate: model.interest_rate,
            notes: model.notes,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            current_amount: current.round_dp(2),
            interest_accrued: (current - model.amount).round_dp(2),
        }
    }
}

/// GET /api/loans - List the household's loans, most recent first.
async fn list_loans(State(state): State<AppState>, session: AuthSession) -> Response {
    let repo = LoanRepository::new((*state.db).clone());
    let as_of = Utc::now().date_naive();

    match repo.list(session.household_id()).await {
        Ok(loans) => Json(
            loans
                .into_iter()
                .map(|loan| LoanResponse::from_model(loan, as_of))
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => error_response(&AppError::Database(e.to_string())),
    }
}

/// POST /api/loans - Record a loan.
async fn create_loan(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<LoanRequest>,
) -> Response {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(e) => return error_response(&e),
    };

    let repo = LoanRepository::new((*state.db).clone());

    match repo.create(session.household_id(), input).await {
        Ok(loan) => Json(LoanResponse::from_model(loan, Utc::now().date_naive())).into_response(),
        Err(e) => error_response(&loan_error(e)),
    }
}

/// PUT /api/loans/{id} - Fully replace a loan's mutable fields.
async fn update_loan(
    State(state): State<AppState>,
    session: AuthSession,
    Path(loan_id): Path<Uuid>,
    Json(payload): Json<LoanRequest>,
) -> Response {
    let input = match payload.into_input() {
        Ok(input) => input,
        Err(e) => return error_response(&e),
    };

    let repo = LoanRepository::new((*state.db).clone());

    match repo.update(session.household_id(), loan_id, input).await {
        Ok(loan) => Json(LoanResponse::from_model(loan, Utc::now().date_naive())).into_response(),
        Err(e) => error_response(&loan_error(e)),
    }
}

/// DELETE /api/loans/{id} - Remove a loan.
async fn delete_loan(
    State(state): State<AppState>,
    session: AuthSession,
    Path(loan_id): Path<Uuid>,
) -> Response {
    let repo = LoanRepository::new((*state.db).clone());

    match repo.delete(session.household_id(), loan_id).await {
        Ok(()) => Json(serde_json::json!({
            "success": true,
            "message": "Loan deleted successfully"
        }))
        .into_response(),
        Err(e) => error_response(&loan_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn full_request() -> LoanRequest {
        serde_json::from_str(
            r#"{
                "borrowedBy": "Alice",
                "lenderName": "SBI",
                "loanSource": "bank",
                "amount": 50000,
                "date": "2024-01-01"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_into_input_defaults_optionals() {
        let input = full_request().into_input().unwrap();
        assert_eq!(input.borrowed_by, "Alice");
        assert_eq!(input.loan_source, LoanSource::Bank);
        assert_eq!(input.amount, dec!(50000));
        assert_eq!(input.interest_rate, None);
        assert_eq!(input.notes, None);
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let request: LoanRequest =
            serde_json::from_str(r#"{"borrowedBy": "Alice", "amount": 50000}"#).unwrap();
        assert!(matches!(
            request.into_input(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_unknown_loan_source_rejected() {
        let mut request = full_request();
        request.loan_source = Some("credit_union".to_string());
        assert!(matches!(
            request.into_input(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_projection_embedded_without_rate() {
        let now = Utc::now();
        let model = loans::Model {
            id: Uuid::new_v4(),
            household_id: Uuid::new_v4(),
            borrowed_by: "Alice".to_string(),
            lender_name: "SBI".to_string(),
            loan_source: LoanSource::Bank,
            amount: dec!(50000),
            loan_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_rate: None,
            notes: String::new(),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let response = LoanResponse::from_model(model, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(response.current_amount, dec!(50000));
        assert_eq!(response.interest_accrued, dec!(0));
    }

    #[test]
    fn test_projection_embedded_with_rate() {
        let now = Utc::now();
        let model = loans::Model {
            id: Uuid::new_v4(),
            household_id: Uuid::new_v4(),
            borrowed_by: "Alice".to_string(),
            lender_name: "SBI".to_string(),
            loan_source: LoanSource::Shg,
            amount: dec!(10000),
            loan_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            interest_rate: Some(dec!(10)),
            notes: String::new(),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let response = LoanResponse::from_model(model, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(response.loan_source, "shg");
        assert!((response.current_amount - dec!(10999.32)).abs() < dec!(0.01));
        assert_eq!(
            response.interest_accrued,
            response.current_amount - dec!(10000)
        );
    }
}
