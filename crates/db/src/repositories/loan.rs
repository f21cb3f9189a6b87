//! Loan repository, scoped to one household per call.
//!
//! Validation runs at the repository boundary before any storage call:
//! required text fields must be non-blank, the amount strictly positive,
//! and the interest rate non-negative when present.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{loans, sea_orm_active_enums::LoanSource};

/// Error types for loan operations.
#[derive(Debug, thiserror::Error)]
pub enum LoanError {
    /// A required text field is missing or blank.
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// Amount must be strictly positive.
    #[error("Amount must be greater than zero")]
    AmountNotPositive,

    /// Interest rate, when present, cannot be negative.
    #[error("Interest rate cannot be negative")]
    NegativeRate,

    /// Row absent, or owned by another household. The two cases are
    /// deliberately indistinguishable.
    #[error("Loan not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating or fully replacing a loan.
#[derive(Debug, Clone)]
pub struct CreateLoanInput {
    /// Name of the borrowing family member (denormalized, no FK).
    pub borrowed_by: String,
    /// Name of the lender.
    pub lender_name: String,
    /// Institutional or informal origin.
    pub loan_source: LoanSource,
    /// Principal amount; must be > 0.
    pub amount: Decimal,
    /// Calendar date the loan was taken.
    pub loan_date: NaiveDate,
    /// Annual interest rate in percent; absent means no accrual.
    pub interest_rate: Option<Decimal>,
    /// Free-text notes; defaults to empty.
    pub notes: Option<String>,
}

impl CreateLoanInput {
    /// Validates field-level invariants before any storage call.
    fn validate(&self) -> Result<(), LoanError> {
        if self.borrowed_by.trim().is_empty() {
            return Err(LoanError::EmptyField("Borrowed by"));
        }
        if self.lender_name.trim().is_empty() {
            return Err(LoanError::EmptyField("Lender name"));
        }
        if self.amount <= Decimal::ZERO {
            return Err(LoanError::AmountNotPositive);
        }
        if self.interest_rate.is_some_and(|r| r < Decimal::ZERO) {
            return Err(LoanError::NegativeRate);
        }
        Ok(())
    }
}

/// Loan repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    db: DatabaseConnection,
}

impl LoanRepository {
    /// Creates a new loan repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a household's loans, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, household_id: Uuid) -> Result<Vec<loans::Model>, DbErr> {
        loans::Entity::find()
            .filter(loans::Column::HouseholdId.eq(household_id))
            .order_by_desc(loans::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Finds a loan owned by the given household.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find(
        &self,
        household_id: Uuid,
        loan_id: Uuid,
    ) -> Result<Option<loans::Model>, DbErr> {
        loans::Entity::find()
            .filter(loans::Column::Id.eq(loan_id))
            .filter(loans::Column::HouseholdId.eq(household_id))
            .one(&self.db)
            .await
    }

    /// Creates a loan after validating the input.
    ///
    /// # Errors
    ///
    /// Returns a validation error or a database error.
    pub async fn create(
        &self,
        household_id: Uuid,
        input: CreateLoanInput,
    ) -> Result<loans::Model, LoanError> {
        input.validate()?;

        let now = chrono::Utc::now().into();
        let loan = loans::ActiveModel {
            id: Set(Uuid::new_v4()),
            household_id: Set(household_id),
            borrowed_by: Set(input.borrowed_by.trim().to_string()),
            lender_name: Set(input.lender_name.trim().to_string()),
            loan_source: Set(input.loan_source),
            amount: Set(input.amount),
            loan_date: Set(input.loan_date),
            interest_rate: Set(input.interest_rate),
            notes: Set(input.notes.unwrap_or_default()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(loan.insert(&self.db).await?)
    }

    /// Fully replaces a loan's mutable fields and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error, `NotFound` if the row does not exist
    /// under this household, or a database error.
    pub async fn update(
        &self,
        household_id: Uuid,
        loan_id: Uuid,
        input: CreateLoanInput,
    ) -> Result<loans::Model, LoanError> {
        input.validate()?;

        let loan = self
            .find(household_id, loan_id)
            .await?
            .ok_or(LoanError::NotFound)?;

        let mut loan: loans::ActiveModel = loan.into();
        loan.borrowed_by = Set(input.borrowed_by.trim().to_string());
        loan.lender_name = Set(input.lender_name.trim().to_string());
        loan.loan_source = Set(input.loan_source);
        loan.amount = Set(input.amount);
        loan.loan_date = Set(input.loan_date);
        loan.interest_rate = Set(input.interest_rate);
        loan.notes = Set(input.notes.unwrap_or_default());
        loan.updated_at = Set(chrono::Utc::now().into());

        Ok(loan.update(&self.db).await?)
    }

    /// Deletes a loan owned by the given household.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist under this household.
    pub async fn delete(&self, household_id: Uuid, loan_id: Uuid) -> Result<(), LoanError> {
        let result = loans::Entity::delete_many()
            .filter(loans::Column::Id.eq(loan_id))
            .filter(loans::Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(LoanError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_input() -> CreateLoanInput {
        CreateLoanInput {
            borrowed_by: "Alice".to_string(),
            lender_name: "SBI".to_string(),
            loan_source: LoanSource::Bank,
            amount: dec!(50000),
            loan_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            interest_rate: None,
            notes: None,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_blank_borrower_rejected() {
        let mut input = valid_input();
        input.borrowed_by = "   ".to_string();
        assert!(matches!(
            input.validate(),
            Err(LoanError::EmptyField("Borrowed by"))
        ));
    }

    #[test]
    fn test_blank_lender_rejected() {
        let mut input = valid_input();
        input.lender_name = String::new();
        assert!(matches!(
            input.validate(),
            Err(LoanError::EmptyField("Lender name"))
        ));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut input = valid_input();
        input.amount = Decimal::ZERO;
        assert!(matches!(
            input.validate(),
            Err(LoanError::AmountNotPositive)
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut input = valid_input();
        input.amount = dec!(-100);
        assert!(matches!(
            input.validate(),
            Err(LoanError::AmountNotPositive)
        ));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let mut input = valid_input();
        input.interest_rate = Some(dec!(-1));
        assert!(matches!(input.validate(), Err(LoanError::NegativeRate)));
    }

    #[test]
    fn test_zero_rate_allowed() {
        let mut input = valid_input();
        input.interest_rate = Some(Decimal::ZERO);
        assert!(input.validate().is_ok());
    }
}
