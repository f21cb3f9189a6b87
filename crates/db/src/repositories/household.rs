//! Household repository: the credential store's persistence side.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::households;

/// Error types for household operations.
#[derive(Debug, thiserror::Error)]
pub enum HouseholdError {
    /// Family name already registered (case-sensitive exact match).
    #[error("Family name '{0}' already exists")]
    DuplicateName(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Household repository for registration and login lookups.
#[derive(Debug, Clone)]
pub struct HouseholdRepository {
    db: DatabaseConnection,
}

impl HouseholdRepository {
    /// Creates a new household repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new household.
    ///
    /// The caller hashes the password; this store only ever sees the PHC
    /// string.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the family name is taken, or a database
    /// error if the insert fails.
    pub async fn create(
        &self,
        family_name: &str,
        password_hash: &str,
    ) -> Result<households::Model, HouseholdError> {
        if self.name_exists(family_name).await? {
            return Err(HouseholdError::DuplicateName(family_name.to_string()));
        }

        let household = households::ActiveModel {
            id: Set(Uuid::new_v4()),
            family_name: Set(family_name.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        Ok(household.insert(&self.db).await?)
    }

    /// Finds a household by its exact family name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_name(
        &self,
        family_name: &str,
    ) -> Result<Option<households::Model>, DbErr> {
        households::Entity::find()
            .filter(households::Column::FamilyName.eq(family_name))
            .one(&self.db)
            .await
    }

    /// Finds a household by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<households::Model>, DbErr> {
        households::Entity::find_by_id(id).one(&self.db).await
    }

    /// Checks if a family name is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn name_exists(&self, family_name: &str) -> Result<bool, DbErr> {
        let count = households::Entity::find()
            .filter(households::Column::FamilyName.eq(family_name))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }
}
