//! Family member repository, scoped to one household per call.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::family_members;

/// Error types for family member operations.
#[derive(Debug, thiserror::Error)]
pub enum MemberError {
    /// Name empty after trimming.
    #[error("Name is required")]
    EmptyName,

    /// Row absent, or owned by another household. The two cases are
    /// deliberately indistinguishable.
    #[error("Family member not found")]
    NotFound,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Family member repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: DatabaseConnection,
}

impl MemberRepository {
    /// Creates a new member repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a household's members, name ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, household_id: Uuid) -> Result<Vec<family_members::Model>, DbErr> {
        family_members::Entity::find()
            .filter(family_members::Column::HouseholdId.eq(household_id))
            .order_by_asc(family_members::Column::Name)
            .all(&self.db)
            .await
    }

    /// Creates a member. The name is trimmed before insertion.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if the name is blank after trimming.
    pub async fn create(
        &self,
        household_id: Uuid,
        name: &str,
    ) -> Result<family_members::Model, MemberError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MemberError::EmptyName);
        }

        let member = family_members::ActiveModel {
            id: Set(Uuid::new_v4()),
            household_id: Set(household_id),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        };

        Ok(member.insert(&self.db).await?)
    }

    /// Creates several members at once, dropping blank entries silently.
    ///
    /// All inserts run inside one database transaction, so a failure rolls
    /// the whole batch back. Returns the household's full member list after
    /// the batch lands.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` if no non-blank names remain after trimming.
    pub async fn create_bulk(
        &self,
        household_id: Uuid,
        names: &[String],
    ) -> Result<Vec<family_members::Model>, MemberError> {
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            return Err(MemberError::EmptyName);
        }

        let txn = self.db.begin().await?;

        let now = chrono::Utc::now();
        for name in names {
            let member = family_members::ActiveModel {
                id: Set(Uuid::new_v4()),
                household_id: Set(household_id),
                name: Set(name.to_string()),
                created_at: Set(now.into()),
            };
            member.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(self.list(household_id).await?)
    }

    /// Renames a member owned by the given household.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` for a blank name, or `NotFound` if the row does
    /// not exist under this household.
    pub async fn rename(
        &self,
        household_id: Uuid,
        member_id: Uuid,
        name: &str,
    ) -> Result<family_members::Model, MemberError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MemberError::EmptyName);
        }

        let member = family_members::Entity::find()
            .filter(family_members::Column::Id.eq(member_id))
            .filter(family_members::Column::HouseholdId.eq(household_id))
            .one(&self.db)
            .await?
            .ok_or(MemberError::NotFound)?;

        let mut member: family_members::ActiveModel = member.into();
        member.name = Set(name.to_string());

        Ok(member.update(&self.db).await?)
    }

    /// Deletes a member owned by the given household.
    ///
    /// Loans referencing the member's name are untouched; `borrowed_by` is
    /// denormalized, not a foreign key.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the row does not exist under this household.
    pub async fn delete(&self, household_id: Uuid, member_id: Uuid) -> Result<(), MemberError> {
        let result = family_members::Entity::delete_many()
            .filter(family_members::Column::Id.eq(member_id))
            .filter(family_members::Column::HouseholdId.eq(household_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(MemberError::NotFound);
        }

        Ok(())
    }
}
