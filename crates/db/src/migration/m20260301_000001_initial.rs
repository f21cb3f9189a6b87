//! Initial database migration.
//!
//! Creates the loan_source enum and the households, family_members, and
//! loans tables with their tenant-scoping indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(HOUSEHOLDS_SQL).await?;
        db.execute_unprepared(FAMILY_MEMBERS_SQL).await?;
        db.execute_unprepared(LOANS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "DROP TABLE IF EXISTS loans CASCADE;
             DROP TABLE IF EXISTS family_members CASCADE;
             DROP TABLE IF EXISTS households CASCADE;
             DROP TYPE IF EXISTS loan_source;",
        )
        .await?;

        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE loan_source AS ENUM ('bank', 'shg');
";

const HOUSEHOLDS_SQL: &str = r"
-- Households: the tenant and unit of data isolation
CREATE TABLE households (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    family_name VARCHAR(255) UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const FAMILY_MEMBERS_SQL: &str = r"
-- Family members, owned by one household
CREATE TABLE family_members (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    household_id UUID NOT NULL REFERENCES households(id) ON DELETE CASCADE,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Listing is always scoped to a household, name ascending
CREATE INDEX idx_family_members_household ON family_members(household_id, name);
";

const LOANS_SQL: &str = r"
-- Loans, owned by one household; borrowed_by is a denormalized member name
CREATE TABLE loans (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    household_id UUID NOT NULL REFERENCES households(id) ON DELETE CASCADE,
    borrowed_by VARCHAR(255) NOT NULL,
    lender_name VARCHAR(255) NOT NULL,
    loan_source loan_source NOT NULL,
    amount NUMERIC(15, 2) NOT NULL,
    loan_date DATE NOT NULL,
    interest_rate NUMERIC(7, 4),
    notes TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_amount_positive CHECK (amount > 0),
    CONSTRAINT chk_rate_non_negative CHECK (interest_rate IS NULL OR interest_rate >= 0)
);

-- Listing is always scoped to a household, most recent first
CREATE INDEX idx_loans_household ON loans(household_id, created_at DESC);
";
