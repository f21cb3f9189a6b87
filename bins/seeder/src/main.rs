//! Database seeder for Hearth development and testing.
//!
//! Seeds a demo household ("Demo" / "demo1234") with family members and a
//! few loans for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use hearth_core::auth::hash_password;
use hearth_db::entities::{households, sea_orm_active_enums::LoanSource};
use hearth_db::repositories::CreateLoanInput;
use hearth_db::{HouseholdRepository, LoanRepository, MemberRepository};

/// Demo household login handle.
const DEMO_FAMILY: &str = "Demo";
/// Demo household password.
const DEMO_PASSWORD: &str = "demo1234";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = hearth_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Resetting demo household...");
    reset_demo_household(&db).await;

    println!("Seeding demo household...");
    let household_id = seed_household(&db).await;

    println!("Seeding family members...");
    seed_members(&db, household_id).await;

    println!("Seeding loans...");
    seed_loans(&db, household_id).await;

    println!("Seeding complete! Login as '{DEMO_FAMILY}' / '{DEMO_PASSWORD}'");
}

/// Drops any previous demo household; members and loans cascade away.
async fn reset_demo_household(db: &DatabaseConnection) {
    households::Entity::delete_many()
        .filter(households::Column::FamilyName.eq(DEMO_FAMILY))
        .exec(db)
        .await
        .expect("Failed to delete existing demo household");
}

async fn seed_household(db: &DatabaseConnection) -> uuid::Uuid {
    let hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let household = HouseholdRepository::new(db.clone())
        .create(DEMO_FAMILY, &hash)
        .await
        .expect("Failed to create demo household");
    household.id
}

async fn seed_members(db: &DatabaseConnection, household_id: uuid::Uuid) {
    let names = vec![
        "Asha".to_string(),
        "Ravi".to_string(),
        "Meena".to_string(),
    ];
    MemberRepository::new(db.clone())
        .create_bulk(household_id, &names)
        .await
        .expect("Failed to seed family members");
}

async fn seed_loans(db: &DatabaseConnection, household_id: uuid::Uuid) {
    let repo = LoanRepository::new(db.clone());

    let loans = vec![
        CreateLoanInput {
            borrowed_by: "Asha".to_string(),
            lender_name: "SBI".to_string(),
            loan_source: LoanSource::Bank,
            amount: dec!(50000),
            loan_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            interest_rate: Some(dec!(9.5)),
            notes: Some("Tractor repair".to_string()),
        },
        CreateLoanInput {
            borrowed_by: "Ravi".to_string(),
            lender_name: "Village SHG".to_string(),
            loan_source: LoanSource::Shg,
            amount: dec!(12000),
            loan_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            interest_rate: Some(dec!(12)),
            notes: None,
        },
        CreateLoanInput {
            borrowed_by: "Meena".to_string(),
            lender_name: "HDFC".to_string(),
            loan_source: LoanSource::Bank,
            amount: dec!(200000),
            loan_date: NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            interest_rate: None,
            notes: Some("Interest-free staff loan".to_string()),
        },
    ];

    for input in loans {
        repo.create(household_id, input)
            .await
            .expect("Failed to seed loan");
    }
}
