//! Database seeder for DVTrack development and testing.
//!
//! Seeds an admin account, an encoder account, and a batch of sample
//! disbursement vouchers across departments and classifications.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Utc};
use dvtrack_db::entities::sea_orm_active_enums::{Classification, UserRole};
use dvtrack_db::repositories::{
    CreateDisbursementInput, CreateUserInput, DisbursementRepository, UserRepository,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

const ADMIN_EMAIL: &str = "admin@dvtrack.dev";
const ENCODER_EMAIL: &str = "encoder@dvtrack.dev";
/// Development-only password for both seeded accounts.
const SEED_PASSWORD: &str = "changeme123";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = dvtrack_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let users = UserRepository::new(db.clone());

    println!("Seeding admin user...");
    let admin_id = seed_user(
        &users,
        ADMIN_EMAIL,
        "admin",
        "System",
        "Administrator",
        UserRole::Admin,
        None,
    )
    .await;

    println!("Seeding encoder user...");
    let encoder_id = seed_user(
        &users,
        ENCODER_EMAIL,
        "encoder",
        "Sample",
        "Encoder",
        UserRole::Encoder,
        Some("Accounting Office"),
    )
    .await;

    println!("Seeding sample disbursements...");
    let disbursements = DisbursementRepository::new(db);
    seed_disbursements(&disbursements, encoder_id.unwrap_or_else(|| {
        admin_id.expect("at least one seeded user is required for disbursements")
    }))
    .await;

    println!("Seeding complete!");
}

/// Seeds a user, skipping if the email is already registered.
async fn seed_user(
    users: &UserRepository,
    email: &str,
    username: &str,
    first_name: &str,
    last_name: &str,
    role: UserRole,
    department: Option<&str>,
) -> Option<Uuid> {
    match users.find_by_email(email).await {
        Ok(Some(existing)) => {
            println!("  User {email} already exists, skipping...");
            return Some(existing.id);
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Failed to look up {email}: {e}");
            return None;
        }
    }

    let input = CreateUserInput {
        email: email.to_string(),
        username: username.to_string(),
        password: SEED_PASSWORD.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        role,
        department: department.map(String::from),
    };

    match users.create(input).await {
        Ok(user) => {
            println!("  Created user: {email}");
            Some(user.id)
        }
        Err(e) => {
            eprintln!("Failed to insert user {email}: {e}");
            None
        }
    }
}

/// Seeds one sample voucher per department/classification pairing.
async fn seed_disbursements(disbursements: &DisbursementRepository, created_by: Uuid) {
    let today = Utc::now().date_naive();

    let samples = [
        (
            "Meralco",
            dec!(45210.50),
            Classification::Mooe,
            "General Fund",
            "Accounting Office",
            "Electricity charges for the month",
        ),
        (
            "Juan Dela Cruz",
            dec!(18500.00),
            Classification::Ps,
            "General Fund",
            "Human Resources",
            "Salary differential, first semester",
        ),
        (
            "ABC Office Supplies Inc.",
            dec!(12975.25),
            Classification::Mooe,
            "General Fund",
            "General Services",
            "Office supplies, second quarter",
        ),
        (
            "XYZ Construction Corp.",
            dec!(350000.00),
            Classification::Co,
            "Special Education Fund",
            "Engineering Office",
            "Classroom repair, progress billing no. 2",
        ),
        (
            "Provincial Treasurer",
            dec!(75000.00),
            Classification::Tr,
            "Trust Fund",
            "Treasury Office",
            "Remittance of bid security refund",
        ),
    ];

    let mut inserted = 0;
    for (payee, amount, classification, fund_source, department, description) in samples {
        let input = CreateDisbursementInput {
            payee: payee.to_string(),
            amount,
            disbursement_date: today.with_day(1).unwrap_or(today),
            fund_source: fund_source.to_string(),
            classification,
            description: description.to_string(),
            reference_number: None,
            department: department.to_string(),
            created_by,
        };

        if let Err(e) = disbursements.create(input).await {
            eprintln!("Failed to insert disbursement for {payee}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} sample disbursements");
}
