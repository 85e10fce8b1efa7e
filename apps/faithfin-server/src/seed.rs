//! Demo-account seeding for local development (`seed-demo` subcommand).

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};

use accounts::contract::model::{Credentials, NewUser, OnboardingProfile};
use accounts::domain::error::DomainError;
use finance::contract::model::{BudgetCategory, BudgetUpsert, IncomeSource};
use reset_program::contract::model::ResetGoal;

use crate::app::AppServices;

pub const DEMO_EMAIL: &str = "demo@faithfin.app";
const DEMO_PASSWORD: &str = "demo1234";

/// Create the demo user with a current-month budget and an onboarded reset
/// plan. Safe to re-run: an existing demo account is left untouched.
pub async fn seed_demo(services: &AppServices) -> Result<()> {
    let user = match services
        .accounts
        .signup(NewUser {
            name: "Grace Demo".to_string(),
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        })
        .await
    {
        Ok(user) => user,
        Err(DomainError::EmailAlreadyExists { .. }) => {
            tracing::info!("Demo user already exists");
            let (user, _token) = services
                .accounts
                .login(Credentials {
                    email: DEMO_EMAIL.to_string(),
                    password: DEMO_PASSWORD.to_string(),
                })
                .await
                .context("demo user exists but the demo password does not match")?;
            println!("Demo user already present: {}", user.email);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    services
        .accounts
        .onboard(
            user.id,
            OnboardingProfile {
                country: "US".to_string(),
                currency: "USD".to_string(),
                timezone: "America/New_York".to_string(),
                reset_goal: ResetGoal::BudgetDiscipline,
            },
        )
        .await
        .context("demo onboarding failed")?;

    let now = Utc::now();
    services
        .finance
        .upsert_budget(
            user.id,
            BudgetUpsert {
                month: now.month(),
                year: now.year(),
                incomes: vec![
                    IncomeSource {
                        label: "Salary".to_string(),
                        amount: 4500.0,
                        currency: "USD".to_string(),
                    },
                    IncomeSource {
                        label: "Freelance".to_string(),
                        amount: 500.0,
                        currency: "USD".to_string(),
                    },
                ],
                categories: [
                    ("Housing / Rent", 1200.0),
                    ("Food & Groceries", 400.0),
                    ("Transport", 200.0),
                    ("Utilities", 150.0),
                    ("Savings", 500.0),
                    ("Entertainment", 100.0),
                    ("Miscellaneous", 200.0),
                ]
                .into_iter()
                .map(|(name, planned_amount)| BudgetCategory {
                    name: name.to_string(),
                    planned_amount,
                    color: None,
                })
                .collect(),
            },
        )
        .await
        .context("demo budget failed")?;

    println!("Demo user created: {DEMO_EMAIL} / {DEMO_PASSWORD}");
    Ok(())
}
