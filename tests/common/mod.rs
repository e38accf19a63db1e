//! Shared setup for the integration tests: an in-memory SQLite database with
//! the real migrations applied, plus the app data the server registers.
#![allow(dead_code)]

use actix_web::web;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};

use portfolio_backend::auth::middleware::WriteAuth;
use portfolio_backend::config::SiteConfig;

/// Fresh database per test. A single connection keeps the in-memory
/// database alive for the whole test.
pub async fn setup_db() -> web::Data<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    web::Data::new(db)
}

pub fn open_writes() -> web::Data<WriteAuth> {
    web::Data::new(WriteAuth::Open)
}

pub fn site() -> web::Data<SiteConfig> {
    web::Data::new(SiteConfig::default())
}

pub fn skill(name: &str, level: i32, featured: bool) -> Value {
    json!({
        "name": name,
        "category": "programming",
        "proficiency_level": level,
        "years_experience": 2.5,
        "is_featured": featured,
    })
}

pub fn project(title: &str, technologies: &str, featured: bool, published: bool) -> Value {
    json!({
        "title": title,
        "description": format!("{title} built with {technologies}"),
        "short_description": title,
        "technologies": technologies,
        "is_featured": featured,
        "is_published": published,
        "start_date": "2023-01-01",
        "end_date": "2023-04-01",
    })
}

pub fn experience(company: &str, start: &str, current: bool) -> Value {
    json!({
        "company": company,
        "position": "Engineer",
        "description": "Shipped things",
        "start_date": start,
        "end_date": if current { Value::Null } else { json!("2024-01-01") },
        "is_current": current,
        "location": "Nairobi",
    })
}

pub fn education(institution: &str, current: bool) -> Value {
    json!({
        "institution": institution,
        "degree": "BSc",
        "field_of_study": "Computer Science",
        "start_date": "2018-09-01",
        "end_date": if current { Value::Null } else { json!("2022-06-30") },
        "is_current": current,
        "gpa": 3.6,
        "location": "Nairobi",
    })
}
