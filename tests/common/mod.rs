#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt; // For Response body handling
use investors_api::entities::investor;
use investors_api::jobs::run_seed;
use investors_api::{create_app, db, AppState};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use std::sync::Once;
use tower::ServiceExt; // For oneshot

pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Acme Fund (id 1) and Beta Capital (id 2), seeded in that order.
pub const SCENARIO_CSV: &str = "\
Investor Name,Investory Type,Investor Country,Investor Date Added,Investor Last Updated,Commitment Asset Class,Commitment Amount,Commitment Currency
Acme Fund,fund manager,United Kingdom,2020-01-15,2024-02-21,Real Estate,1000000,GBP
Acme Fund,fund manager,United Kingdom,2020-01-15,2024-02-21,Infrastructure,500000,GBP
Beta Capital,bank,France,2019-03-01,2024-01-10,Private Equity,250000,GBP
Beta Capital,bank,France,2019-03-01,2024-01-10,Infrastructure,125000,GBP
Beta Capital,bank,France,2019-03-01,2024-01-10,Private Equity,62500,EUR
";

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        // Initialize tracing for tests - only once
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Fresh in-memory database with the schema applied.
pub async fn test_db() -> DatabaseConnection {
    setup();
    let db = db::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn seeded_db() -> DatabaseConnection {
    let db = test_db().await;
    run_seed(&db, SCENARIO_CSV.as_bytes()).await.unwrap();
    db
}

pub fn app_for(db: &DatabaseConnection) -> Router {
    create_app(
        AppState { db: db.clone() },
        HeaderValue::from_static(FRONTEND_ORIGIN),
    )
}

pub async fn insert_investor_without_commitments(db: &DatabaseConnection, name: &str) -> i32 {
    let created = investor::ActiveModel {
        name: Set(name.to_string()),
        investor_type: Set("family office".to_string()),
        country: Set("Ireland".to_string()),
        date_added: Set(NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()),
        last_updated: Set(NaiveDate::from_ymd_opt(2024, 2, 21).unwrap()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
    created.id
}

/// Sends a GET through the full router and returns status plus parsed JSON body.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

/// Sorted (asset_class, amount) pairs of a commitments JSON array.
pub fn commitment_pairs(commitments: &Value) -> Vec<(String, f64)> {
    let mut pairs: Vec<(String, f64)> = commitments
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["asset_class"].as_str().unwrap().to_string(),
                c["amount"].as_f64().unwrap(),
            )
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.partial_cmp(&b.1).unwrap()));
    pairs
}
