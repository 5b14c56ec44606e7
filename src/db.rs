use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait};

use crate::entities::{Commitment, Investor as InvestorEntity};
use crate::models::Investor;

/// Opens the connection pool. Every query checks a connection out of the
/// pool and hands it back when it finishes, on success or failure.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let backend = if database_url.starts_with("postgres") { "PostgreSQL" } else { "SQLite" };
    tracing::info!("Connecting to database: {}", backend);

    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    if database_url.contains(":memory:") {
        // each pooled connection would otherwise get its own empty database
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Looks up one investor together with all of its commitments.
pub async fn find_investor(db: &DatabaseConnection, investor_id: i32) -> Result<Option<Investor>, DbErr> {
    let rows = InvestorEntity::find_by_id(investor_id)
        .find_with_related(Commitment)
        .all(db)
        .await?;

    Ok(rows.into_iter().next().map(Investor::from))
}

/// Every stored investor with its commitments, in storage order.
pub async fn list_investors(db: &DatabaseConnection) -> Result<Vec<Investor>, DbErr> {
    let rows = InvestorEntity::find()
        .find_with_related(Commitment)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(Investor::from).collect())
}
