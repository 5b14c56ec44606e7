use std::env;
use std::fs::File;

use anyhow::Context;
use investors_api::config::SeedConfig;
use investors_api::db;
use investors_api::jobs::run_seed;
use migration::{Migrator, MigratorTrait};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise tracing (INFO level)
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let config = SeedConfig::from_env();

    // Command-line flags
    let args: Vec<String> = env::args().collect();
    let keep_existing = args.iter().any(|a| a == "--keep-existing");

    let db = db::connect(&config.database_url).await?;

    if keep_existing {
        Migrator::up(&db, None).await?;
    } else {
        // Drops existing data
        info!("Recreating schema");
        Migrator::fresh(&db).await?;
    }

    let file = File::open(&config.seed_csv)
        .with_context(|| format!("failed to open {}", config.seed_csv.display()))?;
    let summary = run_seed(&db, file).await?;

    info!(
        "Database has been initialized with data from {} ({} investors, {} commitments)",
        config.seed_csv.display(),
        summary.investors_created,
        summary.commitments_inserted
    );
    Ok(())
}
