use investors_api::{config::Config, create_app, db, AppState};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let db = db::connect(&config.database_url).await?;
    // Make sure both tables exist before serving
    Migrator::up(&db, None).await?;

    let app = create_app(AppState { db }, config.frontend_origin.clone());
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
