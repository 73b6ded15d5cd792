use clinicdesk_api::seed::seed_demo_accounts;
use clinicdesk_db::{create_pool, schema::initialize_database};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://clinic.db".to_string());

    info!("Connecting to {}", database_url);
    let db_pool = create_pool(&database_url).await?;

    info!("Initializing database schema");
    initialize_database(&db_pool).await?;
    info!("Database schema initialized successfully");

    let seed = std::env::var("SEED_DEMO_ACCOUNTS")
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if seed {
        seed_demo_accounts(&db_pool).await?;
    }

    Ok(())
}
