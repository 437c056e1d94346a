use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotbook_api::config::ApiConfig;
use slotbook_db::{create_pool, schema::initialize_database};
use slotbook_notify::{Notifier, NotifierConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Build the outbound notifier if Telegram credentials are configured
    let notifier = match NotifierConfig::from_env() {
        Some(notifier_config) => Some(Notifier::new(notifier_config)?),
        None => None,
    };

    // Start API server
    slotbook_api::start_server(config, db_pool, notifier).await?;

    Ok(())
}
