use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table. The primary key on slot_key IS the
    // double-booking guard: at most one row per (date, provider, time).
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            slot_key VARCHAR(255) PRIMARY KEY,
            date DATE NOT NULL,
            time VARCHAR(5) NOT NULL,
            provider_id VARCHAR(255) NOT NULL,
            service_id VARCHAR(255) NULL,
            name VARCHAR(255) NOT NULL,
            phone VARCHAR(64) NOT NULL,
            notes TEXT NOT NULL DEFAULT '',
            cancel_token UUID NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Taken-slot queries filter by exact (date, provider) equality
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_bookings_date_provider
        ON bookings (date, provider_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");
    Ok(())
}
