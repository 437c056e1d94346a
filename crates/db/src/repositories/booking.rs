use crate::models::{DbBooking, NewBooking};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Attempts to claim a slot. Returns `None` when the slot is already booked.
///
/// The insert is conditional on the slot_key primary key in a single
/// statement, so two concurrent claims for the same key can never both
/// observe "absent": the store decides the winner and the loser gets no
/// row back. Nothing is ever mutated on conflict.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    new_booking: NewBooking,
) -> Result<Option<DbBooking>> {
    let now = Utc::now();

    tracing::debug!(
        "Claiming slot: key={}, provider={}, service={:?}",
        new_booking.slot_key,
        new_booking.provider_id,
        new_booking.service_id
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings
            (slot_key, date, time, provider_id, service_id, name, phone, notes, cancel_token, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        ON CONFLICT (slot_key) DO NOTHING
        RETURNING slot_key, date, time, provider_id, service_id, name, phone, notes, cancel_token, created_at
        "#,
    )
    .bind(&new_booking.slot_key)
    .bind(new_booking.date)
    .bind(&new_booking.time)
    .bind(&new_booking.provider_id)
    .bind(&new_booking.service_id)
    .bind(&new_booking.name)
    .bind(&new_booking.phone)
    .bind(&new_booking.notes)
    .bind(new_booking.cancel_token)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_some() {
        tracing::debug!("Slot claimed: key={}", new_booking.slot_key);
    } else {
        tracing::debug!("Slot already booked: key={}", new_booking.slot_key);
    }

    Ok(booking)
}

/// Canonical `HH:MM` times already booked for a (date, provider) pair,
/// ascending. Empty when nothing is booked.
pub async fn get_taken_times(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    provider_id: &str,
) -> Result<Vec<String>> {
    let times = sqlx::query_scalar::<_, String>(
        r#"
        SELECT time FROM bookings
        WHERE date = $1 AND provider_id = $2
        ORDER BY time ASC
        "#,
    )
    .bind(date)
    .bind(provider_id)
    .fetch_all(pool)
    .await?;

    Ok(times)
}

/// Deletes every booking carrying the given cancellation token in one
/// statement and returns the deleted slot keys.
///
/// Tokens are unique by construction, so more than one match is a
/// data-integrity anomaly; all matches are still removed.
pub async fn delete_bookings_by_cancel_token(
    pool: &Pool<Postgres>,
    cancel_token: Uuid,
) -> Result<Vec<String>> {
    let deleted = sqlx::query_scalar::<_, String>(
        r#"
        DELETE FROM bookings
        WHERE cancel_token = $1
        RETURNING slot_key
        "#,
    )
    .bind(cancel_token)
    .fetch_all(pool)
    .await?;

    if deleted.len() > 1 {
        tracing::warn!(
            "Cancel token matched {} bookings, expected at most one: {:?}",
            deleted.len(),
            deleted
        );
    }

    Ok(deleted)
}

/// Fetches one booking by its canonical slot key.
pub async fn get_booking_by_slot_key(
    pool: &Pool<Postgres>,
    slot_key: &str,
) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT slot_key, date, time, provider_id, service_id, name, phone, notes, cancel_token, created_at
        FROM bookings
        WHERE slot_key = $1
        "#,
    )
    .bind(slot_key)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
