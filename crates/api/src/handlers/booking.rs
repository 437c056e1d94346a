//! # Booking Handlers
//!
//! The booking coordinator: taken-slot queries, the atomic claim, and
//! token-based cancellation.
//!
//! Validation always runs before any storage access, so a rejected request
//! has no side effects. The claim itself is a single conditional insert in
//! the repository; for a fixed (date, provider, time) at most one claim
//! ever succeeds, no matter how many run concurrently.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::{BookingError, BookingResult},
    keys::{normalize_time, parse_date, slot_key},
    models::booking::{
        CancelBookingRequest, CancelBookingResponse, CreateBookingRequest, CreateBookingResponse,
        TakenTimesResponse,
    },
};
use slotbook_db::models::NewBooking;
use slotbook_notify::BookingNotice;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the taken-slots endpoint
#[derive(Debug, Deserialize)]
pub struct TakenQuery {
    /// Civil date in `YYYY-MM-DD` form (required)
    pub date: Option<String>,

    /// Provider to query; defaults to the configured provider
    pub provider_id: Option<String>,
}

/// A claim request after validation: every field present, date parsed,
/// time in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimInput {
    pub date: NaiveDate,
    pub time: String,
    pub provider_id: String,
    pub service_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub notes: String,
}

/// Validates a raw claim request.
///
/// Required: date, time, name, phone. The provider defaults to the
/// configured one when absent. The time is normalized to canonical `HH:MM`
/// here, before key derivation, so equivalently spelled times always map
/// to the same slot key.
///
/// Deliberately NOT validated: whether the time falls inside the day's
/// template window. The schedule engine is the only source of offered
/// slots; the data layer accepts any well-formed time so that template
/// edits never orphan existing bookings.
pub fn validate_claim(
    request: &CreateBookingRequest,
    default_provider: &str,
) -> BookingResult<ClaimInput> {
    let date_raw = require_field(request.date.as_deref(), "date")?;
    let time_raw = require_field(request.time.as_deref(), "time")?;
    let name = require_field(request.name.as_deref(), "name")?;
    let phone = require_field(request.phone.as_deref(), "phone")?;

    let provider_id = match request.provider_id.as_deref() {
        Some(provider) if !provider.trim().is_empty() => provider.trim().to_string(),
        _ => default_provider.to_string(),
    };

    Ok(ClaimInput {
        date: parse_date(date_raw)?,
        time: normalize_time(time_raw)?,
        provider_id,
        service_id: request
            .service_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        name: name.trim().to_string(),
        phone: phone.trim().to_string(),
        notes: request.notes.clone().unwrap_or_default(),
    })
}

fn require_field<'a>(value: Option<&'a str>, field: &str) -> BookingResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(BookingError::Validation(format!("Missing field: {field}"))),
    }
}

/// Parses the taken-slots query, rejecting a missing or malformed date.
pub fn parse_taken_query(
    query: &TakenQuery,
    default_provider: &str,
) -> BookingResult<(NaiveDate, String)> {
    let date_raw = require_field(query.date.as_deref(), "date")?;
    let provider_id = match query.provider_id.as_deref() {
        Some(provider) if !provider.trim().is_empty() => provider.trim().to_string(),
        _ => default_provider.to_string(),
    };
    Ok((parse_date(date_raw)?, provider_id))
}

/// Parses a cancellation request into the token it carries.
pub fn parse_cancel_request(request: &CancelBookingRequest) -> BookingResult<Uuid> {
    let raw = require_field(request.cancel_token.as_deref(), "cancel_token")?;
    Uuid::parse_str(raw.trim())
        .map_err(|_| BookingError::Validation("Invalid cancel_token".to_string()))
}

/// Lists the canonical times already booked for a (date, provider) pair.
///
/// Clients compute availability as candidate slots minus this set. An
/// empty list is a normal outcome, not an error.
#[axum::debug_handler]
pub async fn list_taken(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<TakenQuery>,
) -> Result<Json<TakenTimesResponse>, AppError> {
    let (date, provider_id) = parse_taken_query(&query, &state.schedule.provider_id)?;

    let taken =
        slotbook_db::repositories::booking::get_taken_times(&state.db_pool, date, &provider_id)
            .await
            .map_err(BookingError::Storage)?;

    Ok(Json(TakenTimesResponse { ok: true, taken }))
}

/// Claims a slot: the atomic create-if-absent that turns a slot selection
/// into a persisted booking.
///
/// Exactly one of several concurrent claims for the same slot wins; the
/// rest receive 409 Conflict and should re-pick from current availability.
/// On success a booking notice is dispatched fire-and-forget; relay
/// failure never affects the committed booking or this response.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let input = validate_claim(&payload, &state.schedule.provider_id)?;
    let key = slot_key(input.date, &input.provider_id, &input.time);

    let new_booking = NewBooking {
        slot_key: key.clone(),
        date: input.date,
        time: input.time,
        provider_id: input.provider_id,
        service_id: input.service_id,
        name: input.name,
        phone: input.phone,
        notes: input.notes,
        // Fresh unguessable credential; uuid v4 carries 122 random bits
        cancel_token: Uuid::new_v4(),
    };

    let created =
        slotbook_db::repositories::booking::create_booking(&state.db_pool, new_booking)
            .await
            .map_err(BookingError::Storage)?;

    let Some(booking) = created else {
        return Err(AppError(BookingError::Conflict(key)));
    };

    if let Some(notifier) = &state.notifier {
        notifier.spawn_booking_notice(BookingNotice {
            date: booking.date,
            time: booking.time.clone(),
            provider_id: booking.provider_id.clone(),
            service_id: booking.service_id.clone(),
            name: booking.name.clone(),
            phone: booking.phone.clone(),
            notes: booking.notes.clone(),
        });
    }

    Ok(Json(CreateBookingResponse {
        ok: true,
        booking_id: booking.slot_key,
        cancel_token: booking.cancel_token,
    }))
}

/// Cancels a booking by its cancellation token.
///
/// The token is the sole credential; the client never needs the slot key.
/// All rows matching the token are deleted in one statement, and a second
/// cancellation with the same token reports NotFound rather than a second
/// success.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CancelBookingRequest>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let token = parse_cancel_request(&payload)?;

    let deleted = slotbook_db::repositories::booking::delete_bookings_by_cancel_token(
        &state.db_pool,
        token,
    )
    .await
    .map_err(BookingError::Storage)?;

    if deleted.is_empty() {
        return Err(AppError(BookingError::NotFound(
            "No booking matches this cancellation token".to_string(),
        )));
    }

    Ok(Json(CancelBookingResponse { ok: true }))
}
