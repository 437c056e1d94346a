//! # Slot Handlers
//!
//! Read-only views derived from the schedule engine: the candidate slots
//! for a day, which of them remain available, and the service catalogue.
//! Nothing here ever writes to storage.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

use slotbook_core::{
    errors::BookingError,
    keys::parse_date,
    models::booking::{DaySlotsResponse, SlotView},
    models::schedule::ScheduleConfig,
    models::service::{default_services, Service},
    schedule::{generate_slots, slot_start_in_zone},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the day-slots endpoint
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Civil date in `YYYY-MM-DD` form (required)
    pub date: Option<String>,
}

/// Builds the day view for a date given the times already taken.
///
/// `closed` reflects the template, not the booking state: a day with every
/// slot taken is open-but-full, which clients surface differently from a
/// day that is closed outright.
pub fn build_day_slots(
    schedule: &ScheduleConfig,
    date: NaiveDate,
    taken: &[String],
) -> DaySlotsResponse {
    let closed = schedule.week.window_for(date.weekday()).is_none();

    let slots: Vec<SlotView> = generate_slots(date, schedule)
        .iter()
        .filter_map(|slot| {
            let starts_at = slot_start_in_zone(slot, schedule.timezone)?;
            Some(SlotView {
                time: slot.hhmm(),
                starts_at: starts_at.to_rfc3339(),
            })
        })
        .collect();

    let available = slots
        .iter()
        .filter(|view| !taken.contains(&view.time))
        .cloned()
        .collect();

    DaySlotsResponse {
        ok: true,
        closed,
        slots,
        available,
    }
}

/// Returns every candidate slot for a date plus current availability.
#[axum::debug_handler]
pub async fn day_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DaySlotsResponse>, AppError> {
    let date_raw = query
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| BookingError::Validation("Missing field: date".to_string()))?;
    let date = parse_date(date_raw)?;

    let taken = slotbook_db::repositories::booking::get_taken_times(
        &state.db_pool,
        date,
        &state.schedule.provider_id,
    )
    .await
    .map_err(BookingError::Storage)?;

    Ok(Json(build_day_slots(&state.schedule, date, &taken)))
}

/// Returns the service catalogue.
#[axum::debug_handler]
pub async fn list_services(State(_state): State<Arc<ApiState>>) -> Json<Vec<Service>> {
    Json(default_services())
}
