use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted reservation.
///
/// At most one booking exists per canonical slot key; the storage layer's
/// uniqueness constraint on that key is the double-booking guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical `date#provider#HH:MM` key
    pub slot_key: String,
    pub date: NaiveDate,
    /// Canonical `HH:MM` start time
    pub time: String,
    pub provider_id: String,
    pub service_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub notes: String,
    /// Sole credential for cancellation, never a counter or timestamp
    pub cancel_token: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Client request to claim a slot. All fields arrive as raw client input;
/// required-field and format validation happens before any storage access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub provider_id: Option<String>,
    pub service_id: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub ok: bool,
    /// The canonical slot key; doubles as the booking identifier
    pub booking_id: String,
    pub cancel_token: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakenTimesResponse {
    pub ok: bool,
    /// Canonical `HH:MM` strings, ascending
    pub taken: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub cancel_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub ok: bool,
}

/// One candidate slot as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotView {
    /// Canonical `HH:MM` start time
    pub time: String,
    /// RFC 3339 instant of the slot start in the provider's timezone
    pub starts_at: String,
}

/// Day view: every candidate slot plus the subset still available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlotsResponse {
    pub ok: bool,
    /// True when the template marks the day closed; distinguishes "no
    /// slots configured" from "slots exist but all taken"
    pub closed: bool,
    pub slots: Vec<SlotView>,
    pub available: Vec<SlotView>,
}
