use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub slot_key: String,
    pub date: NaiveDate,
    pub time: String,
    pub provider_id: String,
    pub service_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub cancel_token: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input to the claim operation. The slot key must already be derived from
/// the normalized time, and the cancel token freshly generated.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub slot_key: String,
    pub date: NaiveDate,
    pub time: String,
    pub provider_id: String,
    pub service_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub cancel_token: Uuid,
}
