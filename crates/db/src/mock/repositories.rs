use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, NewBooking};

// Mock repository for testing handlers without a live database
mock! {
    pub BookingRepo {
        pub async fn create_booking(
            &self,
            new_booking: NewBooking,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_taken_times(
            &self,
            date: NaiveDate,
            provider_id: &'static str,
        ) -> eyre::Result<Vec<String>>;

        pub async fn delete_bookings_by_cancel_token(
            &self,
            cancel_token: Uuid,
        ) -> eyre::Result<Vec<String>>;

        pub async fn get_booking_by_slot_key(
            &self,
            slot_key: &'static str,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
