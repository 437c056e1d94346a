use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", get(handlers::booking::list_taken))
        .route("/api/book", post(handlers::booking::create_booking))
        .route("/api/cancel", post(handlers::booking::cancel_booking))
}
