use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::layout::CoachLayout;
use crate::services::booking::{BookingRequest, BookingService, CommitError};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/bookings", post(create_booking))
}

// POST /api/bookings
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub seats: Vec<String>,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub seats: Vec<String>,
    pub price: f64,
    pub time: String,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // The total is recomputed server-side from the layout; a stale client
    // price can never end up in the booking record.
    let mut total_price = 0.0;
    for id in &req.seats {
        let valid = CoachLayout::parse_seat_id(id)
            .filter(|&(row, col)| state.layout.seat_exists(row, col));
        match valid {
            Some((row, _)) => total_price += state.layout.price_for_row(row),
            None => {
                return Err((StatusCode::BAD_REQUEST, format!("unknown seat {}", id)));
            }
        }
    }

    let service = BookingService::new(state.store.clone(), state.layout.max_seats);
    let booking = service
        .commit(BookingRequest {
            seat_ids: req.seats,
            total_price,
            name: req.name,
            email: req.email,
        })
        .await
        .map_err(|e| match e {
            CommitError::NothingSelected
            | CommitError::TooManySeats(_)
            | CommitError::MissingContact => (StatusCode::BAD_REQUEST, e.to_string()),
            CommitError::SeatsUnavailable(_) => (StatusCode::CONFLICT, e.to_string()),
            CommitError::Store(_) | CommitError::PartialWrite(_) => {
                tracing::error!("create_booking store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Booking failed. Try again.".to_string())
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            seats: booking.seats,
            price: booking.price,
            time: booking.time,
        }),
    ))
}
