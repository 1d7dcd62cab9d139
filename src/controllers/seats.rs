use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::{Seat, SeatCategory};
use crate::services::{allocator, loader, selection};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/allocate", post(allocate_seats))
        .route("/seats/toggle", patch(toggle_seat))
}

#[derive(Debug, Serialize)]
pub struct SeatResponse {
    pub id: String,
    pub row: i32,
    pub col: i32,
    pub booked: bool,
    pub price: f64,
    pub category: SeatCategory,
}

impl From<Seat> for SeatResponse {
    fn from(s: Seat) -> Self {
        SeatResponse {
            id: s.id,
            row: s.row,
            col: s.col,
            booked: s.booked,
            price: s.price,
            category: s.category,
        }
    }
}

// GET /api/seats
//
// Chart snapshot. An unreachable store shows up as an empty chart, the same
// way the store failure is surfaced everywhere else.
async fn get_seats(State(state): State<Arc<AppState>>) -> Json<Vec<SeatResponse>> {
    let seats = loader::load_seats(state.store.as_ref(), &state.layout).await;
    Json(seats.into_iter().map(SeatResponse::from).collect())
}

// POST /api/seats/allocate
#[derive(Debug, Deserialize)]
pub struct AllocateRequest {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct AllocateResponse {
    pub seats: Vec<String>,
    pub total_price: f64,
}

// Runs the allocator against a fresh load; recomputed from scratch on every
// count change, never incremental.
async fn allocate_seats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AllocateRequest>,
) -> Json<AllocateResponse> {
    let mut seats = loader::load_seats(state.store.as_ref(), &state.layout).await;
    let alloc = allocator::auto_select(&mut seats, req.count, state.layout.max_seats);
    Json(AllocateResponse {
        seats: alloc.seat_ids,
        total_price: alloc.total_price,
    })
}

// PATCH /api/seats/toggle
//
// The selection is client-owned state, so it rides in on the request and the
// updated selection rides back out; nothing selection-related is persisted.
#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub seat_id: String,
    #[serde(default)]
    pub selected: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub selected: Vec<String>,
    pub total_price: f64,
}

async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, (StatusCode, String)> {
    let mut seats = loader::load_seats(state.store.as_ref(), &state.layout).await;

    // Replay the client's selection onto the fresh load. A seat booked since
    // the client last loaded silently drops out of the selection.
    let selected: HashSet<&String> = req.selected.iter().collect();
    for seat in seats.iter_mut() {
        seat.selected = !seat.booked && selected.contains(&seat.id);
    }

    let total_price = selection::toggle_seat(&mut seats, &req.seat_id, state.layout.max_seats)
        .map_err(|e| match e {
            selection::SelectionError::AlreadyBooked(_) => (StatusCode::CONFLICT, e.to_string()),
            selection::SelectionError::LimitReached(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            selection::SelectionError::UnknownSeat(_) => (StatusCode::NOT_FOUND, e.to_string()),
        })?;

    Ok(Json(ToggleResponse {
        selected: seats
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.id.clone())
            .collect(),
        total_price,
    }))
}
