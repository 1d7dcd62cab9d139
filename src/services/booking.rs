//! Booking committer: turns a selection into a durable booking.
//!
//! The protocol is re-validate-then-write. It is a best-effort optimistic
//! check over a store with no transaction guarantee: two commits racing for
//! the same seat can both pass validation before either writes. The losing
//! side is normally caught at validation time; the residual window is closed
//! only by a conditional-write store backend.

use std::sync::Arc;

use chrono::Utc;
use futures::future;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::models::Booking;
use crate::store::{SeatStore, StoreError};

#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Selected seat ids, in selection order.
    pub seat_ids: Vec<String>,
    pub total_price: f64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("no seats selected")]
    NothingSelected,
    #[error("no more than {0} seats per booking")]
    TooManySeats(usize),
    #[error("name and email are required")]
    MissingContact,
    #[error("seats already booked: {}", .0.join(", "))]
    SeatsUnavailable(Vec<String>),
    /// Validation round-trip failed; nothing was written.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A write failed after validation passed. Seats may be left partially
    /// booked with no booking record; only a reload shows the true state.
    #[error("booking failed, reload to see current seat status")]
    PartialWrite(#[source] StoreError),
}

impl CommitError {
    /// Rejections never touched the store; the user can fix and retry.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, CommitError::Store(_) | CommitError::PartialWrite(_))
    }
}

pub struct BookingService {
    store: Arc<dyn SeatStore>,
    max_seats: usize,
}

impl BookingService {
    pub fn new(store: Arc<dyn SeatStore>, max_seats: usize) -> Self {
        Self { store, max_seats }
    }

    /// Runs one booking attempt to completion. Once the seat updates start
    /// there is no cancellation: the attempt ends Committed or Failed.
    pub async fn commit(&self, req: BookingRequest) -> Result<Booking, CommitError> {
        // Preconditions, checked before any store round-trip
        if req.seat_ids.is_empty() {
            return Err(CommitError::NothingSelected);
        }
        if req.seat_ids.len() > self.max_seats {
            return Err(CommitError::TooManySeats(self.max_seats));
        }
        if req.name.trim().is_empty() || req.email.trim().is_empty() {
            return Err(CommitError::MissingContact);
        }

        // Validating: someone may have booked our seats since the last load
        debug!(seats = ?req.seat_ids, "booking attempt: validating");
        let conflicts = self.store.booked_among(&req.seat_ids).await?;
        if !conflicts.is_empty() {
            warn!(?conflicts, "booking rejected, seats taken since load");
            return Err(CommitError::SeatsUnavailable(conflicts));
        }

        // Committing: fan out the seat updates, await them together
        debug!(seats = ?req.seat_ids, "booking attempt: committing");
        let updates = req.seat_ids.iter().map(|id| self.store.mark_booked(id));
        for result in future::join_all(updates).await {
            if let Err(e) = result {
                error!("seat update failed mid-commit: {:?}", e);
                return Err(CommitError::PartialWrite(e));
            }
        }

        // Record the booking only after every seat update was accepted
        let booking = Booking {
            seats: req.seat_ids,
            price: req.total_price,
            name: req.name,
            email: req.email,
            time: Utc::now().to_rfc3339(),
        };
        if let Err(e) = self.store.append_booking(&booking).await {
            error!("booking append failed after seat updates: {:?}", e);
            return Err(CommitError::PartialWrite(e));
        }

        info!(seats = ?booking.seats, price = booking.price, "booking committed");
        Ok(booking)
    }
}
