//! Seat inventory store.
//!
//! The store is an external document database with no serializable-transaction
//! guarantee; everything above it only sees this trait, so a transactional
//! backend can be swapped in without touching the allocator or the selection
//! controller.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Booking;

/// Raw seat document as persisted: id plus the booked flag. Price and
/// category are derived on load, not stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SeatRecord {
    pub id: String,
    pub booked: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SeatStore: Send + Sync {
    /// Snapshot of every seat record in the coach.
    async fn fetch_all(&self) -> Result<Vec<SeatRecord>, StoreError>;

    /// Of the given ids, returns those currently booked.
    async fn booked_among(&self, ids: &[String]) -> Result<Vec<String>, StoreError>;

    /// Marks a single seat booked. Idempotent: already-booked seats are left
    /// as-is.
    async fn mark_booked(&self, id: &str) -> Result<(), StoreError>;

    /// Appends one confirmed booking record.
    async fn append_booking(&self, booking: &Booking) -> Result<(), StoreError>;
}
