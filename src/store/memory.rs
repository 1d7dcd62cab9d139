//! In-memory seat inventory, used by tests and as the reference backend for
//! anything swapping out Postgres.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::layout::CoachLayout;
use crate::models::Booking;
use crate::store::{SeatRecord, SeatStore, StoreError};

#[derive(Default)]
struct Inner {
    seats: BTreeMap<String, bool>,
    bookings: Vec<Booking>,
}

#[derive(Default)]
pub struct MemSeatStore {
    inner: RwLock<Inner>,
    // Failure injection switches for the error-taxonomy tests
    unavailable: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemSeatStore {
    /// Fresh store with every seat of the layout free.
    pub fn seeded(layout: &CoachLayout) -> Self {
        let store = Self::default();
        {
            let mut inner = store.inner.write().unwrap();
            for (row, col) in layout.all_positions() {
                inner.seats.insert(CoachLayout::seat_id(row, col), false);
            }
        }
        store
    }

    /// Inserts a raw record, malformed ids included.
    pub fn insert_record(&self, id: &str, booked: bool) {
        self.inner.write().unwrap().seats.insert(id.to_string(), booked);
    }

    /// Pre-books seats without going through the commit protocol.
    pub fn book_directly(&self, ids: &[&str]) {
        let mut inner = self.inner.write().unwrap();
        for id in ids {
            inner.seats.insert(id.to_string(), true);
        }
    }

    /// When set, `fetch_all` fails as if the store were unreachable.
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::SeqCst);
    }

    /// When set, seat updates and booking appends fail after validation has
    /// already passed, reproducing the partial-write failure mode.
    pub fn set_fail_writes(&self, value: bool) {
        self.fail_writes.store(value, Ordering::SeqCst);
    }

    pub fn booked_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .unwrap()
            .seats
            .iter()
            .filter(|(_, &booked)| booked)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.inner.read().unwrap().bookings.clone()
    }
}

#[async_trait]
impl SeatStore for MemSeatStore {
    async fn fetch_all(&self) -> Result<Vec<SeatRecord>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected outage".to_string()));
        }
        let inner = self.inner.read().unwrap();
        Ok(inner
            .seats
            .iter()
            .map(|(id, &booked)| SeatRecord {
                id: id.clone(),
                booked,
            })
            .collect())
    }

    async fn booked_among(&self, ids: &[String]) -> Result<Vec<String>, StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected outage".to_string()));
        }
        let inner = self.inner.read().unwrap();
        Ok(ids
            .iter()
            .filter(|id| inner.seats.get(*id).copied().unwrap_or(false))
            .cloned()
            .collect())
    }

    async fn mark_booked(&self, id: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected write failure".to_string()));
        }
        let mut inner = self.inner.write().unwrap();
        inner.seats.insert(id.to_string(), true);
        Ok(())
    }

    async fn append_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected write failure".to_string()));
        }
        self.inner.write().unwrap().bookings.push(booking.clone());
        Ok(())
    }
}
