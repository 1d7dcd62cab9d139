use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::models::Booking;
use crate::store::{SeatRecord, SeatStore, StoreError};

/// Postgres-backed seat inventory.
#[derive(Clone)]
pub struct PgSeatStore {
    pool: Pool<Postgres>,
}

impl PgSeatStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeatStore for PgSeatStore {
    async fn fetch_all(&self) -> Result<Vec<SeatRecord>, StoreError> {
        let records = sqlx::query_as::<_, SeatRecord>(
            r#"SELECT id, booked FROM seats ORDER BY "row", col"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn booked_among(&self, ids: &[String]) -> Result<Vec<String>, StoreError> {
        let booked = sqlx::query_scalar::<_, String>(
            "SELECT id FROM seats WHERE id = ANY($1) AND booked = TRUE",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(booked)
    }

    async fn mark_booked(&self, id: &str) -> Result<(), StoreError> {
        // The booked = FALSE guard makes the write a no-op when another
        // client got there first; the commit protocol stays best-effort.
        sqlx::query("UPDATE seats SET booked = TRUE WHERE id = $1 AND booked = FALSE")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn append_booking(&self, booking: &Booking) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO bookings (seats, price, name, email, "time")
               VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(&booking.seats)
        .bind(booking.price)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.time)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
