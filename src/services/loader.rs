//! Seat model loader: raw store records in, typed seats out.

use tracing::warn;

use crate::layout::CoachLayout;
use crate::models::Seat;
use crate::store::{SeatRecord, SeatStore};

/// Loads the full seat set from the store. An unreachable store yields an
/// empty set (rendered as an empty chart), not a hard error; nothing can be
/// booked until a reload succeeds.
pub async fn load_seats(store: &dyn SeatStore, layout: &CoachLayout) -> Vec<Seat> {
    let records = match store.fetch_all().await {
        Ok(records) => records,
        Err(e) => {
            warn!("seat load failed, serving empty chart: {:?}", e);
            return Vec::new();
        }
    };

    seats_from_records(records, layout)
}

/// Pure conversion half of the loader. Records with ids that do not parse as
/// `"row-col"` are skipped; they can never be selected or booked.
pub fn seats_from_records(records: Vec<SeatRecord>, layout: &CoachLayout) -> Vec<Seat> {
    records
        .into_iter()
        .filter_map(|record| {
            let Some((row, col)) = CoachLayout::parse_seat_id(&record.id) else {
                warn!("skipping seat record with malformed id {:?}", record.id);
                return None;
            };
            Some(Seat {
                id: record.id,
                row,
                col,
                booked: record.booked,
                selected: false,
                price: layout.price_for_row(row),
                category: layout.category_for_row(row),
            })
        })
        .collect()
}
