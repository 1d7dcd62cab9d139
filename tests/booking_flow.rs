//! Full booking cycle over the in-memory store: load, allocate, commit,
//! reload.

use std::sync::Arc;

use coach_booking::layout::CoachLayout;
use coach_booking::services::allocator::auto_select;
use coach_booking::services::booking::{BookingRequest, BookingService, CommitError};
use coach_booking::services::loader::load_seats;
use coach_booking::store::memory::MemSeatStore;

fn booking_request(seat_ids: Vec<String>, total_price: f64) -> BookingRequest {
    BookingRequest {
        seat_ids,
        total_price,
        name: "Ravi".to_string(),
        email: "ravi@example.com".to_string(),
    }
}

#[tokio::test]
async fn allocate_commit_reload_round_trip() {
    let layout = CoachLayout::default();
    let store = Arc::new(MemSeatStore::seeded(&layout));
    let service = BookingService::new(store.clone(), layout.max_seats);

    let mut seats = load_seats(store.as_ref(), &layout).await;
    let alloc = auto_select(&mut seats, 3, layout.max_seats);
    assert_eq!(alloc.seat_ids, vec!["1-1", "1-2", "1-3"]);
    assert_eq!(alloc.total_price, 390.0);

    let booking = service
        .commit(booking_request(alloc.seat_ids.clone(), alloc.total_price))
        .await
        .unwrap();
    assert_eq!(booking.seats, alloc.seat_ids);

    // Reload: booked is true for exactly the committed ids
    let reloaded = load_seats(store.as_ref(), &layout).await;
    let booked: Vec<&str> = reloaded
        .iter()
        .filter(|s| s.booked)
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(booked, vec!["1-1", "1-2", "1-3"]);
    // selection never survives a reload
    assert!(reloaded.iter().all(|s| !s.selected));
}

#[tokio::test]
async fn second_party_is_pushed_to_the_next_free_block() {
    let layout = CoachLayout::default();
    let store = Arc::new(MemSeatStore::seeded(&layout));
    let service = BookingService::new(store.clone(), layout.max_seats);

    // First party books the whole of row 1
    let mut seats = load_seats(store.as_ref(), &layout).await;
    let first = auto_select(&mut seats, 7, layout.max_seats);
    service
        .commit(booking_request(first.seat_ids, first.total_price))
        .await
        .unwrap();

    // Second party reloads and gets the head of row 2
    let mut seats = load_seats(store.as_ref(), &layout).await;
    let second = auto_select(&mut seats, 2, layout.max_seats);
    assert_eq!(second.seat_ids, vec!["2-1", "2-2"]);
    assert_eq!(second.total_price, 260.0);
}

#[tokio::test]
async fn stale_selection_is_rejected_at_commit_time() {
    let layout = CoachLayout::default();
    let store = Arc::new(MemSeatStore::seeded(&layout));

    // Both clients load the same snapshot and want seat 5-1
    let mut first_view = load_seats(store.as_ref(), &layout).await;
    let first_pick = {
        first_view.iter_mut().find(|s| s.id == "5-1").unwrap().selected = true;
        vec!["5-1".to_string()]
    };
    let second_pick = vec!["5-1".to_string(), "5-2".to_string()];

    let service = BookingService::new(store.clone(), layout.max_seats);
    service
        .commit(booking_request(first_pick, 130.0))
        .await
        .unwrap();

    let err = service
        .commit(booking_request(second_pick, 260.0))
        .await
        .unwrap_err();
    match err {
        CommitError::SeatsUnavailable(ids) => assert_eq!(ids, vec!["5-1"]),
        other => panic!("expected conflict, got {:?}", other),
    }

    // One booking on record; 5-2 stayed free for the retry
    assert_eq!(store.bookings().len(), 1);
    let reloaded = load_seats(store.as_ref(), &layout).await;
    assert!(!reloaded.iter().find(|s| s.id == "5-2").unwrap().booked);

    // Retry after reload succeeds on the surviving seat
    let retry = service
        .commit(booking_request(vec!["5-2".to_string()], 130.0))
        .await
        .unwrap();
    assert_eq!(retry.seats, vec!["5-2"]);
    assert_eq!(store.bookings().len(), 2);
}
