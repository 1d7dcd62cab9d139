//! Manual seat toggling, independent of the allocator.

use thiserror::Error;

use crate::models::Seat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("seat {0} is already booked")]
    AlreadyBooked(String),
    #[error("no more than {0} seats can be selected")]
    LimitReached(usize),
    #[error("unknown seat {0}")]
    UnknownSeat(String),
}

/// Flips one seat's `selected` flag from a user pick and returns the new
/// total price over the selection. Booked seats cannot be toggled; the
/// `max` cap applies only when adding a seat, so an over-full selection can
/// always be shrunk. Pure client-side transition, no store interaction.
pub fn toggle_seat(seats: &mut [Seat], id: &str, max: usize) -> Result<f64, SelectionError> {
    let target = seats
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| SelectionError::UnknownSeat(id.to_string()))?;

    if seats[target].booked {
        return Err(SelectionError::AlreadyBooked(id.to_string()));
    }

    let selected_count = seats.iter().filter(|s| s.selected).count();
    if !seats[target].selected && selected_count >= max {
        return Err(SelectionError::LimitReached(max));
    }

    seats[target].selected = !seats[target].selected;
    Ok(seats.iter().filter(|s| s.selected).map(|s| s.price).sum())
}
