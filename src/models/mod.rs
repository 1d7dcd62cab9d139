pub mod booking;
pub mod seat;

pub use booking::Booking;
pub use seat::{Seat, SeatCategory};
