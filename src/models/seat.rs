use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    Standard,
    Exit,
}

/// One seat of the coach as held by a client session.
///
/// `booked` mirrors the store and only flips through a successful commit;
/// `selected` is session-local state and never leaves the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: i32,
    pub col: i32,
    pub booked: bool,
    pub selected: bool,
    pub price: f64,
    pub category: SeatCategory,
}
