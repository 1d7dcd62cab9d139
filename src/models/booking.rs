use serde::{Deserialize, Serialize};

/// A confirmed booking. Append-only: written once per successful commit,
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub seats: Vec<String>,
    pub price: f64,
    pub name: String,
    pub email: String,
    /// ISO-8601 commit timestamp.
    pub time: String,
}
