//! Fixed coach geometry and pricing.
//!
//! The coach is a single grid: 13 rows of 7 seats, except the last row which
//! only has seats 1-3. Row 4 sits at the emergency exit and carries a premium
//! price. Seat ids are `"row-col"` strings, unique across the coach.

use crate::models::SeatCategory;

#[derive(Debug, Clone)]
pub struct CoachLayout {
    pub rows: i32,
    pub cols: i32,
    pub last_row_cols: i32,
    pub exit_row: i32,
    pub exit_price: f64,
    pub standard_price: f64,
    /// Upper bound on seats per booking, manual or auto-assigned.
    pub max_seats: usize,
}

impl Default for CoachLayout {
    fn default() -> Self {
        Self {
            rows: 13,
            cols: 7,
            last_row_cols: 3,
            exit_row: 4,
            exit_price: 380.0,
            standard_price: 130.0,
            max_seats: 7,
        }
    }
}

impl CoachLayout {
    pub fn cols_in_row(&self, row: i32) -> i32 {
        if row == self.rows {
            self.last_row_cols
        } else {
            self.cols
        }
    }

    pub fn seat_exists(&self, row: i32, col: i32) -> bool {
        row >= 1 && row <= self.rows && col >= 1 && col <= self.cols_in_row(row)
    }

    pub fn price_for_row(&self, row: i32) -> f64 {
        if row == self.exit_row {
            self.exit_price
        } else {
            self.standard_price
        }
    }

    pub fn category_for_row(&self, row: i32) -> SeatCategory {
        if row == self.exit_row {
            SeatCategory::Exit
        } else {
            SeatCategory::Standard
        }
    }

    pub fn seat_id(row: i32, col: i32) -> String {
        format!("{}-{}", row, col)
    }

    /// Parses a `"row-col"` id. Returns `None` for anything that is not two
    /// dash-separated integers.
    pub fn parse_seat_id(id: &str) -> Option<(i32, i32)> {
        let (row, col) = id.split_once('-')?;
        Some((row.parse().ok()?, col.parse().ok()?))
    }

    /// All valid `(row, col)` positions in row-major order.
    pub fn all_positions(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for row in 1..=self.rows {
            for col in 1..=self.cols_in_row(row) {
                out.push((row, col));
            }
        }
        out
    }
}
