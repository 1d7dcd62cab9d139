//! Automatic seat assignment.
//!
//! The coach is treated as one continuous row-major strip: a run of free
//! seats may wrap from the end of one row onto the first seat of the next,
//! which keeps travelling parties together across a row boundary. When no
//! single free block is large enough, the remainder is filled with the free
//! seats closest (Manhattan distance) to the end of the block.

use std::collections::HashSet;

use crate::models::Seat;

/// Outcome of one auto-selection pass: the chosen seat ids in pick order and
/// their summed price.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub seat_ids: Vec<String>,
    pub total_price: f64,
}

/// Selects `min(requested, unbooked)` seats, preferring a single contiguous
/// block. `requested` is clamped to `[1, max]`. Mutates the `selected` flag
/// of every seat: exactly the chosen seats end up selected.
///
/// Always recomputed from scratch against the seat set it is handed; there is
/// no incremental state.
pub fn auto_select(seats: &mut [Seat], requested: usize, max: usize) -> Allocation {
    let n = requested.clamp(1, max);

    // Row-major order over the unbooked seats
    let mut avail: Vec<usize> = (0..seats.len()).filter(|&i| !seats[i].booked).collect();
    avail.sort_by_key(|&i| (seats[i].row, seats[i].col));

    // Longest run of adjacent seats; ties go to the earliest run in scan
    // order. Adjacency: next seat in the same row, or first seat of the
    // next row.
    let mut best: Vec<usize> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    for &i in &avail {
        let continues = match cur.last() {
            None => true,
            Some(&p) => {
                (seats[i].row == seats[p].row && seats[i].col == seats[p].col + 1)
                    || (seats[i].row == seats[p].row + 1 && seats[i].col == 1)
            }
        };
        if continues {
            cur.push(i);
        } else {
            if cur.len() > best.len() {
                best = cur.clone();
            }
            cur = vec![i];
        }
    }
    if cur.len() > best.len() {
        best = cur;
    }

    // Prefer the prefix of the block over the whole block
    let mut picked: Vec<usize> = best.into_iter().take(n).collect();

    // Not enough contiguous seats: fill up with the free seats nearest to
    // the end of the block. The sort is stable, so equal distances keep
    // row-major scan order.
    if picked.len() < n {
        if let Some(&anchor) = picked.last() {
            let (anchor_row, anchor_col) = (seats[anchor].row, seats[anchor].col);
            let taken: HashSet<usize> = picked.iter().copied().collect();
            let mut rest: Vec<usize> = avail.iter().copied().filter(|i| !taken.contains(i)).collect();
            rest.sort_by_key(|&i| {
                (seats[i].row - anchor_row).abs() + (seats[i].col - anchor_col).abs()
            });
            picked.extend(rest.into_iter().take(n - picked.len()));
        }
    }

    let chosen: HashSet<usize> = picked.iter().copied().collect();
    for (i, seat) in seats.iter_mut().enumerate() {
        seat.selected = chosen.contains(&i);
    }

    Allocation {
        seat_ids: picked.iter().map(|&i| seats[i].id.clone()).collect(),
        total_price: picked.iter().map(|&i| seats[i].price).sum(),
    }
}
