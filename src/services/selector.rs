//! Contiguous seat selection.
//!
//! A click on a free seat grows a block of free seats in the same section
//! of the same row: rightward first, then leftward, until the block holds
//! the party size. The right-before-left order decides which block wins
//! when the anchor has room on both sides.

use std::collections::{HashSet, VecDeque};
use tracing::debug;

use crate::errors::BookingError;
use crate::models::seat::{Seat, SeatId};
use crate::models::selection::PartySize;
use crate::services::seat_map::{Direction, SeatMap};

/// Grows a block around `anchor_id` in `row`. Seats come back in
/// left-to-right order.
pub fn select_block<'a>(
    map: &'a SeatMap,
    row: u32,
    anchor_id: &str,
    party_size: PartySize,
) -> Result<Vec<&'a Seat>, BookingError> {
    let anchor = map
        .seat(anchor_id)
        .filter(|seat| seat.row == row)
        .ok_or_else(|| BookingError::UnknownSeat(anchor_id.to_string()))?;
    if anchor.occupied {
        return Err(BookingError::AnchorOccupied(anchor_id.to_string()));
    }

    let wanted = party_size.get() as usize;
    let mut block = VecDeque::with_capacity(wanted);
    block.push_back(anchor);

    let mut current = anchor;
    while block.len() < wanted {
        match map.neighbor(current, Direction::Right) {
            Some(next) if next.is_free() => {
                block.push_back(next);
                current = next;
            }
            _ => break,
        }
    }

    current = anchor;
    while block.len() < wanted {
        match map.neighbor(current, Direction::Left) {
            Some(prev) if prev.is_free() => {
                block.push_front(prev);
                current = prev;
            }
            _ => break,
        }
    }

    if block.len() == wanted {
        debug!("Selected {} seats around {}", wanted, anchor_id);
        return Ok(block.into_iter().collect());
    }
    if wanted == 1 {
        return Ok(vec![anchor]);
    }
    Err(BookingError::NoBlockFound {
        requested: party_size.get(),
        found: block.len() as u32,
    })
}

pub fn select(
    map: &SeatMap,
    row: u32,
    anchor_id: &str,
    party_size: PartySize,
) -> Result<Vec<SeatId>, BookingError> {
    Ok(select_block(map, row, anchor_id, party_size)?
        .into_iter()
        .map(|seat| seat.id.clone())
        .collect())
}

/// Checks that `ids` are distinct free seats forming one contiguous block
/// in a single section, and returns them left to right.
pub fn verify_block<'a>(map: &'a SeatMap, ids: &[String]) -> Result<Vec<&'a Seat>, BookingError> {
    let party_size = PartySize::new(ids.len() as u32)?;

    let mut seen = HashSet::with_capacity(ids.len());
    let mut seats = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(BookingError::InvalidSelection(format!("seat {} listed twice", id)));
        }
        let seat = map
            .seat(id)
            .ok_or_else(|| BookingError::UnknownSeat(id.clone()))?;
        seats.push(seat);
    }
    seats.sort_by_key(|seat| (seat.row, seat.col));

    let leftmost = seats[0];
    if seats.iter().any(|seat| seat.row != leftmost.row) {
        return Err(BookingError::InvalidSelection("seats span more than one row".to_string()));
    }

    // Growing from the leftmost seat goes right first, so a valid block
    // reproduces itself exactly.
    let grown = select_block(map, leftmost.row, leftmost.id.as_str(), party_size)
        .map_err(|e| BookingError::InvalidSelection(e.to_string()))?;
    if grown.iter().map(|s| &s.id).ne(seats.iter().map(|s| &s.id)) {
        return Err(BookingError::InvalidSelection(
            "seats are not one contiguous block".to_string(),
        ));
    }
    Ok(seats)
}
