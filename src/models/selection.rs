use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::BookingError;
use crate::models::seat::SeatId;
use crate::services::seat_map::SeatMap;
use crate::services::selector;

/// The guest picker offers one to eight guests.
pub const MAX_PARTY_SIZE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PartySize(u32);

impl PartySize {
    pub fn new(size: u32) -> Result<Self, BookingError> {
        if (1..=MAX_PARTY_SIZE).contains(&size) {
            Ok(PartySize(size))
        } else {
            Err(BookingError::InvalidPartySize { got: size, max: MAX_PARTY_SIZE })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PartySize {
    fn default() -> Self {
        PartySize(1)
    }
}

impl TryFrom<u32> for PartySize {
    type Error = BookingError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        PartySize::new(size)
    }
}

impl From<PartySize> for u32 {
    fn from(size: PartySize) -> u32 {
        size.0
    }
}

/// Seat-picking state for one visitor on one showtime.
///
/// The seat list is only ever replaced wholesale: a successful click swaps
/// in the new block, a failed block search empties it, and a click on an
/// occupied or unknown seat leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSession {
    pub id: Uuid,
    pub showtime_id: u32,
    pub auditorium_id: u32,
    party_size: PartySize,
    seats: Vec<SeatId>,
}

impl SelectionSession {
    pub fn new(showtime_id: u32, auditorium_id: u32, party_size: PartySize) -> Self {
        Self {
            id: Uuid::new_v4(),
            showtime_id,
            auditorium_id,
            party_size,
            seats: Vec::new(),
        }
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn seats(&self) -> &[SeatId] {
        &self.seats
    }

    pub fn set_party_size(&mut self, party_size: PartySize) {
        self.party_size = party_size;
        self.seats.clear();
    }

    /// Handles a click on `anchor_id`.
    pub fn click(&mut self, map: &SeatMap, anchor_id: &str) -> Result<&[SeatId], BookingError> {
        let (row, _) = SeatId::parse(anchor_id)?;
        match selector::select(map, row, anchor_id, self.party_size) {
            Ok(block) => {
                self.seats = block;
                Ok(self.seats.as_slice())
            }
            Err(e @ BookingError::NoBlockFound { .. }) => {
                info!("Session {}: {}", self.id, e);
                self.seats.clear();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// True once the session holds a full block for the party.
    pub fn is_complete(&self) -> bool {
        self.seats.len() == self.party_size.get() as usize
    }

    /// Seeds the session with a selection made earlier. The seats must
    /// still form a free contiguous block on `map`; otherwise the session
    /// stays empty and the error is returned.
    pub fn restore(&mut self, map: &SeatMap, ids: &[String]) -> Result<&[SeatId], BookingError> {
        self.seats.clear();
        let block = selector::verify_block(map, ids)?;
        self.seats = block.into_iter().map(|seat| seat.id.clone()).collect();
        Ok(self.seats.as_slice())
    }
}
