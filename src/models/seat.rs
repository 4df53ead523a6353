use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatCategory {
    Premium,
    Normal,
}

impl SeatCategory {
    pub fn for_row(row: u32, premium_rows: u32) -> Self {
        if row < premium_rows {
            SeatCategory::Premium
        } else {
            SeatCategory::Normal
        }
    }
}

/// Row letter plus global seat number, e.g. `C7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    pub fn new(row: u32, number: u32) -> Self {
        SeatId(format!("{}{}", row_letter(row), number))
    }

    /// Splits an id into its row index and seat number.
    pub fn parse(raw: &str) -> Result<(u32, u32), BookingError> {
        let mut chars = raw.chars();
        let letter = chars
            .next()
            .filter(|c| c.is_ascii_uppercase())
            .ok_or_else(|| BookingError::UnknownSeat(raw.to_string()))?;
        let number: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| BookingError::UnknownSeat(raw.to_string()))?;
        if number == 0 {
            return Err(BookingError::UnknownSeat(raw.to_string()));
        }
        Ok((letter as u32 - 'A' as u32, number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn row_letter(row: u32) -> char {
    char::from_u32('A' as u32 + row).unwrap_or('?')
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: SeatId,
    pub row: u32,
    /// 1-based, numbered across all sections of the row.
    pub col: u32,
    pub section: usize,
    pub category: SeatCategory,
    pub occupied: bool,
}

impl Seat {
    pub fn is_free(&self) -> bool {
        !self.occupied
    }
}
