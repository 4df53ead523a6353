use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Row letters run `A..=Z`, so a layout can have at most this many rows.
pub const MAX_ROWS: u32 = 26;

/// Widest row a layout may describe, summed across its sections.
pub const MAX_ROW_WIDTH: u32 = 1_000;

/// Shape of an auditorium: section widths left to right, how many front
/// rows are premium, and the total row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub sections: Vec<u32>,
    pub premium_rows: u32,
    pub total_rows: u32,
}

impl Layout {
    pub fn new(sections: Vec<u32>, premium_rows: u32, total_rows: u32) -> Self {
        Self { sections, premium_rows, total_rows }
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        if self.sections.is_empty() {
            return Err(BookingError::InvalidLayout("no sections".to_string()));
        }
        if let Some(idx) = self.sections.iter().position(|w| *w == 0) {
            return Err(BookingError::InvalidLayout(format!("section {} has zero width", idx)));
        }
        let width: u64 = self.sections.iter().map(|w| u64::from(*w)).sum();
        if width > u64::from(MAX_ROW_WIDTH) {
            return Err(BookingError::InvalidLayout(format!(
                "row width {} exceeds {}",
                width, MAX_ROW_WIDTH
            )));
        }
        if self.total_rows == 0 {
            return Err(BookingError::InvalidLayout("total_rows must be > 0".to_string()));
        }
        if self.total_rows > MAX_ROWS {
            return Err(BookingError::InvalidLayout(format!(
                "total_rows {} exceeds {} row letters",
                self.total_rows, MAX_ROWS
            )));
        }
        if self.premium_rows > self.total_rows {
            return Err(BookingError::InvalidLayout(format!(
                "premium_rows {} exceeds total_rows {}",
                self.premium_rows, self.total_rows
            )));
        }
        Ok(())
    }

    /// Seats per row across all sections.
    pub fn row_width(&self) -> u32 {
        self.sections.iter().fold(0u32, |acc, w| acc.saturating_add(*w))
    }
}

impl Default for Layout {
    /// Two sections of ten split by a single aisle; used whenever a layout
    /// is missing or invalid.
    fn default() -> Self {
        AuditoriumLayoutId::Standard.builtin_layout()
    }
}

/// The auditorium shapes the venue operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditoriumLayoutId {
    Standard,
    Wide,
    Studio,
}

impl AuditoriumLayoutId {
    pub const ALL: [AuditoriumLayoutId; 3] = [
        AuditoriumLayoutId::Standard,
        AuditoriumLayoutId::Wide,
        AuditoriumLayoutId::Studio,
    ];

    pub fn from_auditorium_id(auditorium_id: u32) -> Option<Self> {
        match auditorium_id {
            1 => Some(AuditoriumLayoutId::Standard),
            2 => Some(AuditoriumLayoutId::Wide),
            3 => Some(AuditoriumLayoutId::Studio),
            _ => None,
        }
    }

    pub fn builtin_layout(self) -> Layout {
        match self {
            AuditoriumLayoutId::Standard => Layout::new(vec![10, 10], 2, 8),
            AuditoriumLayoutId::Wide => Layout::new(vec![8, 12, 8], 1, 10),
            AuditoriumLayoutId::Studio => Layout::new(vec![20], 1, 9),
        }
    }
}
