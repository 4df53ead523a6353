//! Seat-map construction.
//!
//! A [`SeatMap`] is derived from a [`Layout`] and the set of occupied seat
//! ids for one showtime. It is never patched in place: when occupancy or
//! the auditorium changes, build a new one.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::models::layout::Layout;
use crate::models::seat::{row_letter, Seat, SeatCategory, SeatId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatRow {
    pub letter: char,
    pub index: u32,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    layout: Layout,
    rows: Vec<SeatRow>,
    /// Seat numbers after which an aisle runs, e.g. `[10]` for `[10, 10]`.
    aisles_after: Vec<u32>,
    #[serde(skip)]
    index: HashMap<String, (usize, usize)>,
}

impl SeatMap {
    /// Builds the grid for `layout`, marking every id in `occupied` as taken.
    ///
    /// An invalid layout is not an error: it is logged and the default
    /// layout is used instead.
    pub fn build(layout: &Layout, occupied: &HashSet<String>) -> SeatMap {
        let layout = match layout.validate() {
            Ok(()) => layout.clone(),
            Err(e) => {
                warn!("{}; falling back to the default layout", e);
                Layout::default()
            }
        };

        // Section boundaries are the same in every row.
        let mut section_of_col = Vec::with_capacity(layout.row_width() as usize);
        let mut aisles_after = Vec::with_capacity(layout.sections.len().saturating_sub(1));
        let mut seats_so_far = 0;
        for (section, width) in layout.sections.iter().enumerate() {
            section_of_col.extend(std::iter::repeat(section).take(*width as usize));
            seats_so_far += width;
            if section + 1 < layout.sections.len() {
                aisles_after.push(seats_so_far);
            }
        }

        let mut rows = Vec::with_capacity(layout.total_rows as usize);
        let mut index = HashMap::with_capacity(layout.total_rows as usize * section_of_col.len());
        for r in 0..layout.total_rows {
            let category = SeatCategory::for_row(r, layout.premium_rows);
            let seats: Vec<Seat> = section_of_col
                .iter()
                .enumerate()
                .map(|(pos, section)| {
                    let col = pos as u32 + 1;
                    let id = SeatId::new(r, col);
                    let occupied = occupied.contains(id.as_str());
                    Seat { id, row: r, col, section: *section, category, occupied }
                })
                .collect();
            for (pos, seat) in seats.iter().enumerate() {
                index.insert(seat.id.as_str().to_string(), (r as usize, pos));
            }
            rows.push(SeatRow { letter: row_letter(r), index: r, seats });
        }

        debug!(
            "Built seat map: {} rows x {} seats, {} occupied",
            layout.total_rows,
            section_of_col.len(),
            occupied.len()
        );

        SeatMap { layout, rows, aisles_after, index }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn aisles_after(&self) -> &[u32] {
        &self.aisles_after
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        let (r, pos) = self.index.get(id)?;
        self.rows.get(*r)?.seats.get(*pos)
    }

    pub fn seat_at(&self, row: u32, col: u32) -> Option<&Seat> {
        let pos = col.checked_sub(1)? as usize;
        self.rows.get(row as usize)?.seats.get(pos)
    }

    /// The physically adjacent seat in `direction`, or `None` at a row end
    /// or across an aisle.
    pub fn neighbor(&self, seat: &Seat, direction: Direction) -> Option<&Seat> {
        let col = match direction {
            Direction::Right => seat.col.checked_add(1)?,
            Direction::Left => seat.col.checked_sub(1)?,
        };
        self.seat_at(seat.row, col)
            .filter(|candidate| candidate.section == seat.section)
    }

    pub fn seat_count(&self) -> usize {
        self.index.len()
    }

    pub fn free_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.seats.iter())
            .filter(|seat| seat.is_free())
            .count()
    }
}
