//! Tiered pricing: each seat costs its category's unit price.

use crate::errors::BookingError;
use crate::models::pricing::{Money, PriceBreakdown, PricingTable, SeatPrice};
use crate::models::seat::{Seat, SeatCategory};
use crate::services::seat_map::SeatMap;

pub fn unit_price(category: SeatCategory, table: &PricingTable) -> Money {
    match category {
        SeatCategory::Premium => table.premium_price,
        SeatCategory::Normal => table.normal_price,
    }
}

/// Prices `seats` in the order given. The total is the exact sum of the
/// per-seat prices; rounding is left to whoever renders it.
pub fn price(seats: &[&Seat], table: &PricingTable) -> PriceBreakdown {
    let per_seat: Vec<SeatPrice> = seats
        .iter()
        .map(|seat| SeatPrice {
            seat_id: seat.id.clone(),
            category: seat.category,
            price: unit_price(seat.category, table),
        })
        .collect();
    let total = per_seat.iter().map(|p| p.price).sum();
    PriceBreakdown { per_seat, total }
}

pub fn price_seat_ids(
    map: &SeatMap,
    ids: &[String],
    table: &PricingTable,
) -> Result<PriceBreakdown, BookingError> {
    let seats = ids
        .iter()
        .map(|id| map.seat(id).ok_or_else(|| BookingError::UnknownSeat(id.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(price(&seats, table))
}
