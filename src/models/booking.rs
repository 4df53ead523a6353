use serde::{Deserialize, Serialize};

use crate::models::pricing::{Money, PricingTable};

/// Payload of `GET /auditorium-details/{id}` on the booking backend.
/// Prices arrive as decimal numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditoriumDetails {
    pub premium_price: f64,
    pub normal_price: f64,
}

impl AuditoriumDetails {
    pub fn pricing_table(&self) -> Option<PricingTable> {
        Some(PricingTable::new(
            Money::from_decimal(self.premium_price)?,
            Money::from_decimal(self.normal_price)?,
        ))
    }
}

/// Body of `POST /book-tickets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub showtime_id: u32,
    pub user_id: u32,
    pub seats: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookingReply {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Success,
    Failure,
}

impl From<BookingReply> for BookingStatus {
    fn from(reply: BookingReply) -> Self {
        if reply.status == "success" {
            BookingStatus::Success
        } else {
            BookingStatus::Failure
        }
    }
}
