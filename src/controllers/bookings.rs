use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

use crate::errors::BookingError;
use crate::models::booking::{BookingStatus, BookingSubmission};
use crate::models::pricing::PriceBreakdown;
use crate::models::seat::SeatCategory;
use crate::services::pricing::{price, price_seat_ids};
use crate::services::seat_map::SeatMap;
use crate::services::selector::verify_block;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings/price", post(price_selection))
        .route("/bookings", post(create_booking))
}

/* ---------- helpers ---------- */

#[derive(Debug, Serialize)]
struct SeatPriceResponse {
    seat_id: String,
    category: SeatCategory,
    price: String,
    price_cents: u64,
}

#[derive(Debug, Serialize)]
struct PriceResponse {
    seats: Vec<SeatPriceResponse>,
    summary: String,
    total: String,
    total_cents: u64,
}

fn price_response(breakdown: &PriceBreakdown) -> PriceResponse {
    let seats = breakdown
        .per_seat
        .iter()
        .map(|p| SeatPriceResponse {
            seat_id: p.seat_id.to_string(),
            category: p.category,
            price: p.price.to_decimal_string(),
            price_cents: p.price.cents(),
        })
        .collect();
    PriceResponse {
        seats,
        summary: breakdown.summary(),
        total: breakdown.total.to_decimal_string(),
        total_cents: breakdown.total.cents(),
    }
}

/* ---------- PRICE ---------- */

// POST /api/bookings/price
#[derive(Debug, Deserialize, Validate)]
struct PriceRequest {
    auditorium_id: u32,
    #[validate(length(min = 1, max = 8))]
    seats: Vec<String>,
}

async fn price_selection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PriceRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    // Categories depend on the layout only, not on occupancy.
    let layout = state.layouts.resolve(req.auditorium_id);
    let seat_map = SeatMap::build(&layout, &HashSet::new());

    let table = state.backend.get_pricing_table(req.auditorium_id).await?;
    let breakdown = price_seat_ids(&seat_map, &req.seats, &table)?;

    Ok((StatusCode::OK, Json(price_response(&breakdown))))
}

/* ---------- BOOKINGS ---------- */

// POST /api/bookings
#[derive(Debug, Deserialize, Validate)]
struct CreateBookingRequest {
    showtime_id: u32,
    auditorium_id: u32,
    #[validate(range(min = 1))]
    user_id: u32,
    #[validate(length(min = 1, max = 8))]
    seats: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CreateBookingResponse {
    status: BookingStatus,
    seats: Vec<String>,
    price: PriceResponse,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let layout = state.layouts.resolve(req.auditorium_id);
    let (occupied, table) = futures::join!(
        state.backend.get_occupied_seats(req.showtime_id),
        state.backend.get_pricing_table(req.auditorium_id),
    );
    let seat_map = SeatMap::build(&layout, &occupied);

    let seats = verify_block(&seat_map, &req.seats)?;
    // Nothing is submitted without a price.
    let breakdown = price(&seats, &table?);

    let submission = BookingSubmission {
        showtime_id: req.showtime_id,
        user_id: req.user_id,
        seats: seats.iter().map(|s| s.id.to_string()).collect(),
    };
    match state.backend.submit_booking(&submission).await? {
        BookingStatus::Success => {
            tracing::info!(
                "Booked {} seats for user {} on showtime {}, total {}",
                submission.seats.len(),
                submission.user_id,
                submission.showtime_id,
                breakdown.total
            );
            Ok((
                StatusCode::CREATED,
                Json(CreateBookingResponse {
                    status: BookingStatus::Success,
                    price: price_response(&breakdown),
                    seats: submission.seats,
                }),
            ))
        }
        BookingStatus::Failure => {
            tracing::warn!(
                "Backend rejected booking for user {} on showtime {}",
                submission.user_id,
                submission.showtime_id
            );
            Err(BookingError::BookingRejected.into())
        }
    }
}
