use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::models::seat::SeatId;
use crate::models::selection::{PartySize, SelectionSession};
use crate::services::seat_map::SeatMap;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auditoriums/{auditorium_id}/seats", get(get_seat_map))
        .route("/seats/select", patch(select_seats))
}

/// Layout for the auditorium plus live occupancy for the showtime.
pub(crate) async fn load_seat_map(state: &AppState, auditorium_id: u32, showtime_id: u32) -> SeatMap {
    let layout = state.layouts.resolve(auditorium_id);
    let occupied = state.backend.get_occupied_seats(showtime_id).await;
    SeatMap::build(&layout, &occupied)
}

/* ---------- SEAT MAP ---------- */

// GET /api/auditoriums/{auditorium_id}/seats?showtime_id=
#[derive(Debug, Deserialize)]
struct SeatMapQuery {
    showtime_id: u32,
}

#[derive(Debug, Serialize)]
struct SeatMapResponse {
    auditorium_id: u32,
    showtime_id: u32,
    free_seats: usize,
    seat_map: SeatMap,
}

async fn get_seat_map(
    State(state): State<Arc<AppState>>,
    Path(auditorium_id): Path<u32>,
    Query(params): Query<SeatMapQuery>,
) -> impl IntoResponse {
    let seat_map = load_seat_map(&state, auditorium_id, params.showtime_id).await;
    let payload = SeatMapResponse {
        auditorium_id,
        showtime_id: params.showtime_id,
        free_seats: seat_map.free_count(),
        seat_map,
    };
    (StatusCode::OK, Json(payload))
}

/* ---------- SELECTION ---------- */

// PATCH /api/seats/select
#[derive(Debug, Deserialize, Validate)]
struct SelectSeatsRequest {
    showtime_id: u32,
    auditorium_id: u32,
    #[validate(range(min = 1, max = 8))]
    party_size: u32,
    anchor_seat_id: String,
    /// Selection currently shown to the visitor, if any.
    #[serde(default)]
    seats: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct SelectSeatsResponse {
    seats: Vec<SeatId>,
    complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn select_seats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectSeatsRequest>,
) -> Result<Response, (StatusCode, String)> {
    req.validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let party_size = PartySize::new(req.party_size)?;

    let seat_map = load_seat_map(&state, req.auditorium_id, req.showtime_id).await;
    let mut session = SelectionSession::new(req.showtime_id, req.auditorium_id, party_size);
    if let Some(prior) = req.seats.as_deref().filter(|ids| !ids.is_empty()) {
        if let Err(e) = session.restore(&seat_map, prior) {
            tracing::debug!("select_seats: dropping prior selection {:?}: {}", prior, e);
        }
    }

    let (status, error) = match session.click(&seat_map, &req.anchor_seat_id) {
        Ok(_) => (StatusCode::OK, None),
        Err(e) => {
            tracing::debug!("select_seats {}: {}", req.anchor_seat_id, e);
            (e.status_code(), Some(e.to_string()))
        }
    };

    let payload = SelectSeatsResponse {
        complete: session.is_complete(),
        seats: session.seats().to_vec(),
        error,
    };
    Ok((status, Json(payload)).into_response())
}
