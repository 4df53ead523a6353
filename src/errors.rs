use axum::http::StatusCode;
use thiserror::Error;

/// Every way the seat-picking flow can fail.
///
/// None of these are fatal: each one degrades to an empty or unchanged
/// selection, and the HTTP layer turns them into a status code plus a
/// message the front-end can show.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("seat {0} is already occupied")]
    AnchorOccupied(String),

    #[error("not enough adjacent seats available from this point ({found} of {requested})")]
    NoBlockFound { requested: u32, found: u32 },

    #[error("pricing is unavailable for auditorium {0}")]
    PricingUnavailable(u32),

    #[error("unknown seat {0}")]
    UnknownSeat(String),

    #[error("party size must be between 1 and {max}, got {got}")]
    InvalidPartySize { got: u32, max: u32 },

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("booking backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("booking was rejected by the backend")]
    BookingRejected,

    #[error("configuration error: {0}")]
    Config(String),
}

/// 419 is what the booking front-end expects for seat conflicts.
pub fn status_419() -> StatusCode {
    StatusCode::from_u16(419).unwrap_or(StatusCode::CONFLICT)
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::AnchorOccupied(_)
            | BookingError::NoBlockFound { .. }
            | BookingError::BookingRejected => status_419(),
            BookingError::UnknownSeat(_)
            | BookingError::InvalidPartySize { .. }
            | BookingError::InvalidSelection(_)
            | BookingError::InvalidLayout(_) => StatusCode::BAD_REQUEST,
            BookingError::PricingUnavailable(_) | BookingError::BackendUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            BookingError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BookingError> for (StatusCode, String) {
    fn from(err: BookingError) -> Self {
        (err.status_code(), err.to_string())
    }
}

impl From<config::ConfigError> for BookingError {
    fn from(err: config::ConfigError) -> Self {
        BookingError::Config(err.to_string())
    }
}
