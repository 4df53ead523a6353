//! Client for the booking backend.
//!
//! The backend owns occupancy, prices and ticket submission. Every call
//! goes through a [`CircuitBreaker`]; when the backend is failing, reads
//! degrade (no occupancy, no prices) instead of hanging the seat picker.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::errors::BookingError;
use crate::models::booking::{AuditoriumDetails, BookingReply, BookingStatus, BookingSubmission};
use crate::models::pricing::PricingTable;
use crate::services::circuit_breaker::{CircuitBreaker, CircuitState};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("circuit breaker is open - booking backend temporarily unavailable")]
    CircuitOpen,
    #[error("booking backend error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
    circuit_breaker: Arc<CircuitBreaker>,
}

impl BackendClient {
    pub fn from_config(config: &Config) -> Result<Self, BookingError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend.timeout_seconds))
            .build()
            .map_err(|e| BookingError::Config(format!("failed to create HTTP client: {}", e)))?;
        let circuit_breaker = Arc::new(CircuitBreaker::new(
            config.circuit_breaker.failure_threshold,
            Duration::from_secs(config.circuit_breaker.timeout_seconds),
        ));

        Ok(Self {
            base_url: config.backend.url.clone(),
            http_client,
            circuit_breaker,
        })
    }

    async fn execute_with_circuit_breaker<F, T>(&self, operation: F) -> Result<T, BackendError>
    where
        F: std::future::Future<Output = Result<T, reqwest::Error>>,
    {
        if !self.circuit_breaker.can_execute() {
            warn!("Circuit breaker is OPEN - blocking booking backend request");
            return Err(BackendError::CircuitOpen);
        }

        match operation.await {
            Ok(result) => {
                self.circuit_breaker.record_success();
                Ok(result)
            }
            Err(e) => {
                error!("Booking backend request failed: {:?}", e);
                self.circuit_breaker.record_failure();
                Err(BackendError::Http(e))
            }
        }
    }

    /// Seat ids already taken for a showtime. Any failure reads as "nothing
    /// occupied" so the seat map still renders.
    pub async fn get_occupied_seats(&self, showtime_id: u32) -> HashSet<String> {
        let operation = async {
            self.http_client
                .get(format!("{}/occupied-seats", self.base_url))
                .query(&[("showtime_id", showtime_id)])
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<String>>()
                .await
        };

        match self.execute_with_circuit_breaker(operation).await {
            Ok(seats) => seats.into_iter().collect(),
            Err(e) => {
                warn!("Could not fetch occupied seats for showtime {}: {}", showtime_id, e);
                HashSet::new()
            }
        }
    }

    pub async fn get_pricing_table(&self, auditorium_id: u32) -> Result<PricingTable, BookingError> {
        let operation = async {
            self.http_client
                .get(format!("{}/auditorium-details/{}", self.base_url, auditorium_id))
                .send()
                .await?
                .error_for_status()?
                .json::<AuditoriumDetails>()
                .await
        };

        let details = self
            .execute_with_circuit_breaker(operation)
            .await
            .map_err(|e| {
                warn!("Could not fetch prices for auditorium {}: {}", auditorium_id, e);
                BookingError::PricingUnavailable(auditorium_id)
            })?;

        details.pricing_table().ok_or_else(|| {
            warn!("Auditorium {} has unusable prices: {:?}", auditorium_id, details);
            BookingError::PricingUnavailable(auditorium_id)
        })
    }

    pub async fn submit_booking(
        &self,
        submission: &BookingSubmission,
    ) -> Result<BookingStatus, BookingError> {
        info!(
            "Submitting booking: showtime={}, user={}, seats={:?}",
            submission.showtime_id, submission.user_id, submission.seats
        );

        let operation = async {
            self.http_client
                .post(format!("{}/book-tickets", self.base_url))
                .json(submission)
                .send()
                .await?
                .error_for_status()?
                .json::<BookingReply>()
                .await
        };

        let reply = self
            .execute_with_circuit_breaker(operation)
            .await
            .map_err(|e| BookingError::BackendUnavailable(e.to_string()))?;
        Ok(reply.into())
    }

    pub fn circuit_breaker_status(&self) -> (CircuitState, u32) {
        (self.circuit_breaker.state(), self.circuit_breaker.failure_count())
    }
}
