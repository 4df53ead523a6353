pub mod layouts;

use serde::Deserialize;
use std::env;
use std::str::FromStr;

use crate::errors::BookingError;

pub use layouts::LayoutTable;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub circuit_breaker: CircuitBreakerConfig,
    pub layouts: LayoutsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
    /// `json` for structured logs, anything else for plain text.
    pub log_format: String,
}

/// Where the booking backend (occupancy, prices, ticket submission) lives.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CircuitBreakerConfig {
    pub failure_threshold: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutsConfig {
    pub file: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_var_or<T: FromStr>(key: &str, default: &str) -> Result<T, BookingError> {
    let raw = var_or(key, default);
    raw.parse()
        .map_err(|_| BookingError::Config(format!("{} must be a valid number, got {:?}", key, raw)))
}

impl Config {
    pub fn from_env() -> Result<Self, BookingError> {
        Ok(Config {
            app: AppConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parsed_var_or("PORT", "8000")?,
                environment: var_or("ENVIRONMENT", "development"),
                rust_log: var_or("RUST_LOG", "seat_booking=debug,tower_http=debug"),
                log_format: var_or("LOG_FORMAT", "text"),
            },
            backend: BackendConfig {
                url: var_or("BACKEND_URL", "http://127.0.0.1:18080")
                    .trim_end_matches('/')
                    .to_string(),
                timeout_seconds: parsed_var_or("BACKEND_TIMEOUT_SECONDS", "10")?,
            },
            circuit_breaker: CircuitBreakerConfig {
                failure_threshold: parsed_var_or("CIRCUIT_BREAKER_FAILURE_THRESHOLD", "5")?,
                timeout_seconds: parsed_var_or("CIRCUIT_BREAKER_TIMEOUT_SECONDS", "60")?,
            },
            layouts: LayoutsConfig {
                file: var_or("AUDITORIUM_LAYOUTS_FILE", "config/auditoriums.toml"),
            },
        })
    }

    /// Settings for tests and local tooling, pointed at `backend_url`.
    pub fn for_backend(backend_url: &str) -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
                rust_log: "seat_booking=debug".to_string(),
                log_format: "text".to_string(),
            },
            backend: BackendConfig {
                url: backend_url.trim_end_matches('/').to_string(),
                timeout_seconds: 5,
            },
            circuit_breaker: CircuitBreakerConfig {
                failure_threshold: 5,
                timeout_seconds: 60,
            },
            layouts: LayoutsConfig {
                file: "config/auditoriums.toml".to_string(),
            },
        }
    }
}
