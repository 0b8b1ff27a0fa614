//! Device position capability, abstracted so the controller can run headless.

use std::time::Duration;

use async_trait::async_trait;
use shared::domain::Coordinates;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached position the platform may answer with.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coords: Coordinates,
    pub accuracy_m: Option<f64>,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates::new(latitude, longitude),
            accuracy_m: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct PositionError {
    pub code: PositionErrorCode,
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Whether the platform exposes a position capability at all.
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self, options: PositionOptions) -> Result<Position, PositionError>;
}

pub struct MissingGeolocation;

#[async_trait]
impl GeolocationProvider for MissingGeolocation {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self, _options: PositionOptions) -> Result<Position, PositionError> {
        Err(PositionError::new(
            PositionErrorCode::PositionUnavailable,
            "geolocation capability is unavailable",
        ))
    }
}

/// Answers every request with a preset outcome, e.g. coordinates given on the command line.
pub struct FixedGeolocation {
    outcome: Result<Position, PositionError>,
}

impl FixedGeolocation {
    pub fn new(position: Position) -> Self {
        Self {
            outcome: Ok(position),
        }
    }

    pub fn failing(error: PositionError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(&self, options: PositionOptions) -> Result<Position, PositionError> {
        tracing::debug!(
            high_accuracy = options.enable_high_accuracy,
            timeout_ms = options.timeout.as_millis() as u64,
            "answering position request from fixed provider"
        );
        self.outcome.clone()
    }
}
