use thiserror::Error;

use crate::ride::RideId;

/// Errors produced while building rides, registries, and fare schedules.
#[derive(Debug, Error)]
pub enum RideError {
    /// Distance was negative or not a finite number.
    #[error("invalid ride data for ride {id}: distance {distance} must be a finite, non-negative number of miles")]
    InvalidRideData { id: RideId, distance: f64 },
    #[error("ride {0} is already registered")]
    DuplicateRideId(RideId),
    #[error("ride {0} is not registered")]
    UnknownRideId(RideId),
    #[error("invalid fare schedule: {0}")]
    InvalidFareSchedule(String),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RideError>;
