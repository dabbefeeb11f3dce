//! Test helpers for common test setup and utilities.
//!
//! Shared by unit tests, integration tests, and benches so they all price
//! the same rides.

use std::rc::Rc;

use crate::ride::{Ride, RideKind, SharedRide};

/// Absolute tolerance used when comparing fares.
pub const FARE_EPSILON: f64 = 1e-9;

/// Assert two fares are equal within [`FARE_EPSILON`].
///
/// # Panics
///
/// Panics when the values differ by more than the tolerance.
#[track_caller]
pub fn assert_fare_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < FARE_EPSILON,
        "fare mismatch: expected {expected}, got {actual}"
    );
}

/// Build a shared ride with placeholder locations.
///
/// # Panics
///
/// Panics if `distance_miles` is negative or not finite.
pub fn test_ride(id: u32, kind: RideKind, distance_miles: f64) -> SharedRide {
    Rc::new(
        Ride::new(id, kind, "Test Pickup", "Test Dropoff", distance_miles)
            .expect("test ride distance should be valid"),
    )
}

/// `count` standard rides with ids starting at 1 and distances 1.0, 2.0, ...
pub fn standard_rides(count: u32) -> Vec<SharedRide> {
    (1..=count)
        .map(|id| test_ride(id, RideKind::Standard, f64::from(id)))
        .collect()
}
