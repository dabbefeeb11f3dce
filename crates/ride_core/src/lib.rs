//! Ride pricing model: fare policies per ride kind, drivers and riders that
//! hold shared ride handles, and the formatted reports printed by
//! `ride_report`.

pub mod demo;
pub mod driver;
pub mod error;
pub mod fare;
pub mod report;
pub mod ride;
pub mod rider;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use error::{Result, RideError};
