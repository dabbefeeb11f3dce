//! Shared formatting for ride, driver, and rider reports.

use std::io::Write;

use crate::error::Result;
use crate::ride::SharedRide;

pub const ALL_RIDES_HEADER: &str = "=== All rides (polymorphic fare calculation) ===";
pub const DRIVER_HEADER: &str = "=== Driver info and rides (encapsulated assignedRides) ===";
pub const RIDER_HEADER: &str = "=== Rider ride history ===";

/// Monetary amount with a dollar sign and two decimals.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Distance with at most six decimals and no trailing zeros: `12.3`, `10`.
pub fn format_distance(miles: f64) -> String {
    let fixed = format!("{miles:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Write one summary line per ride, in iteration order.
pub fn write_ride_lines<'a, W, I>(out: &mut W, rides: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a SharedRide>,
{
    for ride in rides {
        ride.write_to(out)?;
    }
    Ok(())
}
